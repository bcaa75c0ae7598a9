//! API error types.

use thiserror::Error;

/// Errors surfaced at the backend boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status from the backend.
    #[error("Backend returned status {code}: {message}")]
    Status { code: u16, message: String },

    /// Payload parsed but carried values the domain rejects.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Payload could not be parsed.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend rejected the submitted selection. The backend does
    /// not disambiguate between incompatibility and stock exhaustion at
    /// this boundary.
    #[error("Selection rejected by the backend")]
    SelectionRejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::Status {
            code: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned status 503: maintenance");
    }
}
