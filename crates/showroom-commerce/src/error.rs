//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Vehicle not found in the catalog.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    /// Option not found in the catalog.
    #[error("Option not found: {0}")]
    OptionNotFound(String),

    /// Attempted to add an option that conflicts with selected options.
    /// The selection is left unchanged.
    #[error("Option \"{option}\" is incompatible with: {}", .conflicts.join(", "))]
    IncompatibleOption {
        option: String,
        conflicts: Vec<String>,
    },

    /// Attempted to price or commit a selection with no vehicle.
    #[error("No vehicle selected")]
    NoVehicleSelected,

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Cart line not found.
    #[error("Line not in cart: {0}")]
    LineNotInCart(String),

    /// Cannot create an order from an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid order status transition.
    #[error("Invalid order transition from {from} to {to}")]
    InvalidOrderTransition { from: String, to: String },

    /// Invalid invoice status transition.
    #[error("Invalid invoice transition from {from} to {to}")]
    InvalidInvoiceTransition { from: String, to: String },

    /// Payment references a different order.
    #[error("Payment {payment} does not reference order {order}")]
    PaymentMismatch { payment: String, order: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StorefrontError {
    fn from(e: serde_json::Error) -> Self {
        StorefrontError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatible_option_message_names_conflicts() {
        let err = StorefrontError::IncompatibleOption {
            option: "Roof rack".to_string(),
            conflicts: vec!["Panoramic sunroof".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Roof rack"));
        assert!(msg.contains("Panoramic sunroof"));
    }

    #[test]
    fn test_transition_message() {
        let err = StorefrontError::InvalidOrderTransition {
            from: "delivered".to_string(),
            to: "cancelled".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid order transition from delivered to cancelled"
        );
    }
}
