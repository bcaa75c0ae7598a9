//! Customer records.

use crate::accounts::Address;
use crate::ids::CustomerId;
use serde::{Deserialize, Serialize};

/// A customer record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    /// Unique customer identifier.
    pub id: CustomerId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Default address.
    pub address: Option<Address>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Customer {
    /// Create a new customer record.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: CustomerId::generate(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_creation() {
        let c = Customer::new("Amina", "Njoya", "amina@example.com");
        assert_eq!(c.full_name(), "Amina Njoya");
        assert!(c.address.is_none());
    }
}
