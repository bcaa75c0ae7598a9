//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an OptionId where a VehicleId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define all ID types
define_id!(VehicleId);
define_id!(OptionId);
define_id!(CartId);
define_id!(CartLineId);
define_id!(OrderId);
define_id!(OrderLineId);
define_id!(InvoiceId);
define_id!(PaymentId);
define_id!(CustomerId);
define_id!(SubsidiaryId);
define_id!(AddressId);

/// Generate a unique ID using timestamp and an atomic counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("{:x}-{:x}", timestamp as u64, counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = VehicleId::new("veh-123");
        assert_eq!(id.as_str(), "veh-123");
    }

    #[test]
    fn test_id_generation() {
        let id1 = VehicleId::generate();
        let id2 = VehicleId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_from_string() {
        let id: OptionId = "opt-456".into();
        assert_eq!(id.as_str(), "opt-456");
    }

    #[test]
    fn test_id_display() {
        let id = OrderId::new("ord-789");
        assert_eq!(format!("{}", id), "ord-789");
    }

    #[test]
    fn test_id_ordering() {
        let a = OptionId::new("opt-a");
        let b = OptionId::new("opt-b");
        assert!(a < b);
    }
}
