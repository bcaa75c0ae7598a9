//! Dealership subsidiary records.

use crate::accounts::Address;
use crate::ids::SubsidiaryId;
use serde::{Deserialize, Serialize};

/// A dealership subsidiary (branch location).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subsidiary {
    /// Unique subsidiary identifier.
    pub id: SubsidiaryId,
    /// Branch name (e.g., "Showroom Douala").
    pub name: String,
    /// City the branch operates in.
    pub city: String,
    /// Branch address.
    pub address: Option<Address>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Subsidiary {
    /// Create a new subsidiary record.
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: SubsidiaryId::generate(),
            name: name.into(),
            city: city.into(),
            address: None,
            phone: None,
            email: None,
            created_at: now,
            updated_at: now,
        }
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
