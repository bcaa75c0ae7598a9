//! Add-on option types.

use crate::ids::OptionId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An add-on option a customer can attach to a configured vehicle.
///
/// Each option declares the set of options it cannot be combined with.
/// The source data may declare a pair from only one side; consumers must
/// treat the relation as symmetric (see `CompatibilitySet`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleOption {
    /// Unique option identifier.
    pub id: OptionId,
    /// Display name (e.g., "Tow hitch").
    pub name: String,
    /// Longer description for the configurator page.
    pub description: Option<String>,
    /// Unit price (non-negative), added once per configured vehicle.
    pub price: Money,
    /// Options this one is declared incompatible with.
    pub incompatible_with: Vec<OptionId>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl VehicleOption {
    /// Create a new option.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        let now = current_timestamp();
        Self {
            id: OptionId::generate(),
            name: name.into(),
            description: None,
            price,
            incompatible_with: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare this option incompatible with another.
    ///
    /// Self-references and duplicates are ignored.
    pub fn declare_incompatibility(&mut self, other: OptionId) {
        if other == self.id || self.incompatible_with.contains(&other) {
            return;
        }
        self.incompatible_with.push(other);
        self.updated_at = current_timestamp();
    }

    /// Check whether this option's own record declares a conflict with
    /// the given option. One-directional; see `conflicts_with` for the
    /// symmetric check.
    pub fn declares_conflict_with(&self, other: &OptionId) -> bool {
        self.incompatible_with.contains(other)
    }

    /// Check whether two options conflict, in either declaration
    /// direction.
    pub fn conflicts_with(&self, other: &VehicleOption) -> bool {
        self.declares_conflict_with(&other.id) || other.declares_conflict_with(&self.id)
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
