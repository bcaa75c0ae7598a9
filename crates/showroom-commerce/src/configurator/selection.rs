//! Selection state.

use crate::ids::{OptionId, VehicleId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The in-memory, per-session record of the customer's choices.
///
/// Invariants, enforced by `Configurator`:
/// - the option set never contains two mutually incompatible options
/// - selecting a vehicle empties the option set
/// - quantity is always at least 1
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    /// The chosen vehicle, if any.
    pub vehicle_id: Option<VehicleId>,
    /// The chosen options. Order is irrelevant; each appears at most once.
    pub option_ids: BTreeSet<OptionId>,
    /// Number of configured vehicles, at least 1.
    pub quantity: i64,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self {
            vehicle_id: None,
            option_ids: BTreeSet::new(),
            quantity: 1,
        }
    }

    /// Check if a vehicle has been chosen.
    pub fn has_vehicle(&self) -> bool {
        self.vehicle_id.is_some()
    }

    /// Check if an option is currently chosen.
    pub fn contains_option(&self, id: &OptionId) -> bool {
        self.option_ids.contains(id)
    }

    /// Number of chosen options.
    pub fn option_count(&self) -> usize {
        self.option_ids.len()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

/// Price breakdown for a selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionPricing {
    /// The chosen vehicle's unit price.
    pub vehicle_price: Money,
    /// Sum of the chosen options' prices.
    pub options_total: Money,
    /// Price of one configured vehicle (vehicle + options).
    pub unit_price: Money,
    /// Configured quantity.
    pub quantity: i64,
    /// Final total (unit price x quantity).
    pub grand_total: Money,
}
