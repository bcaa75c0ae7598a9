//! Per-session catalog snapshot.

use crate::catalog::{CompatibilitySet, Vehicle, VehicleOption};
use crate::ids::{OptionId, VehicleId};
use crate::money::Currency;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The read-only catalog a configurator session works against.
///
/// Fetched once when the configurator page is entered and never mutated
/// afterwards. The compatibility set is the symmetric closure of the
/// declarations carried on the option records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogSnapshot {
    vehicles: HashMap<VehicleId, Vehicle>,
    options: HashMap<OptionId, VehicleOption>,
    compatibility: CompatibilitySet,
}

impl CatalogSnapshot {
    /// Build a snapshot from fetched catalog collections.
    pub fn new(vehicles: Vec<Vehicle>, options: Vec<VehicleOption>) -> Self {
        let compatibility = CompatibilitySet::from_options(options.iter());
        Self {
            vehicles: vehicles.into_iter().map(|v| (v.id.clone(), v)).collect(),
            options: options.into_iter().map(|o| (o.id.clone(), o)).collect(),
            compatibility,
        }
    }

    /// Look up a vehicle.
    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id)
    }

    /// Look up an option.
    pub fn option(&self, id: &OptionId) -> Option<&VehicleOption> {
        self.options.get(id)
    }

    /// All vehicles, sorted by display name.
    pub fn vehicles(&self) -> Vec<&Vehicle> {
        let mut all: Vec<&Vehicle> = self.vehicles.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// All options, sorted by display name.
    pub fn options(&self) -> Vec<&VehicleOption> {
        let mut all: Vec<&VehicleOption> = self.options.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// The compatibility rules in effect.
    pub fn compatibility(&self) -> &CompatibilitySet {
        &self.compatibility
    }

    /// Members of `selected` that conflict with `candidate`.
    pub fn conflicts_with<'a>(
        &self,
        candidate: &OptionId,
        selected: impl IntoIterator<Item = &'a OptionId>,
    ) -> Vec<OptionId> {
        self.compatibility.conflicts_with(candidate, selected)
    }

    /// The catalog's pricing currency, taken from the first vehicle.
    pub fn currency(&self) -> Currency {
        self.vehicles
            .values()
            .next()
            .map(|v| v.price.currency)
            .unwrap_or_default()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}
