//! Vehicle catalog module.
//!
//! Contains types for vehicles, add-on options, compatibility rules,
//! and the per-session catalog snapshot.

mod compatibility;
mod option;
mod snapshot;
mod vehicle;

pub use compatibility::CompatibilitySet;
pub use option::VehicleOption;
pub use snapshot::CatalogSnapshot;
pub use vehicle::{FuelType, Vehicle, VehicleKind, VehicleStatus};
