//! Configuration engine.

use crate::catalog::CatalogSnapshot;
use crate::configurator::{Selection, SelectionPricing};
use crate::error::StorefrontError;
use crate::ids::{OptionId, VehicleId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Outcome of a toggle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionToggle {
    /// The option was added to the selection.
    Added,
    /// The option was removed from the selection.
    Removed,
}

/// The payload handed to the cart collaborator on commit.
///
/// Matches the backend's cart-submission contract; the engine produces
/// it but never performs the network call itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSubmission {
    /// Chosen vehicle.
    pub vehicle_id: VehicleId,
    /// Chosen options.
    pub options: Vec<OptionId>,
    /// Configured quantity, at least 1.
    pub quantity: i64,
}

/// The vehicle configuration engine.
///
/// Owns the session's catalog snapshot and the mutable `Selection`, and
/// enforces the selection invariants: no two mutually incompatible
/// options, options cleared on vehicle change, quantity floored at 1.
#[derive(Debug, Clone)]
pub struct Configurator {
    catalog: CatalogSnapshot,
    selection: Selection,
}

impl Configurator {
    /// Start a session over a fetched catalog with an empty selection.
    pub fn new(catalog: CatalogSnapshot) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
        }
    }

    /// The session's catalog.
    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Choose a vehicle, discarding any previously chosen options.
    ///
    /// Succeeds for every vehicle present in the catalog; quantity is
    /// left as configured.
    pub fn select_vehicle(&mut self, id: &VehicleId) -> Result<(), StorefrontError> {
        if self.catalog.vehicle(id).is_none() {
            return Err(StorefrontError::VehicleNotFound(id.to_string()));
        }
        self.selection.vehicle_id = Some(id.clone());
        self.selection.option_ids.clear();
        Ok(())
    }

    /// Toggle an option on or off.
    ///
    /// Removal always succeeds. Addition checks every currently chosen
    /// option for a declared incompatibility, in both declaration
    /// directions; on conflict the selection is left unchanged and the
    /// error names every conflicting option.
    pub fn toggle_option(&mut self, id: &OptionId) -> Result<OptionToggle, StorefrontError> {
        if self.selection.option_ids.remove(id) {
            return Ok(OptionToggle::Removed);
        }

        let option = self
            .catalog
            .option(id)
            .ok_or_else(|| StorefrontError::OptionNotFound(id.to_string()))?;

        let conflicts = self
            .catalog
            .conflicts_with(id, self.selection.option_ids.iter());
        if !conflicts.is_empty() {
            return Err(StorefrontError::IncompatibleOption {
                option: option.name.clone(),
                conflicts: conflicts
                    .iter()
                    .map(|c| {
                        self.catalog
                            .option(c)
                            .map(|o| o.name.clone())
                            .unwrap_or_else(|| c.to_string())
                    })
                    .collect(),
            });
        }

        self.selection.option_ids.insert(id.clone());
        Ok(OptionToggle::Added)
    }

    /// Set the quantity. Values below 1 are clamped to 1, not rejected.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.selection.quantity = quantity.max(1);
    }

    /// Price the current selection.
    ///
    /// Fails with `NoVehicleSelected` when no vehicle is chosen.
    pub fn pricing(&self) -> Result<SelectionPricing, StorefrontError> {
        let vehicle_id = self
            .selection
            .vehicle_id
            .as_ref()
            .ok_or(StorefrontError::NoVehicleSelected)?;
        let vehicle = self
            .catalog
            .vehicle(vehicle_id)
            .ok_or_else(|| StorefrontError::VehicleNotFound(vehicle_id.to_string()))?;

        let currency = vehicle.price.currency;
        let mut options_total = Money::zero(currency);
        for id in &self.selection.option_ids {
            let option = self
                .catalog
                .option(id)
                .ok_or_else(|| StorefrontError::OptionNotFound(id.to_string()))?;
            if option.price.currency != currency {
                return Err(StorefrontError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: option.price.currency.code().to_string(),
                });
            }
            options_total = options_total
                .try_add(&option.price)
                .ok_or(StorefrontError::Overflow)?;
        }

        let unit_price = vehicle
            .price
            .try_add(&options_total)
            .ok_or(StorefrontError::Overflow)?;
        let grand_total = unit_price
            .try_multiply(self.selection.quantity)
            .ok_or(StorefrontError::Overflow)?;

        Ok(SelectionPricing {
            vehicle_price: vehicle.price,
            options_total,
            unit_price,
            quantity: self.selection.quantity,
            grand_total,
        })
    }

    /// Total for the current selection.
    ///
    /// Returns zero in the catalog currency when no vehicle is selected
    /// (or when the selection cannot be priced), so the page can render
    /// a live total at all times.
    pub fn current_total(&self) -> Money {
        self.pricing()
            .map(|p| p.grand_total)
            .unwrap_or_else(|_| Money::zero(self.catalog.currency()))
    }

    /// Produce the cart-submission payload for the current selection.
    ///
    /// Fails with `NoVehicleSelected` when no vehicle is chosen. The
    /// caller owns the network call and resets or discards the session
    /// after the submission succeeds.
    pub fn commit(&self) -> Result<CartSubmission, StorefrontError> {
        let vehicle_id = self
            .selection
            .vehicle_id
            .clone()
            .ok_or(StorefrontError::NoVehicleSelected)?;
        Ok(CartSubmission {
            vehicle_id,
            options: self.selection.option_ids.iter().cloned().collect(),
            quantity: self.selection.quantity,
        })
    }

    /// Discard the selection, keeping the catalog.
    pub fn reset(&mut self) {
        self.selection = Selection::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Vehicle, VehicleOption};
    use crate::money::Currency;

    fn vehicle(id: &str, price: i64) -> Vehicle {
        let mut v = Vehicle::new(id, id, Money::new(price, Currency::XAF));
        v.id = VehicleId::new(id);
        v
    }

    fn option(id: &str, price: i64) -> VehicleOption {
        let mut o = VehicleOption::new(id, Money::new(price, Currency::XAF));
        o.id = OptionId::new(id);
        o
    }

    fn session() -> Configurator {
        let mut a = option("opt-a", 500_000);
        let b = option("opt-b", 750_000);
        let c = option("opt-c", 250_000);
        // Declared from a's side only
        a.declare_incompatibility(b.id.clone());

        let catalog = CatalogSnapshot::new(
            vec![vehicle("veh-sedan", 10_000_000), vehicle("veh-suv", 14_000_000)],
            vec![a, b, c],
        );
        Configurator::new(catalog)
    }

    #[test]
    fn test_empty_session_totals_zero() {
        let s = session();
        assert!(s.current_total().is_zero());
        assert!(matches!(
            s.pricing(),
            Err(StorefrontError::NoVehicleSelected)
        ));
    }

    #[test]
    fn test_select_vehicle_and_total() {
        let mut s = session();
        s.select_vehicle(&VehicleId::new("veh-sedan")).unwrap();
        assert_eq!(s.current_total().amount_minor, 10_000_000);
    }

    #[test]
    fn test_unknown_vehicle_rejected() {
        let mut s = session();
        assert!(matches!(
            s.select_vehicle(&VehicleId::new("veh-missing")),
            Err(StorefrontError::VehicleNotFound(_))
        ));
        assert!(!s.selection().has_vehicle());
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut s = session();
        s.select_vehicle(&VehicleId::new("veh-sedan")).unwrap();

        let a = OptionId::new("opt-a");
        assert_eq!(s.toggle_option(&a).unwrap(), OptionToggle::Added);
        assert_eq!(s.current_total().amount_minor, 10_500_000);

        assert_eq!(s.toggle_option(&a).unwrap(), OptionToggle::Removed);
        assert_eq!(s.current_total().amount_minor, 10_000_000);
    }

    #[test]
    fn test_incompatible_addition_rejected_selection_unchanged() {
        let mut s = session();
        s.select_vehicle(&VehicleId::new("veh-sedan")).unwrap();
        s.toggle_option(&OptionId::new("opt-a")).unwrap();

        // b conflicts with a even though only a declares the pair
        let err = s.toggle_option(&OptionId::new("opt-b")).unwrap_err();
        match err {
            StorefrontError::IncompatibleOption { option, conflicts } => {
                assert_eq!(option, "opt-b");
                assert_eq!(conflicts, vec!["opt-a".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(s.selection().contains_option(&OptionId::new("opt-a")));
        assert!(!s.selection().contains_option(&OptionId::new("opt-b")));
        assert_eq!(s.current_total().amount_minor, 10_500_000);
    }

    #[test]
    fn test_removal_then_conflicting_addition_succeeds() {
        let mut s = session();
        s.select_vehicle(&VehicleId::new("veh-sedan")).unwrap();
        s.toggle_option(&OptionId::new("opt-a")).unwrap();
        s.toggle_option(&OptionId::new("opt-a")).unwrap();

        assert_eq!(
            s.toggle_option(&OptionId::new("opt-b")).unwrap(),
            OptionToggle::Added
        );
        assert_eq!(s.current_total().amount_minor, 10_750_000);
    }

    #[test]
    fn test_quantity_clamped_to_floor_of_one() {
        let mut s = session();
        s.select_vehicle(&VehicleId::new("veh-sedan")).unwrap();

        s.set_quantity(3);
        assert_eq!(s.current_total().amount_minor, 30_000_000);

        s.set_quantity(0);
        assert_eq!(s.selection().quantity, 1);

        s.set_quantity(-5);
        assert_eq!(s.selection().quantity, 1);
        assert_eq!(s.current_total().amount_minor, 10_000_000);
    }

    #[test]
    fn test_switching_vehicle_clears_options_keeps_quantity() {
        let mut s = session();
        s.select_vehicle(&VehicleId::new("veh-sedan")).unwrap();
        s.toggle_option(&OptionId::new("opt-a")).unwrap();
        s.set_quantity(2);

        s.select_vehicle(&VehicleId::new("veh-suv")).unwrap();
        assert_eq!(s.selection().option_count(), 0);
        assert_eq!(s.current_total().amount_minor, 28_000_000);
    }

    #[test]
    fn test_commit_requires_vehicle() {
        let s = session();
        assert!(matches!(
            s.commit(),
            Err(StorefrontError::NoVehicleSelected)
        ));
    }

    #[test]
    fn test_commit_payload() {
        let mut s = session();
        s.select_vehicle(&VehicleId::new("veh-sedan")).unwrap();
        s.toggle_option(&OptionId::new("opt-b")).unwrap();
        s.toggle_option(&OptionId::new("opt-c")).unwrap();
        s.set_quantity(2);

        let submission = s.commit().unwrap();
        assert_eq!(submission.vehicle_id, VehicleId::new("veh-sedan"));
        assert_eq!(
            submission.options,
            vec![OptionId::new("opt-b"), OptionId::new("opt-c")]
        );
        assert_eq!(submission.quantity, 2);
    }

    #[test]
    fn test_submission_wire_shape() {
        let mut s = session();
        s.select_vehicle(&VehicleId::new("veh-sedan")).unwrap();
        let json = serde_json::to_value(s.commit().unwrap()).unwrap();
        assert_eq!(json["vehicleId"], "veh-sedan");
        assert_eq!(json["quantity"], 1);
        assert!(json["options"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_reset_keeps_catalog() {
        let mut s = session();
        s.select_vehicle(&VehicleId::new("veh-sedan")).unwrap();
        s.reset();

        assert!(!s.selection().has_vehicle());
        assert_eq!(s.selection().quantity, 1);
        assert_eq!(s.catalog().vehicle_count(), 2);
    }

    #[test]
    fn test_pricing_breakdown() {
        let mut s = session();
        s.select_vehicle(&VehicleId::new("veh-sedan")).unwrap();
        s.toggle_option(&OptionId::new("opt-b")).unwrap();
        s.set_quantity(3);

        let pricing = s.pricing().unwrap();
        assert_eq!(pricing.vehicle_price.amount_minor, 10_000_000);
        assert_eq!(pricing.options_total.amount_minor, 750_000);
        assert_eq!(pricing.unit_price.amount_minor, 10_750_000);
        assert_eq!(pricing.grand_total.amount_minor, 32_250_000);
    }
}
