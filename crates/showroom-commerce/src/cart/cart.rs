//! Cart and cart line types.

use crate::cart::{CartLinePricing, CartPricing};
use crate::catalog::CatalogSnapshot;
use crate::configurator::CartSubmission;
use crate::error::StorefrontError;
use crate::ids::{CartId, CartLineId, CustomerId, OptionId, VehicleId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: i64 = 999;

/// A shopping cart of configured vehicles.
///
/// Each line is one committed configuration. Submissions are
/// re-validated against the catalog on entry: unknown identifiers and
/// incompatible option combinations are rejected the way the backend
/// rejects them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Session ID for anonymous carts.
    pub session_id: String,
    /// Customer ID for authenticated carts.
    pub customer_id: Option<CustomerId>,
    /// Configured-vehicle lines.
    pub lines: Vec<CartLine>,
    /// Cart currency.
    pub currency: Currency,
    /// Customer note.
    pub note: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new cart for a session.
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            session_id: session_id.into(),
            customer_id: None,
            lines: Vec::new(),
            currency: Currency::default(),
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a cart for an authenticated customer.
    pub fn for_customer(customer_id: CustomerId, session_id: impl Into<String>) -> Self {
        let mut cart = Self::new(session_id);
        cart.customer_id = Some(customer_id);
        cart
    }

    /// Add a committed configuration to the cart.
    ///
    /// Re-validates the submission against the catalog: the vehicle and
    /// every option must exist and the option set must be conflict-free.
    /// An identical configuration already in the cart has its quantity
    /// increased instead of gaining a second line.
    pub fn add_submission(
        &mut self,
        submission: &CartSubmission,
        catalog: &CatalogSnapshot,
    ) -> Result<CartLineId, StorefrontError> {
        if submission.quantity <= 0 {
            return Err(StorefrontError::InvalidQuantity(submission.quantity));
        }

        let vehicle = catalog
            .vehicle(&submission.vehicle_id)
            .ok_or_else(|| StorefrontError::VehicleNotFound(submission.vehicle_id.to_string()))?;

        let mut option_ids = submission.options.clone();
        option_ids.sort();
        option_ids.dedup();

        let mut unit_price = vehicle.price;
        for (i, id) in option_ids.iter().enumerate() {
            let option = catalog
                .option(id)
                .ok_or_else(|| StorefrontError::OptionNotFound(id.to_string()))?;

            let conflicts = catalog.conflicts_with(id, option_ids[..i].iter());
            if !conflicts.is_empty() {
                return Err(StorefrontError::IncompatibleOption {
                    option: option.name.clone(),
                    conflicts: conflicts.iter().map(|c| c.to_string()).collect(),
                });
            }

            unit_price = unit_price
                .try_add(&option.price)
                .ok_or(StorefrontError::Overflow)?;
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| {
            l.vehicle_id == submission.vehicle_id && l.option_ids == option_ids
        }) {
            let new_quantity = existing
                .quantity
                .checked_add(submission.quantity)
                .ok_or(StorefrontError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_LINE {
                return Err(StorefrontError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            existing.quantity = new_quantity;
            existing.update_total()?;
            self.updated_at = current_timestamp();
            return Ok(existing.id.clone());
        }

        if submission.quantity > MAX_QUANTITY_PER_LINE {
            return Err(StorefrontError::QuantityExceedsLimit(
                submission.quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        let line = CartLine::new(
            submission.vehicle_id.clone(),
            vehicle.name.clone(),
            option_ids,
            submission.quantity,
            unit_price,
        )?;
        let id = line.id.clone();
        self.lines.push(line);
        self.updated_at = current_timestamp();
        Ok(id)
    }

    /// Update a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Returns whether a
    /// line was affected.
    pub fn update_quantity(
        &mut self,
        line_id: &CartLineId,
        quantity: i64,
    ) -> Result<bool, StorefrontError> {
        if quantity <= 0 {
            return Ok(self.remove_line(line_id));
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(StorefrontError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| &l.id == line_id) {
            line.quantity = quantity;
            line.update_total()?;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line from the cart.
    pub fn remove_line(&mut self, line_id: &CartLineId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        let removed = self.lines.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.updated_at = current_timestamp();
    }

    /// Get a line by ID.
    pub fn get_line(&self, line_id: &CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Total vehicle count (sum of line quantities).
    pub fn vehicle_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct configurations.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Calculate cart pricing.
    pub fn pricing(&self) -> Result<CartPricing, StorefrontError> {
        let lines: Vec<CartLinePricing> = self
            .lines
            .iter()
            .map(|line| CartLinePricing {
                line_id: line.id.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
                total: line.total_price,
            })
            .collect();

        let total = Money::try_sum(self.lines.iter().map(|l| &l.total_price), self.currency)
            .ok_or(StorefrontError::Overflow)?;

        Ok(CartPricing { lines, total })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new("anonymous")
    }
}

/// One committed configuration in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Unique line identifier.
    pub id: CartLineId,
    /// Configured vehicle.
    pub vehicle_id: VehicleId,
    /// Vehicle name (denormalized for display).
    pub vehicle_name: String,
    /// Chosen options, sorted and deduplicated.
    pub option_ids: Vec<OptionId>,
    /// Quantity.
    pub quantity: i64,
    /// Price of one configured vehicle.
    pub unit_price: Money,
    /// Total price (unit_price x quantity).
    pub total_price: Money,
}

impl CartLine {
    /// Create a new line.
    pub fn new(
        vehicle_id: VehicleId,
        vehicle_name: impl Into<String>,
        option_ids: Vec<OptionId>,
        quantity: i64,
        unit_price: Money,
    ) -> Result<Self, StorefrontError> {
        let total_price = unit_price
            .try_multiply(quantity)
            .ok_or(StorefrontError::Overflow)?;
        Ok(Self {
            id: CartLineId::generate(),
            vehicle_id,
            vehicle_name: vehicle_name.into(),
            option_ids,
            quantity,
            unit_price,
            total_price,
        })
    }

    /// Update the total price from the quantity.
    pub fn update_total(&mut self) -> Result<(), StorefrontError> {
        self.total_price = self
            .unit_price
            .try_multiply(self.quantity)
            .ok_or(StorefrontError::Overflow)?;
        Ok(())
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
    use crate::catalog::{Vehicle, VehicleOption};

    fn catalog() -> CatalogSnapshot {
        let mut sedan = Vehicle::new("Corolla", "corolla", Money::new(10_000_000, Currency::XAF));
        sedan.id = VehicleId::new("veh-sedan");

        let mut a = VehicleOption::new("Alarm", Money::new(200_000, Currency::XAF));
        a.id = OptionId::new("opt-a");
        let mut b = VehicleOption::new("Tracker", Money::new(300_000, Currency::XAF));
        b.id = OptionId::new("opt-b");
        a.declare_incompatibility(b.id.clone());

        CatalogSnapshot::new(vec![sedan], vec![a, b])
    }

    fn submission(options: &[&str], quantity: i64) -> CartSubmission {
        CartSubmission {
            vehicle_id: VehicleId::new("veh-sedan"),
            options: options.iter().map(|o| OptionId::new(*o)).collect(),
            quantity,
        }
    }

    #[test]
    fn test_add_submission() {
        let catalog = catalog();
        let mut cart = Cart::new("session-123");

        cart.add_submission(&submission(&["opt-a"], 1), &catalog).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].unit_price.amount_minor, 10_200_000);
        assert_eq!(cart.lines[0].total_price.amount_minor, 10_200_000);
    }

    #[test]
    fn test_identical_configurations_merge() {
        let catalog = catalog();
        let mut cart = Cart::new("session-123");

        cart.add_submission(&submission(&["opt-a"], 1), &catalog).unwrap();
        cart.add_submission(&submission(&["opt-a"], 2), &catalog).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.vehicle_count(), 3);
    }

    #[test]
    fn test_different_configurations_get_own_lines() {
        let catalog = catalog();
        let mut cart = Cart::new("session-123");

        cart.add_submission(&submission(&["opt-a"], 1), &catalog).unwrap();
        cart.add_submission(&submission(&[], 1), &catalog).unwrap();

        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_incompatible_submission_rejected() {
        let catalog = catalog();
        let mut cart = Cart::new("session-123");

        let err = cart
            .add_submission(&submission(&["opt-a", "opt-b"], 1), &catalog)
            .unwrap_err();
        assert!(matches!(err, StorefrontError::IncompatibleOption { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let catalog = catalog();
        let mut cart = Cart::new("session-123");

        let mut bad_vehicle = submission(&[], 1);
        bad_vehicle.vehicle_id = VehicleId::new("veh-missing");
        assert!(matches!(
            cart.add_submission(&bad_vehicle, &catalog),
            Err(StorefrontError::VehicleNotFound(_))
        ));

        assert!(matches!(
            cart.add_submission(&submission(&["opt-missing"], 1), &catalog),
            Err(StorefrontError::OptionNotFound(_))
        ));
    }

    #[test]
    fn test_update_quantity_and_remove() {
        let catalog = catalog();
        let mut cart = Cart::new("session-123");
        let line_id = cart.add_submission(&submission(&[], 1), &catalog).unwrap();

        cart.update_quantity(&line_id, 4).unwrap();
        assert_eq!(cart.vehicle_count(), 4);
        assert_eq!(cart.get_line(&line_id).unwrap().total_price.amount_minor, 40_000_000);

        // Zero removes the line
        assert!(cart.update_quantity(&line_id, 0).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_limit() {
        let catalog = catalog();
        let mut cart = Cart::new("session-123");

        let result = cart.add_submission(&submission(&[], MAX_QUANTITY_PER_LINE + 1), &catalog);
        assert!(matches!(
            result,
            Err(StorefrontError::QuantityExceedsLimit(_, _))
        ));
    }

    #[test]
    fn test_pricing() {
        let catalog = catalog();
        let mut cart = Cart::new("session-123");
        cart.add_submission(&submission(&["opt-a"], 2), &catalog).unwrap();
        cart.add_submission(&submission(&[], 1), &catalog).unwrap();

        let pricing = cart.pricing().unwrap();
        assert_eq!(pricing.lines.len(), 2);
        assert_eq!(pricing.total.amount_minor, 2 * 10_200_000 + 10_000_000);
    }
}
