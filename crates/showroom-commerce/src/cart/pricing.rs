//! Cart pricing breakdown.

use crate::ids::CartLineId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Per-line breakdown.
    pub lines: Vec<CartLinePricing>,
    /// Cart total.
    pub total: Money,
}

impl CartPricing {
    /// Check if any line carries a nonzero amount.
    pub fn is_free(&self) -> bool {
        self.total.is_zero()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLinePricing {
    /// Cart line ID.
    pub line_id: CartLineId,
    /// Price of one configured vehicle.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line total (unit_price x quantity).
    pub total: Money,
}
