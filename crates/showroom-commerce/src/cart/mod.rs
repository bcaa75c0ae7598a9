//! Shopping cart module.
//!
//! Contains types for the cart, its configured-vehicle lines, and
//! pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};
pub use pricing::{CartLinePricing, CartPricing};
