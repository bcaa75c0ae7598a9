//! Order types.

use crate::accounts::Address;
use crate::cart::Cart;
use crate::checkout::Payment;
use crate::error::StorefrontError;
use crate::ids::{CustomerId, OptionId, OrderId, OrderLineId, SubsidiaryId, VehicleId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed by the dealership.
    Confirmed,
    /// Vehicles being prepared for handover.
    InPreparation,
    /// Vehicles delivered to the customer.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InPreparation => "in_preparation",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::InPreparation => "In preparation",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::InPreparation
        )
    }
}

/// Payment rollup for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentState {
    /// No payment recorded.
    #[default]
    Unpaid,
    /// Partial payment recorded.
    PartiallyPaid,
    /// Paid in full.
    Paid,
    /// Payment returned to the customer.
    Refunded,
}

impl PaymentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentState::Unpaid => "unpaid",
            PaymentState::PartiallyPaid => "partially_paid",
            PaymentState::Paid => "paid",
            PaymentState::Refunded => "refunded",
        }
    }
}

/// One configured vehicle line frozen from the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Unique line identifier.
    pub id: OrderLineId,
    /// Configured vehicle.
    pub vehicle_id: VehicleId,
    /// Vehicle name at order time.
    pub vehicle_name: String,
    /// Chosen options at order time.
    pub option_ids: Vec<OptionId>,
    /// Quantity.
    pub quantity: i64,
    /// Price of one configured vehicle at order time.
    pub unit_price: Money,
    /// Line total.
    pub total_price: Money,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Customer (None for guest orders).
    pub customer_id: Option<CustomerId>,
    /// Subsidiary handling the order.
    pub subsidiary_id: Option<SubsidiaryId>,
    /// Delivery address, when delivery was requested.
    pub delivery_address: Option<Address>,
    /// Lines frozen from the cart.
    pub lines: Vec<OrderLine>,
    /// Order total.
    pub grand_total: Money,
    /// Amount paid so far.
    pub amount_paid: Money,
    /// Order currency.
    pub currency: Currency,
    /// Order status.
    pub status: OrderStatus,
    /// Payment rollup.
    pub payment_state: PaymentState,
    /// Customer note.
    pub note: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Unix timestamp when cancelled (if applicable).
    pub cancelled_at: Option<i64>,
}

impl Order {
    /// Create an order from a cart, freezing its lines and prices.
    pub fn from_cart(cart: &Cart) -> Result<Self, StorefrontError> {
        if cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        let pricing = cart.pricing()?;
        let lines = cart
            .lines
            .iter()
            .map(|l| OrderLine {
                id: OrderLineId::generate(),
                vehicle_id: l.vehicle_id.clone(),
                vehicle_name: l.vehicle_name.clone(),
                option_ids: l.option_ids.clone(),
                quantity: l.quantity,
                unit_price: l.unit_price,
                total_price: l.total_price,
            })
            .collect();

        let now = current_timestamp();
        Ok(Self {
            id: OrderId::generate(),
            order_number: generate_order_number(),
            customer_id: cart.customer_id.clone(),
            subsidiary_id: None,
            delivery_address: None,
            lines,
            grand_total: pricing.total,
            amount_paid: Money::zero(cart.currency),
            currency: cart.currency,
            status: OrderStatus::Pending,
            payment_state: PaymentState::Unpaid,
            note: cart.note.clone(),
            created_at: now,
            updated_at: now,
            cancelled_at: None,
        })
    }

    /// Total vehicle count.
    pub fn vehicle_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Check if the order is paid in full.
    pub fn is_paid(&self) -> bool {
        self.payment_state == PaymentState::Paid
    }

    /// Outstanding balance.
    pub fn balance_due(&self) -> Money {
        self.grand_total
            .try_subtract(&self.amount_paid)
            .unwrap_or_else(|| Money::zero(self.currency))
    }

    /// Confirm a pending order.
    pub fn confirm(&mut self) -> Result<(), StorefrontError> {
        self.transition(OrderStatus::Pending, OrderStatus::Confirmed)
    }

    /// Move a confirmed order into preparation.
    pub fn start_preparation(&mut self) -> Result<(), StorefrontError> {
        self.transition(OrderStatus::Confirmed, OrderStatus::InPreparation)
    }

    /// Mark a prepared order as delivered.
    pub fn mark_delivered(&mut self) -> Result<(), StorefrontError> {
        self.transition(OrderStatus::InPreparation, OrderStatus::Delivered)
    }

    /// Cancel the order.
    pub fn cancel(&mut self) -> Result<(), StorefrontError> {
        if !self.status.can_cancel() {
            return Err(StorefrontError::InvalidOrderTransition {
                from: self.status.as_str().to_string(),
                to: OrderStatus::Cancelled.as_str().to_string(),
            });
        }
        self.status = OrderStatus::Cancelled;
        self.cancelled_at = Some(current_timestamp());
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Record a payment against this order and advance the rollup.
    ///
    /// The payment must reference this order and carry the order's
    /// currency. Cancelled orders accept no payments.
    pub fn record_payment(&mut self, payment: &Payment) -> Result<PaymentState, StorefrontError> {
        if payment.order_id != self.id {
            return Err(StorefrontError::PaymentMismatch {
                payment: payment.id.to_string(),
                order: self.id.to_string(),
            });
        }
        if self.status == OrderStatus::Cancelled {
            return Err(StorefrontError::InvalidOrderTransition {
                from: self.status.as_str().to_string(),
                to: "paid".to_string(),
            });
        }

        if payment.amount.currency != self.currency {
            return Err(StorefrontError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: payment.amount.currency.code().to_string(),
            });
        }
        self.amount_paid = self
            .amount_paid
            .try_add(&payment.amount)
            .ok_or(StorefrontError::Overflow)?;

        self.payment_state = if self.amount_paid.amount_minor >= self.grand_total.amount_minor {
            PaymentState::Paid
        } else {
            PaymentState::PartiallyPaid
        };
        self.updated_at = current_timestamp();
        Ok(self.payment_state)
    }

    /// Mark a paid order as refunded.
    pub fn mark_refunded(&mut self) -> Result<(), StorefrontError> {
        if self.payment_state != PaymentState::Paid {
            return Err(StorefrontError::InvalidOrderTransition {
                from: self.payment_state.as_str().to_string(),
                to: PaymentState::Refunded.as_str().to_string(),
            });
        }
        self.payment_state = PaymentState::Refunded;
        self.updated_at = current_timestamp();
        Ok(())
    }

    fn transition(&mut self, from: OrderStatus, to: OrderStatus) -> Result<(), StorefrontError> {
        if self.status != from {
            return Err(StorefrontError::InvalidOrderTransition {
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        self.status = to;
        self.updated_at = current_timestamp();
        Ok(())
    }
}

/// Generate a human-readable order number (e.g., "ORD-20260807-0042").
pub fn generate_order_number() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);

    let date = chrono::Utc::now().format("%Y%m%d");
    let seq = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("ORD-{}-{:04}", date, seq)
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
    use crate::catalog::{CatalogSnapshot, Vehicle};
    use crate::checkout::PaymentMethod;
    use crate::configurator::CartSubmission;

    fn order() -> Order {
        let mut sedan = Vehicle::new("Corolla", "corolla", Money::new(10_000_000, Currency::XAF));
        sedan.id = VehicleId::new("veh-sedan");
        let catalog = CatalogSnapshot::new(vec![sedan], vec![]);

        let mut cart = Cart::new("session-1");
        cart.add_submission(
            &CartSubmission {
                vehicle_id: VehicleId::new("veh-sedan"),
                options: vec![],
                quantity: 2,
            },
            &catalog,
        )
        .unwrap();

        Order::from_cart(&cart).unwrap()
    }

    #[test]
    fn test_order_from_cart() {
        let order = order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.grand_total.amount_minor, 20_000_000);
        assert_eq!(order.vehicle_count(), 2);
        assert!(order.order_number.starts_with("ORD-"));
    }

    #[test]
    fn test_empty_cart_rejected() {
        let cart = Cart::new("session-1");
        assert!(matches!(
            Order::from_cart(&cart),
            Err(StorefrontError::EmptyCart)
        ));
    }

    #[test]
    fn test_status_progression() {
        let mut order = order();
        order.confirm().unwrap();
        order.start_preparation().unwrap();
        order.mark_delivered().unwrap();
        assert!(order.status.is_terminal());

        // Delivered orders cannot be cancelled
        assert!(order.cancel().is_err());
    }

    #[test]
    fn test_skipping_steps_rejected() {
        let mut order = order();
        assert!(matches!(
            order.mark_delivered(),
            Err(StorefrontError::InvalidOrderTransition { .. })
        ));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_payment_rollup() {
        let mut order = order();
        order.confirm().unwrap();

        let half = Payment::new(
            order.id.clone(),
            Money::new(10_000_000, Currency::XAF),
            PaymentMethod::MobileMoney,
        );
        assert_eq!(
            order.record_payment(&half).unwrap(),
            PaymentState::PartiallyPaid
        );
        assert_eq!(order.balance_due().amount_minor, 10_000_000);

        let rest = Payment::new(
            order.id.clone(),
            Money::new(10_000_000, Currency::XAF),
            PaymentMethod::BankTransfer,
        );
        assert_eq!(order.record_payment(&rest).unwrap(), PaymentState::Paid);
        assert!(order.is_paid());
        assert!(order.balance_due().is_zero());
    }

    #[test]
    fn test_payment_for_other_order_rejected() {
        let mut order = order();
        let stray = Payment::new(
            OrderId::new("ord-other"),
            Money::new(1, Currency::XAF),
            PaymentMethod::Cash,
        );
        assert!(matches!(
            order.record_payment(&stray),
            Err(StorefrontError::PaymentMismatch { .. })
        ));
    }

    #[test]
    fn test_cancelled_order_accepts_no_payment() {
        let mut order = order();
        order.cancel().unwrap();

        let payment = Payment::new(
            order.id.clone(),
            Money::new(1, Currency::XAF),
            PaymentMethod::Cash,
        );
        assert!(order.record_payment(&payment).is_err());
    }

    #[test]
    fn test_refund_requires_paid() {
        let mut order = order();
        assert!(order.mark_refunded().is_err());

        let full = Payment::new(order.id.clone(), order.grand_total, PaymentMethod::Card);
        order.record_payment(&full).unwrap();
        order.mark_refunded().unwrap();
        assert_eq!(order.payment_state, PaymentState::Refunded);
    }
}
