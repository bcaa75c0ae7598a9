//! Payment records.

use crate::ids::{OrderId, PaymentId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    MobileMoney,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::MobileMoney => "mobile_money",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(PaymentMethod::Cash),
            "card" => Some(PaymentMethod::Card),
            "mobile_money" | "momo" => Some(PaymentMethod::MobileMoney),
            "bank_transfer" | "transfer" => Some(PaymentMethod::BankTransfer),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::MobileMoney => "Mobile Money",
            PaymentMethod::BankTransfer => "Bank transfer",
        }
    }
}

/// A recorded payment against an order.
///
/// Models the outcome reported by the payment collaborator; processing
/// itself happens outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: PaymentId,
    /// Order the payment applies to.
    pub order_id: OrderId,
    /// Amount paid.
    pub amount: Money,
    /// Payment method.
    pub method: PaymentMethod,
    /// Processor reference (transaction id, receipt number).
    pub reference: Option<String>,
    /// Unix timestamp of the payment.
    pub created_at: i64,
}

impl Payment {
    /// Record a new payment.
    pub fn new(order_id: OrderId, amount: Money, method: PaymentMethod) -> Self {
        Self {
            id: PaymentId::generate(),
            order_id,
            amount,
            method,
            reference: None,
            created_at: current_timestamp(),
        }
    }

    /// Attach a processor reference.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
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
    use crate::money::Currency;

    #[test]
    fn test_payment_creation() {
        let p = Payment::new(
            OrderId::new("ord-1"),
            Money::new(500_000, Currency::XAF),
            PaymentMethod::MobileMoney,
        )
        .with_reference("MOMO-778812");

        assert_eq!(p.method.as_str(), "mobile_money");
        assert_eq!(p.reference.as_deref(), Some("MOMO-778812"));
    }

    #[test]
    fn test_method_aliases() {
        assert_eq!(PaymentMethod::from_str("momo"), Some(PaymentMethod::MobileMoney));
        assert_eq!(PaymentMethod::from_str("transfer"), Some(PaymentMethod::BankTransfer));
        assert_eq!(PaymentMethod::from_str("cheque"), None);
    }
}
