//! Invoice types.

use crate::checkout::{Order, OrderStatus};
use crate::error::StorefrontError;
use crate::ids::{CustomerId, InvoiceId, OrderId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InvoiceStatus {
    /// Created but not yet issued to the customer.
    #[default]
    Draft,
    /// Issued and downloadable by the customer.
    Issued,
    /// Settled in full.
    Paid,
    /// Voided.
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Issued => "issued",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Issued => "Issued",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the invoice can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
    }
}

/// An invoice for a placed order.
///
/// Rendering to a downloadable document is a page concern; this type
/// carries the amounts and the status progression.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// Unique invoice identifier.
    pub id: InvoiceId,
    /// Human-readable invoice number.
    pub invoice_number: String,
    /// Order this invoice bills.
    pub order_id: OrderId,
    /// Billed customer.
    pub customer_id: Option<CustomerId>,
    /// Invoiced amount.
    pub amount: Money,
    /// Invoice status.
    pub status: InvoiceStatus,
    /// Unix timestamp when issued.
    pub issued_at: Option<i64>,
    /// Unix timestamp when paid.
    pub paid_at: Option<i64>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Invoice {
    /// Create a draft invoice for an order.
    ///
    /// Cancelled orders cannot be invoiced.
    pub fn for_order(order: &Order) -> Result<Self, StorefrontError> {
        if order.status == OrderStatus::Cancelled {
            return Err(StorefrontError::InvalidInvoiceTransition {
                from: "cancelled order".to_string(),
                to: InvoiceStatus::Draft.as_str().to_string(),
            });
        }

        let now = current_timestamp();
        Ok(Self {
            id: InvoiceId::generate(),
            invoice_number: generate_invoice_number(),
            order_id: order.id.clone(),
            customer_id: order.customer_id.clone(),
            amount: order.grand_total,
            status: InvoiceStatus::Draft,
            issued_at: None,
            paid_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Issue a draft invoice to the customer.
    pub fn issue(&mut self) -> Result<(), StorefrontError> {
        self.transition(InvoiceStatus::Draft, InvoiceStatus::Issued)?;
        self.issued_at = Some(current_timestamp());
        Ok(())
    }

    /// Mark an issued invoice as paid.
    pub fn mark_paid(&mut self) -> Result<(), StorefrontError> {
        self.transition(InvoiceStatus::Issued, InvoiceStatus::Paid)?;
        self.paid_at = Some(current_timestamp());
        Ok(())
    }

    /// Cancel a draft or issued invoice.
    pub fn cancel(&mut self) -> Result<(), StorefrontError> {
        if self.status.is_final() {
            return Err(StorefrontError::InvalidInvoiceTransition {
                from: self.status.as_str().to_string(),
                to: InvoiceStatus::Cancelled.as_str().to_string(),
            });
        }
        self.status = InvoiceStatus::Cancelled;
        self.updated_at = current_timestamp();
        Ok(())
    }

    fn transition(
        &mut self,
        from: InvoiceStatus,
        to: InvoiceStatus,
    ) -> Result<(), StorefrontError> {
        if self.status != from {
            return Err(StorefrontError::InvalidInvoiceTransition {
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        self.status = to;
        self.updated_at = current_timestamp();
        Ok(())
    }
}

/// Generate a human-readable invoice number (e.g., "INV-20260807-0007").
pub fn generate_invoice_number() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);

    let date = chrono::Utc::now().format("%Y%m%d");
    let seq = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("INV-{}-{:04}", date, seq)
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
    use crate::cart::Cart;
    use crate::catalog::{CatalogSnapshot, Vehicle};
    use crate::configurator::CartSubmission;
    use crate::ids::VehicleId;
    use crate::money::Currency;

    fn order() -> Order {
        let mut sedan = Vehicle::new("Corolla", "corolla", Money::new(10_000_000, Currency::XAF));
        sedan.id = VehicleId::new("veh-sedan");
        let catalog = CatalogSnapshot::new(vec![sedan], vec![]);

        let mut cart = Cart::new("session-1");
        cart.add_submission(
            &CartSubmission {
                vehicle_id: VehicleId::new("veh-sedan"),
                options: vec![],
                quantity: 1,
            },
            &catalog,
        )
        .unwrap();
        Order::from_cart(&cart).unwrap()
    }

    #[test]
    fn test_invoice_lifecycle() {
        let order = order();
        let mut invoice = Invoice::for_order(&order).unwrap();
        assert_eq!(invoice.amount, order.grand_total);
        assert!(invoice.invoice_number.starts_with("INV-"));

        invoice.issue().unwrap();
        assert!(invoice.issued_at.is_some());

        invoice.mark_paid().unwrap();
        assert!(invoice.status.is_final());
    }

    #[test]
    fn test_draft_cannot_be_paid_directly() {
        let order = order();
        let mut invoice = Invoice::for_order(&order).unwrap();
        assert!(matches!(
            invoice.mark_paid(),
            Err(StorefrontError::InvalidInvoiceTransition { .. })
        ));
        assert_eq!(invoice.status, InvoiceStatus::Draft);
    }

    #[test]
    fn test_final_invoice_cannot_be_cancelled() {
        let order = order();
        let mut invoice = Invoice::for_order(&order).unwrap();
        invoice.issue().unwrap();
        invoice.mark_paid().unwrap();
        assert!(invoice.cancel().is_err());
    }

    #[test]
    fn test_cancelled_order_not_invoiceable() {
        let mut order = order();
        order.cancel().unwrap();
        assert!(Invoice::for_order(&order).is_err());
    }
}
