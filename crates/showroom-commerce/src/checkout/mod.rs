//! Checkout module.
//!
//! Contains types for orders, payments, and invoices. Status
//! progression is enforced through guarded transitions; invalid moves
//! are rejected and leave the record unchanged.

mod invoice;
mod order;
mod payment;

pub use invoice::{Invoice, InvoiceStatus};
pub use order::{Order, OrderLine, OrderStatus, PaymentState};
pub use payment::{Payment, PaymentMethod};
