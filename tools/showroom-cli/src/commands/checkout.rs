//! Checkout walkthrough command.
//!
//! Drives a configuration through the full lifecycle the storefront
//! pages would: cart, order, payment, invoice.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use showroom_commerce::cart::Cart;
use showroom_commerce::checkout::{Invoice, Order, Payment, PaymentMethod};
use showroom_commerce::configurator::Configurator;
use showroom_commerce::{OptionId, VehicleId};

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let snapshot = ctx.load_catalog()?;

    let method_name = args
        .method
        .unwrap_or_else(|| ctx.config.checkout.payment_method.clone());
    let method = PaymentMethod::from_str(&method_name)
        .ok_or_else(|| anyhow!("Unknown payment method: {}", method_name))?;

    // Configure
    let mut session = Configurator::new(snapshot.clone());
    session.select_vehicle(&VehicleId::new(args.vehicle.as_str()))?;
    for option in &args.options {
        session.toggle_option(&OptionId::new(option.as_str()))?;
    }
    session.set_quantity(args.quantity);
    let submission = session.commit()?;

    ctx.output.step(1, 5, &format!(
        "Configured {} (total {})",
        args.vehicle,
        session.current_total().display()
    ));

    // Cart
    let mut cart = Cart::new("cli-session");
    cart.add_submission(&submission, &snapshot)?;
    session.reset();
    ctx.output.step(2, 5, &format!("Cart holds {} vehicle(s)", cart.vehicle_count()));

    // Order
    let mut order = Order::from_cart(&cart)?;
    if let Some(ref customer) = args.customer {
        order.note = Some(format!("Placed for {}", customer));
    }
    order.confirm()?;
    ctx.output.step(3, 5, &format!(
        "Order {} confirmed ({})",
        order.order_number,
        order.grand_total.display()
    ));

    // Payment
    let payment = Payment::new(order.id.clone(), order.grand_total, method);
    let state = order.record_payment(&payment)?;
    ctx.output.step(4, 5, &format!(
        "Paid via {} ({})",
        method.display_name(),
        state.as_str()
    ));

    // Invoice
    let mut invoice = Invoice::for_order(&order)?;
    invoice.issue()?;
    invoice.mark_paid()?;
    ctx.output.step(5, 5, &format!("Invoice {} issued and settled", invoice.invoice_number));

    if ctx.output.is_json() {
        ctx.output.json(&invoice);
        return Ok(());
    }

    ctx.output.header("Summary");
    ctx.output.kv("Order", &order.order_number);
    ctx.output.kv("Status", order.status.display_name());
    ctx.output.kv("Invoice", &invoice.invoice_number);
    ctx.output.kv("Amount", &invoice.amount.display());
    if let Some(issued_at) = invoice.issued_at {
        ctx.output.kv("Issued", &format_timestamp(issued_at));
    }
    ctx.output.success("Checkout walkthrough complete");

    Ok(())
}

fn format_timestamp(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}
