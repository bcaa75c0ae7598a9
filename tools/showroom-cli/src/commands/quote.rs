//! Non-interactive configuration pricing.

use anyhow::Result;
use showroom_commerce::configurator::Configurator;
use showroom_commerce::{OptionId, VehicleId};

use super::QuoteArgs;
use crate::context::Context;

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let snapshot = ctx.load_catalog()?;
    let mut session = Configurator::new(snapshot);

    session.select_vehicle(&VehicleId::new(args.vehicle.as_str()))?;
    for option in &args.options {
        session.toggle_option(&OptionId::new(option.as_str()))?;
    }
    session.set_quantity(args.quantity);

    let pricing = session.pricing()?;

    if ctx.output.is_json() {
        ctx.output.json(&pricing);
        return Ok(());
    }

    let vehicle_name = session
        .catalog()
        .vehicle(&VehicleId::new(args.vehicle.as_str()))
        .map(|v| v.name.clone())
        .unwrap_or_else(|| args.vehicle.clone());

    ctx.output.header(&format!("Quote: {}", vehicle_name));
    ctx.output.kv("Vehicle", &pricing.vehicle_price.display());
    ctx.output.kv("Options", &pricing.options_total.display());
    ctx.output.kv("Unit price", &pricing.unit_price.display());
    ctx.output.kv("Quantity", &pricing.quantity.to_string());
    ctx.output.success(&format!("Total: {}", pricing.grand_total.display()));

    Ok(())
}
