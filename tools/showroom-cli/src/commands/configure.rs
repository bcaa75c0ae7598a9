//! Interactive configurator session.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use showroom_client::CartApi;
use showroom_commerce::configurator::Configurator;
use showroom_commerce::{StorefrontError, VehicleId};

use super::ConfigureArgs;
use crate::context::Context;

/// Run the configure command.
pub async fn run(args: ConfigureArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The configure command is interactive; use `showroom quote --json` instead");
    }

    let backend = ctx.backend()?;
    let snapshot = ctx.load_catalog()?;
    let mut session = Configurator::new(snapshot);

    // Vehicle selection
    let vehicle_id = match args.vehicle {
        Some(id) => VehicleId::new(id),
        None => prompt_vehicle(&session)?,
    };
    session.select_vehicle(&vehicle_id)?;
    ctx.output
        .success(&format!("Selected: {}", vehicle_name(&session, &vehicle_id)));

    // Option toggling loop
    loop {
        let total = session.current_total();
        let option_ids: Vec<_> = session
            .catalog()
            .options()
            .iter()
            .map(|o| o.id.clone())
            .collect();

        let mut labels: Vec<String> = option_ids
            .iter()
            .map(|id| {
                let option = session.catalog().option(id).expect("listed option");
                let marker = if session.selection().contains_option(id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                format!("{} {} ({})", marker, option.name, option.price.display())
            })
            .collect();
        labels.push("Set quantity".to_string());
        labels.push(format!("Add to cart ({})", total.display()));
        labels.push("Quit".to_string());

        let choice = Select::new()
            .with_prompt(format!("Current total: {}", total.display()))
            .items(&labels)
            .default(0)
            .interact()?;

        if choice < option_ids.len() {
            match session.toggle_option(&option_ids[choice]) {
                Ok(_) => {}
                Err(e @ StorefrontError::IncompatibleOption { .. }) => {
                    // Rejected toggles leave the selection usable
                    ctx.output.warn(&e.to_string());
                }
                Err(e) => return Err(e.into()),
            }
        } else if choice == option_ids.len() {
            let quantity: i64 = Input::new()
                .with_prompt("Quantity")
                .default(session.selection().quantity)
                .interact_text()?;
            session.set_quantity(quantity);
        } else if choice == option_ids.len() + 1 {
            break;
        } else {
            ctx.output.info("Session discarded");
            return Ok(());
        }
    }

    // Commit and submit; the session is reset only after the call returns
    let submission = session.commit()?;
    let receipt = backend.submit(&submission).await?;
    session.reset();

    ctx.output.success(&format!("Added to cart {}", receipt.cart_id));
    ctx.output.kv("Payload", &serde_json::to_string(&submission)?);

    Ok(())
}

fn prompt_vehicle(session: &Configurator) -> Result<VehicleId> {
    let vehicles = session.catalog().vehicles();
    if vehicles.is_empty() {
        bail!("The catalog has no vehicles");
    }

    let labels: Vec<String> = vehicles
        .iter()
        .map(|v| format!("{} ({})", v.name, v.price.display()))
        .collect();

    let choice = Select::new()
        .with_prompt("Choose a vehicle")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(vehicles[choice].id.clone())
}

fn vehicle_name(session: &Configurator, id: &VehicleId) -> String {
    session
        .catalog()
        .vehicle(id)
        .map(|v| v.name.clone())
        .unwrap_or_else(|| id.to_string())
}
