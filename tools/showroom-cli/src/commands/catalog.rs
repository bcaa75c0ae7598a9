//! Catalog listing command.

use anyhow::{bail, Result};
use showroom_commerce::catalog::{FuelType, Vehicle, VehicleKind};
use showroom_commerce::search::{CatalogQuery, SortOption, VehicleFilter};
use showroom_commerce::Money;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let snapshot = ctx.load_catalog()?;

    if args.options {
        return list_options(&snapshot, ctx);
    }

    let mut query = CatalogQuery::new()
        .with_sort(SortOption::PriceAsc)
        .with_pagination(args.page, args.per_page);

    if let Some(ref kind) = args.kind {
        let kind = VehicleKind::from_str(kind)
            .ok_or_else(|| anyhow::anyhow!("Unknown vehicle kind: {}", kind))?;
        query = query.with_filter(VehicleFilter::Kind(kind));
    }
    if let Some(ref fuel) = args.fuel {
        let fuel = FuelType::from_str(fuel)
            .ok_or_else(|| anyhow::anyhow!("Unknown fuel type: {}", fuel))?;
        query = query.with_filter(VehicleFilter::Fuel(fuel));
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let currency = snapshot.currency();
        query = query.with_filter(VehicleFilter::price_range(
            args.min_price.map(|p| Money::from_decimal(p, currency)),
            args.max_price.map(|p| Money::from_decimal(p, currency)),
        ));
    }
    if args.in_stock {
        query = query.with_filter(VehicleFilter::InStock);
    }
    if let Some(ref text) = args.text {
        query = query.with_filter(VehicleFilter::text(text));
    }

    let vehicles: Vec<Vehicle> = snapshot.vehicles().into_iter().cloned().collect();
    let results = query.execute(&vehicles);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    if results.is_empty() {
        bail!("No vehicles match the given filters");
    }

    ctx.output.header("Vehicles");
    ctx.output.table_row(&["ID", "NAME", "KIND", "FUEL", "PRICE", "STOCK"], &[16, 28, 10, 8, 16, 5]);
    for v in &results.items {
        ctx.output.table_row(
            &[
                v.id.as_str(),
                &v.name,
                v.kind.as_str(),
                v.fuel.as_str(),
                &v.price.display(),
                &v.stock.to_string(),
            ],
            &[16, 28, 10, 8, 16, 5],
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {}-{} of {} vehicle(s)",
        results.pagination.start_item(),
        results.pagination.end_item(),
        results.pagination.total
    ));

    Ok(())
}

fn list_options(
    snapshot: &showroom_commerce::catalog::CatalogSnapshot,
    ctx: &Context,
) -> Result<()> {
    let options = snapshot.options();

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.header("Options");
    ctx.output.table_row(&["ID", "NAME", "PRICE", "INCOMPATIBLE WITH"], &[16, 24, 14, 30]);
    for o in options {
        let incompatible = if o.incompatible_with.is_empty() {
            "-".to_string()
        } else {
            o.incompatible_with
                .iter()
                .map(|id| id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        ctx.output.table_row(
            &[o.id.as_str(), &o.name, &o.price.display(), &incompatible],
            &[16, 24, 14, 30],
        );
    }

    Ok(())
}
