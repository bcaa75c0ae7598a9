//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod configure;
pub mod quote;

use clap::Args;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// List add-on options instead of vehicles.
    #[arg(long)]
    pub options: bool,

    /// Filter by body kind (car, suv, pickup, van, motorcycle, scooter).
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Filter by fuel type (petrol, diesel, hybrid, electric).
    #[arg(short, long)]
    pub fuel: Option<String>,

    /// Minimum price (major units).
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price (major units).
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only vehicles with stock on hand.
    #[arg(long)]
    pub in_stock: bool,

    /// Substring match on name and brand.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Page to show (1-indexed).
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Items per page.
    #[arg(long, default_value = "24")]
    pub per_page: i64,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Vehicle identifier.
    #[arg(short, long)]
    pub vehicle: String,

    /// Option identifier (repeatable).
    #[arg(short, long = "option")]
    pub options: Vec<String>,

    /// Quantity.
    #[arg(short, long, default_value = "1")]
    pub quantity: i64,
}

/// Arguments for the configure command.
#[derive(Args)]
pub struct ConfigureArgs {
    /// Preselect a vehicle by identifier.
    #[arg(short = 'V', long)]
    pub vehicle: Option<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Vehicle identifier.
    #[arg(short, long)]
    pub vehicle: String,

    /// Option identifier (repeatable).
    #[arg(short, long = "option")]
    pub options: Vec<String>,

    /// Quantity.
    #[arg(short, long, default_value = "1")]
    pub quantity: i64,

    /// Payment method (cash, card, mobile_money, bank_transfer).
    #[arg(short, long)]
    pub method: Option<String>,

    /// Customer name shown on the order.
    #[arg(long)]
    pub customer: Option<String>,
}
