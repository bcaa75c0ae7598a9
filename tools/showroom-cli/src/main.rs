//! Showroom CLI - drive the dealership storefront domain from a terminal.
//!
//! Commands:
//! - `showroom catalog` - List vehicles and options from the catalog
//! - `showroom quote` - Price a configuration non-interactively
//! - `showroom configure` - Interactive configurator session
//! - `showroom checkout` - Walk a configuration through order, payment, invoice

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, CheckoutArgs, ConfigureArgs, QuoteArgs};

/// Showroom CLI - browse, configure, and check out dealership vehicles
#[derive(Parser)]
#[command(name = "showroom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog fixture path (overrides config)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List vehicles and options from the catalog
    Catalog(CatalogArgs),

    /// Price a configuration non-interactively
    Quote(QuoteArgs),

    /// Run an interactive configurator session
    Configure(ConfigureArgs),

    /// Walk a configuration through order, payment, and invoice
    Checkout(CheckoutArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "showroom=debug,showroom_client=debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.catalog, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Quote(args) => commands::quote::run(args, &ctx).await,
        Commands::Configure(args) => commands::configure::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
