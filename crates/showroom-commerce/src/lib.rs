//! Vehicle dealership domain types and logic for Showroom.
//!
//! This crate provides the storefront's domain layer:
//!
//! - **Catalog**: Vehicles, add-on options, compatibility rules
//! - **Configurator**: Per-session vehicle configuration with option
//!   mutual-exclusion enforcement and live pricing
//! - **Cart**: Committed configurations awaiting checkout
//! - **Checkout**: Orders, payments, invoices
//! - **Accounts**: Customers and dealership subsidiaries
//! - **Search**: In-memory catalog browsing with filters and pagination
//!
//! # Example
//!
//! ```rust,ignore
//! use showroom_commerce::prelude::*;
//!
//! let catalog = CatalogSnapshot::new(vehicles, options);
//! let mut session = Configurator::new(catalog);
//!
//! session.select_vehicle(&VehicleId::new("veh-hilux"))?;
//! session.toggle_option(&OptionId::new("opt-tow-hitch"))?;
//! session.set_quantity(2);
//!
//! println!("Total: {}", session.current_total().display());
//! let submission = session.commit()?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod accounts;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod configurator;
pub mod search;

pub use error::StorefrontError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogSnapshot, CompatibilitySet, FuelType, Vehicle, VehicleKind, VehicleOption,
        VehicleStatus,
    };

    // Configurator
    pub use crate::configurator::{
        CartSubmission, Configurator, OptionToggle, Selection, SelectionPricing,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartLinePricing, CartPricing, MAX_QUANTITY_PER_LINE};

    // Checkout
    pub use crate::checkout::{
        Invoice, InvoiceStatus, Order, OrderLine, OrderStatus, Payment, PaymentMethod,
        PaymentState,
    };

    // Accounts
    pub use crate::accounts::{Address, Customer, Subsidiary};

    // Search
    pub use crate::search::{CatalogQuery, Pagination, SearchResults, SortOption, VehicleFilter};
}
