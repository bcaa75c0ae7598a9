//! Catalog browsing module.
//!
//! Filters, sorting, and pagination over a fetched vehicle catalog.
//! The backend returns the catalog whole, so queries run in memory.

mod filter;
mod query;
mod results;

pub use filter::VehicleFilter;
pub use query::{CatalogQuery, SortOption};
pub use results::{Pagination, SearchResults};
