//! Catalog query builder.

use crate::catalog::Vehicle;
use crate::search::{Pagination, SearchResults, VehicleFilter};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Newest listings first.
    #[default]
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
    /// Name Z-A.
    NameDesc,
    /// Lowest mileage first.
    MileageAsc,
    /// Most recent model year first.
    YearDesc,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::MileageAsc => "Lowest mileage",
            SortOption::YearDesc => "Newest model year",
        }
    }

    fn compare(&self, a: &Vehicle, b: &Vehicle) -> Ordering {
        match self {
            SortOption::Newest => b.created_at.cmp(&a.created_at),
            SortOption::PriceAsc => a.price.amount_minor.cmp(&b.price.amount_minor),
            SortOption::PriceDesc => b.price.amount_minor.cmp(&a.price.amount_minor),
            SortOption::NameAsc => a.name.cmp(&b.name),
            SortOption::NameDesc => b.name.cmp(&a.name),
            SortOption::MileageAsc => a.mileage_km.cmp(&b.mileage_km),
            SortOption::YearDesc => b.year.unwrap_or(i32::MIN).cmp(&a.year.unwrap_or(i32::MIN)),
        }
    }
}

/// A catalog browsing query.
///
/// Runs in memory over the fetched catalog. Only active listings are
/// returned; draft and archived vehicles never reach customers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Filters to apply (all must match).
    pub filters: Vec<VehicleFilter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl CatalogQuery {
    /// Create a new query with default pagination.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort: SortOption::default(),
            page: 1,
            per_page: 24,
        }
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: VehicleFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Run the query over the fetched catalog.
    pub fn execute(&self, vehicles: &[Vehicle]) -> SearchResults<Vehicle> {
        let mut matched: Vec<Vehicle> = vehicles
            .iter()
            .filter(|v| v.is_available())
            .filter(|v| self.filters.iter().all(|f| f.matches(v)))
            .cloned()
            .collect();

        matched.sort_by(|a, b| self.sort.compare(a, b));

        let pagination = Pagination::new(self.page, self.per_page, matched.len() as i64);
        let start = ((pagination.page - 1) * pagination.per_page) as usize;
        let items: Vec<Vehicle> = matched
            .into_iter()
            .skip(start)
            .take(pagination.per_page as usize)
            .collect();

        SearchResults::new(items, pagination)
    }
}
