//! Catalog filter types.

use crate::catalog::{FuelType, Vehicle, VehicleKind};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A filter over the vehicle catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VehicleFilter {
    /// Filter by body kind.
    Kind(VehicleKind),
    /// Filter by fuel type.
    Fuel(FuelType),
    /// Filter by price range (inclusive).
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Filter by model year range (inclusive).
    YearRange { min: Option<i32>, max: Option<i32> },
    /// Only vehicles below a mileage ceiling.
    MaxMileage(i64),
    /// Only vehicles with stock on hand.
    InStock,
    /// Substring match on name and brand.
    Text(String),
}

impl VehicleFilter {
    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        VehicleFilter::PriceRange { min, max }
    }

    /// Create a year range filter.
    pub fn year_range(min: Option<i32>, max: Option<i32>) -> Self {
        VehicleFilter::YearRange { min, max }
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        VehicleFilter::Text(query.into())
    }

    /// Check whether a vehicle passes this filter.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self {
            VehicleFilter::Kind(kind) => vehicle.kind == *kind,
            VehicleFilter::Fuel(fuel) => vehicle.fuel == *fuel,
            VehicleFilter::PriceRange { min, max } => {
                if let Some(min) = min {
                    if vehicle.price.amount_minor < min.amount_minor {
                        return false;
                    }
                }
                if let Some(max) = max {
                    if vehicle.price.amount_minor > max.amount_minor {
                        return false;
                    }
                }
                true
            }
            VehicleFilter::YearRange { min, max } => match vehicle.year {
                Some(year) => {
                    min.map(|m| year >= m).unwrap_or(true) && max.map(|m| year <= m).unwrap_or(true)
                }
                None => false,
            },
            VehicleFilter::MaxMileage(ceiling) => vehicle.mileage_km <= *ceiling,
            VehicleFilter::InStock => vehicle.in_stock(),
            VehicleFilter::Text(query) => {
                let needle = query.to_lowercase();
                vehicle.name.to_lowercase().contains(&needle)
                    || vehicle
                        .brand
                        .as_ref()
                        .map(|b| b.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn hilux() -> Vehicle {
        let mut v = Vehicle::new(
            "Toyota Hilux 2.4D",
            "toyota-hilux",
            Money::new(18_500_000, Currency::XAF),
        );
        v.brand = Some("Toyota".to_string());
        v.kind = VehicleKind::Pickup;
        v.fuel = FuelType::Diesel;
        v.year = Some(2023);
        v.mileage_km = 45_000;
        v.stock = 2;
        v
    }

    #[test]
    fn test_kind_and_fuel() {
        let v = hilux();
        assert!(VehicleFilter::Kind(VehicleKind::Pickup).matches(&v));
        assert!(!VehicleFilter::Kind(VehicleKind::Scooter).matches(&v));
        assert!(VehicleFilter::Fuel(FuelType::Diesel).matches(&v));
    }

    #[test]
    fn test_price_range() {
        let v = hilux();
        let in_range = VehicleFilter::price_range(
            Some(Money::new(10_000_000, Currency::XAF)),
            Some(Money::new(20_000_000, Currency::XAF)),
        );
        assert!(in_range.matches(&v));

        let too_low = VehicleFilter::price_range(None, Some(Money::new(5_000_000, Currency::XAF)));
        assert!(!too_low.matches(&v));
    }

    #[test]
    fn test_year_range_requires_known_year() {
        let mut v = hilux();
        assert!(VehicleFilter::year_range(Some(2020), None).matches(&v));

        v.year = None;
        assert!(!VehicleFilter::year_range(Some(2020), None).matches(&v));
    }

    #[test]
    fn test_text_matches_name_and_brand() {
        let v = hilux();
        assert!(VehicleFilter::text("hilux").matches(&v));
        assert!(VehicleFilter::text("TOYOTA").matches(&v));
        assert!(!VehicleFilter::text("corolla").matches(&v));
    }

    #[test]
    fn test_mileage_and_stock() {
        let mut v = hilux();
        assert!(VehicleFilter::MaxMileage(50_000).matches(&v));
        assert!(!VehicleFilter::MaxMileage(10_000).matches(&v));

        assert!(VehicleFilter::InStock.matches(&v));
        v.stock = 0;
        assert!(!VehicleFilter::InStock.matches(&v));
    }
}
