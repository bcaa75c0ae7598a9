//! Vehicle types.

use crate::ids::VehicleId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Vehicle visibility status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VehicleStatus {
    /// Listing is being prepared, not visible to customers.
    Draft,
    /// Listing is active and visible.
    #[default]
    Active,
    /// Listing is archived, not visible but data preserved.
    Archived,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Draft => "draft",
            VehicleStatus::Active => "active",
            VehicleStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(VehicleStatus::Draft),
            "active" => Some(VehicleStatus::Active),
            "archived" => Some(VehicleStatus::Archived),
            _ => None,
        }
    }
}

/// Fuel type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Hybrid => "hybrid",
            FuelType::Electric => "electric",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "petrol" | "gasoline" | "essence" => Some(FuelType::Petrol),
            "diesel" => Some(FuelType::Diesel),
            "hybrid" => Some(FuelType::Hybrid),
            "electric" => Some(FuelType::Electric),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
        }
    }
}

/// Body/kind classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VehicleKind {
    #[default]
    Car,
    Suv,
    Pickup,
    Van,
    Motorcycle,
    Scooter,
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Suv => "suv",
            VehicleKind::Pickup => "pickup",
            VehicleKind::Van => "van",
            VehicleKind::Motorcycle => "motorcycle",
            VehicleKind::Scooter => "scooter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "car" => Some(VehicleKind::Car),
            "suv" => Some(VehicleKind::Suv),
            "pickup" => Some(VehicleKind::Pickup),
            "van" => Some(VehicleKind::Van),
            "motorcycle" => Some(VehicleKind::Motorcycle),
            "scooter" => Some(VehicleKind::Scooter),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Suv => "SUV",
            VehicleKind::Pickup => "Pickup",
            VehicleKind::Van => "Van",
            VehicleKind::Motorcycle => "Motorcycle",
            VehicleKind::Scooter => "Scooter",
        }
    }
}

/// A vehicle listing in the catalog.
///
/// Listings are sourced from the backend catalog and treated as
/// immutable by the configurator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    /// Unique vehicle identifier.
    pub id: VehicleId,
    /// Display name (e.g., "Toyota Hilux 2.4D").
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Manufacturer/brand.
    pub brand: Option<String>,
    /// Model year.
    pub year: Option<i32>,
    /// Odometer reading in kilometers (0 for new vehicles).
    pub mileage_km: i64,
    /// Fuel type.
    pub fuel: FuelType,
    /// Body kind.
    pub kind: VehicleKind,
    /// Unit price (non-negative).
    pub price: Money,
    /// Main image URL.
    pub image_url: Option<String>,
    /// Units in stock.
    pub stock: i64,
    /// Listing status.
    pub status: VehicleStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Vehicle {
    /// Create a new active listing.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, price: Money) -> Self {
        let now = current_timestamp();
        Self {
            id: VehicleId::generate(),
            name: name.into(),
            slug: slug.into(),
            brand: None,
            year: None,
            mileage_km: 0,
            fuel: FuelType::default(),
            kind: VehicleKind::default(),
            price,
            image_url: None,
            stock: 0,
            status: VehicleStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the listing is visible to customers.
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Active
    }

    /// Check if at least one unit is in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if this is a two-wheeler.
    pub fn is_two_wheeler(&self) -> bool {
        matches!(self.kind, VehicleKind::Motorcycle | VehicleKind::Scooter)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
