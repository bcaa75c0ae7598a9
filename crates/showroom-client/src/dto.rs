//! Wire records for the backend catalog.
//!
//! The backend serves string identifiers, minor-unit integer prices,
//! and camelCase field names. Conversion into domain types is fallible;
//! unknown enum values and currencies are rejected rather than guessed.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use showroom_commerce::catalog::{
    CatalogSnapshot, FuelType, Vehicle, VehicleKind, VehicleOption, VehicleStatus,
};
use showroom_commerce::{Currency, Money, OptionId, VehicleId};

/// A vehicle as served by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// Price in minor currency units.
    pub price: i64,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub mileage_km: i64,
    #[serde(default)]
    pub fuel: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub status: Option<String>,
}

impl VehicleRecord {
    /// Convert into a domain vehicle.
    pub fn into_vehicle(self, currency: Currency) -> Result<Vehicle, ApiError> {
        let fuel = match self.fuel.as_deref() {
            Some(s) => FuelType::from_str(s)
                .ok_or_else(|| ApiError::InvalidPayload(format!("unknown fuel type: {s}")))?,
            None => FuelType::default(),
        };
        let kind = match self.kind.as_deref() {
            Some(s) => VehicleKind::from_str(s)
                .ok_or_else(|| ApiError::InvalidPayload(format!("unknown vehicle kind: {s}")))?,
            None => VehicleKind::default(),
        };
        let status = match self.status.as_deref() {
            Some(s) => VehicleStatus::from_str(s)
                .ok_or_else(|| ApiError::InvalidPayload(format!("unknown vehicle status: {s}")))?,
            None => VehicleStatus::Active,
        };
        if self.price < 0 {
            return Err(ApiError::InvalidPayload(format!(
                "negative price for vehicle {}",
                self.id
            )));
        }

        let slug = self.slug.unwrap_or_else(|| self.id.clone());
        let mut vehicle = Vehicle::new(self.name, slug, Money::new(self.price, currency));
        vehicle.id = VehicleId::new(self.id);
        vehicle.brand = self.brand;
        vehicle.year = self.year;
        vehicle.mileage_km = self.mileage_km;
        vehicle.fuel = fuel;
        vehicle.kind = kind;
        vehicle.image_url = self.image_url;
        vehicle.stock = self.stock;
        vehicle.status = status;
        Ok(vehicle)
    }
}

/// An add-on option as served by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price: i64,
    /// Declared incompatibilities; may be one-sided.
    #[serde(default)]
    pub incompatible_with: Vec<String>,
}

impl OptionRecord {
    /// Convert into a domain option.
    pub fn into_option(self, currency: Currency) -> Result<VehicleOption, ApiError> {
        if self.price < 0 {
            return Err(ApiError::InvalidPayload(format!(
                "negative price for option {}",
                self.id
            )));
        }

        let mut option = VehicleOption::new(self.name, Money::new(self.price, currency));
        option.id = OptionId::new(self.id);
        option.description = self.description;
        for other in self.incompatible_with {
            option.declare_incompatibility(OptionId::new(other));
        }
        Ok(option)
    }
}

/// The full catalog payload, as fetched once per configurator session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPayload {
    /// Currency code for every price in the payload.
    #[serde(default = "default_currency_code")]
    pub currency: String,
    #[serde(default)]
    pub vehicles: Vec<VehicleRecord>,
    #[serde(default)]
    pub options: Vec<OptionRecord>,
}

fn default_currency_code() -> String {
    "XAF".to_string()
}

impl CatalogPayload {
    /// Convert into the domain snapshot the configurator works against.
    pub fn into_snapshot(self) -> Result<CatalogSnapshot, ApiError> {
        let currency = Currency::from_code(&self.currency)
            .ok_or_else(|| ApiError::InvalidPayload(format!("unknown currency: {}", self.currency)))?;

        let vehicles = self
            .vehicles
            .into_iter()
            .map(|r| r.into_vehicle(currency))
            .collect::<Result<Vec<_>, _>>()?;
        let options = self
            .options
            .into_iter()
            .map(|r| r.into_option(currency))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CatalogSnapshot::new(vehicles, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_payload_roundtrip() {
        let json = r#"{
            "currency": "XAF",
            "vehicles": [
                {"id": "veh-1", "name": "Corolla", "price": 10000000, "fuel": "petrol", "kind": "car", "stock": 2}
            ],
            "options": [
                {"id": "opt-a", "name": "Leather seats", "price": 500000, "incompatibleWith": ["opt-b"]},
                {"id": "opt-b", "name": "Seat covers", "price": 150000}
            ]
        }"#;

        let payload: CatalogPayload = serde_json::from_str(json).unwrap();
        let snapshot = payload.into_snapshot().unwrap();

        assert_eq!(snapshot.vehicle_count(), 1);
        assert_eq!(snapshot.option_count(), 2);
        assert!(snapshot
            .compatibility()
            .are_incompatible(&OptionId::new("opt-b"), &OptionId::new("opt-a")));
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let payload = CatalogPayload {
            currency: "DOUBLOONS".to_string(),
            vehicles: vec![],
            options: vec![],
        };
        assert!(matches!(
            payload.into_snapshot(),
            Err(ApiError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_unknown_fuel_rejected() {
        let record = VehicleRecord {
            id: "veh-1".to_string(),
            name: "Corolla".to_string(),
            slug: None,
            brand: None,
            price: 1,
            year: None,
            mileage_km: 0,
            fuel: Some("coal".to_string()),
            kind: None,
            image_url: None,
            stock: 0,
            status: None,
        };
        assert!(record.into_vehicle(Currency::XAF).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let record = OptionRecord {
            id: "opt-a".to_string(),
            name: "Alarm".to_string(),
            description: None,
            price: -5,
            incompatible_with: vec![],
        };
        assert!(record.into_option(Currency::XAF).is_err());
    }
}
