//! Address types.

use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    /// Address ID (None for unsaved addresses).
    pub id: Option<AddressId>,
    /// Street or quarter.
    pub line1: String,
    /// Additional detail (landmark, PO box).
    pub line2: Option<String>,
    /// City.
    pub city: String,
    /// Region/province name.
    pub region: Option<String>,
    /// Country name.
    pub country: String,
    /// Country code (e.g., "CM").
    pub country_code: String,
    /// Phone number.
    pub phone: Option<String>,
}

impl Address {
    /// Create a new address.
    pub fn new(
        line1: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            line1: line1.into(),
            line2: None,
            city: city.into(),
            region: None,
            country: country.into(),
            country_code: country_code.into(),
            phone: None,
        }
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.line1.clone()];
        if let Some(ref line2) = self.line2 {
            parts.push(line2.clone());
        }
        parts.push(self.city.clone());
        if let Some(ref region) = self.region {
            parts.push(region.clone());
        }
        parts.push(self.country_code.clone());
        parts.join(", ")
    }

    /// Check if the address has the fields delivery requires.
    pub fn is_complete(&self) -> bool {
        !self.line1.is_empty() && !self.city.is_empty() && !self.country_code.is_empty()
    }
}
