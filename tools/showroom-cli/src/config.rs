//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "showroom.toml";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Checkout defaults.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Load the default config file if present, otherwise defaults.
    pub fn load_default() -> Result<Self> {
        if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load(DEFAULT_CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }
}

/// Catalog fixture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog fixture file (TOML or JSON).
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "demos/catalog.toml".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Checkout defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Default payment method for the checkout walkthrough.
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

fn default_payment_method() -> String {
    "mobile_money".to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            payment_method: default_payment_method(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.catalog.path, "demos/catalog.toml");
        assert_eq!(config.checkout.payment_method, "mobile_money");
    }

    #[test]
    fn test_parse_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [catalog]
            path = "fixtures/fleet.toml"

            [checkout]
            payment_method = "cash"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.path, "fixtures/fleet.toml");
        assert_eq!(config.checkout.payment_method, "cash");
    }
}
