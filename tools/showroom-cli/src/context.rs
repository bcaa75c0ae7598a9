//! Shared command context.

use anyhow::{Context as _, Result};
use showroom_client::{CatalogPayload, InMemoryBackend};
use showroom_commerce::catalog::CatalogSnapshot;

use crate::config::CliConfig;
use crate::output::Output;

/// Everything a command needs: config, output, and the catalog source.
pub struct Context {
    pub config: CliConfig,
    pub output: Output,
    catalog_override: Option<String>,
}

impl Context {
    /// Load config and assemble the context.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<String>,
        output: Output,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::load_default()?,
        };

        Ok(Self {
            config,
            output,
            catalog_override,
        })
    }

    /// Path of the catalog fixture in effect.
    pub fn catalog_path(&self) -> &str {
        self.catalog_override
            .as_deref()
            .unwrap_or(&self.config.catalog.path)
    }

    /// Load the catalog fixture and assemble the session snapshot.
    pub fn load_catalog(&self) -> Result<CatalogSnapshot> {
        let path = self.catalog_path();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path))?;

        let payload: CatalogPayload = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON catalog: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML catalog: {}", path))?
        };

        tracing::debug!(path, "catalog fixture parsed");
        self.output
            .debug(&format!("catalog loaded from {}", path));

        payload
            .into_snapshot()
            .context("Catalog payload rejected by the domain layer")
    }

    /// Build the fixture backend serving the loaded catalog.
    pub fn backend(&self) -> Result<InMemoryBackend> {
        Ok(InMemoryBackend::from_snapshot(&self.load_catalog()?))
    }
}
