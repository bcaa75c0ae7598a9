//! Backend API traits.

use crate::error::ApiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use showroom_commerce::catalog::{CatalogSnapshot, Vehicle, VehicleOption};
use showroom_commerce::configurator::CartSubmission;

/// Read side of the backend: the catalog collections, fetched once per
/// configurator session.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the vehicle catalog.
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, ApiError>;

    /// Fetch the option catalog.
    async fn fetch_options(&self) -> Result<Vec<VehicleOption>, ApiError>;

    /// Fetch both collections and assemble the session snapshot.
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, ApiError> {
        let vehicles = self.fetch_vehicles().await?;
        let options = self.fetch_options().await?;
        tracing::debug!(
            vehicles = vehicles.len(),
            options = options.len(),
            "catalog fetched"
        );
        Ok(CatalogSnapshot::new(vehicles, options))
    }
}

/// Acknowledgement returned for an accepted cart submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Cart the configuration landed in.
    pub cart_id: String,
}

/// Write side of the backend: cart submission.
///
/// The page calling this must await completion before discarding or
/// resetting the configurator session that produced the payload.
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Submit a committed configuration.
    ///
    /// A rejected selection surfaces as `ApiError::SelectionRejected`;
    /// the backend does not say whether incompatibility or stock was
    /// the cause.
    async fn submit(&self, submission: &CartSubmission) -> Result<SubmissionReceipt, ApiError>;
}
