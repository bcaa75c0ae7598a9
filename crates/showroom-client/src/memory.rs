//! In-memory backend fixture.

use crate::api::{CartApi, CatalogApi, SubmissionReceipt};
use crate::error::ApiError;
use async_trait::async_trait;
use showroom_commerce::catalog::{CatalogSnapshot, Vehicle, VehicleOption};
use showroom_commerce::configurator::CartSubmission;
use showroom_commerce::CartId;
use std::sync::Mutex;

/// A backend that serves a fixed catalog and records submissions.
///
/// Used by tests and the demo CLI in place of the remote REST backend.
pub struct InMemoryBackend {
    vehicles: Vec<Vehicle>,
    options: Vec<VehicleOption>,
    reject_submissions: bool,
    submissions: Mutex<Vec<CartSubmission>>,
}

impl InMemoryBackend {
    /// Create a backend serving the given collections.
    pub fn new(vehicles: Vec<Vehicle>, options: Vec<VehicleOption>) -> Self {
        Self {
            vehicles,
            options,
            reject_submissions: false,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Create a backend serving an already-assembled snapshot.
    pub fn from_snapshot(snapshot: &CatalogSnapshot) -> Self {
        Self::new(
            snapshot.vehicles().into_iter().cloned().collect(),
            snapshot.options().into_iter().cloned().collect(),
        )
    }

    /// Make every submission fail, for exercising rejection paths.
    pub fn rejecting(mut self) -> Self {
        self.reject_submissions = true;
        self
    }

    /// Submissions accepted so far.
    pub fn submissions(&self) -> Vec<CartSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogApi for InMemoryBackend {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        Ok(self.vehicles.clone())
    }

    async fn fetch_options(&self) -> Result<Vec<VehicleOption>, ApiError> {
        Ok(self.options.clone())
    }
}

#[async_trait]
impl CartApi for InMemoryBackend {
    async fn submit(&self, submission: &CartSubmission) -> Result<SubmissionReceipt, ApiError> {
        let vehicle_known = self.vehicles.iter().any(|v| v.id == submission.vehicle_id);
        if self.reject_submissions || !vehicle_known {
            tracing::warn!(vehicle = %submission.vehicle_id, "submission rejected");
            return Err(ApiError::SelectionRejected);
        }

        tracing::info!(
            vehicle = %submission.vehicle_id,
            options = submission.options.len(),
            quantity = submission.quantity,
            "submission accepted"
        );
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(SubmissionReceipt {
            cart_id: CartId::generate().into_inner(),
        })
    }
}
