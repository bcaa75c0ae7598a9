//! Backend API contracts for Showroom.
//!
//! The storefront's pages are thin views over a remote REST backend.
//! This crate defines the boundary they share with the domain layer:
//!
//! - **DTOs**: the backend's wire records, converted fallibly into
//!   domain types
//! - **APIs**: `CatalogApi` (fetch the catalog once per session) and
//!   `CartApi` (submit a committed configuration)
//! - **Fixtures**: `InMemoryBackend` for tests and demos
//!
//! Transport is owned by the pages; nothing here opens a connection.

pub mod api;
pub mod dto;
pub mod error;
pub mod memory;

pub use api::{CartApi, CatalogApi, SubmissionReceipt};
pub use dto::{CatalogPayload, OptionRecord, VehicleRecord};
pub use error::ApiError;
pub use memory::InMemoryBackend;
