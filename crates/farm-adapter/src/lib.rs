//! # Farm Adapter Layer
//!
//! Persistence implementations of the `farm-domain` repository ports.
//!
//! - `repository::in_memory` - process-local storage for tests and demos
//! - `repository::json_file` - a single JSON document on disk

pub mod repository;

pub use repository::in_memory::{InMemoryCropRepository, InMemoryFarmerRepository};
pub use repository::json_file::{JsonFileStore, StoreError};
