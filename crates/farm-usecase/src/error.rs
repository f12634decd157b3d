//! Error types for the farm services

use farm_domain::{CropId, FarmerError, FarmerId, RepositoryError};
use thiserror::Error;

/// Failures surfaced to callers of the services.
///
/// The not-found variants are caller input errors and are never retried.
/// Storage faults pass through untouched as `Repository`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Farmer not found with id: {id}")]
    FarmerNotFound { id: FarmerId },

    #[error("{resource} not found with id: {id}")]
    ResourceNotFound { resource: &'static str, id: i64 },

    #[error("Validation error: {0}")]
    Validation(#[from] FarmerError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn crop_not_found(id: CropId) -> Self {
        Self::ResourceNotFound {
            resource: "Crop",
            id: id.value(),
        }
    }

    pub fn farmer_resource_not_found(id: FarmerId) -> Self {
        Self::ResourceNotFound {
            resource: "Farmer",
            id: id.value(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::FarmerNotFound { .. } | ServiceError::ResourceNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
