//! Crop Repository - Abstract persistence for Crops

use crate::model::crop::{Crop, CropId};
use crate::model::farmer::FarmerId;
use crate::repository::RepositoryError;

/// Crop Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Single-record operations are assumed atomic by the services using it.
pub trait CropRepository {
    /// Save a crop (create when it has no id, otherwise replace)
    fn save(&self, crop: Crop) -> Result<Crop, RepositoryError>;

    /// Find a crop by ID
    fn find_by_id(&self, id: CropId) -> Result<Option<Crop>, RepositoryError>;

    /// All crops of a farmer, in store order. No match is an empty Vec.
    fn find_by_farmer_id(&self, farmer_id: FarmerId) -> Result<Vec<Crop>, RepositoryError>;

    /// Delete a crop previously returned by this repository
    fn delete(&self, crop: &Crop) -> Result<(), RepositoryError>;

    /// Count all crops
    fn count(&self) -> Result<usize, RepositoryError>;

    /// Check if a crop exists
    fn exists(&self, id: CropId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}
