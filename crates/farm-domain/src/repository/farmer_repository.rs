//! Farmer Repository - Abstract persistence for Farmers

use crate::model::farmer::{Farmer, FarmerId};
use crate::repository::RepositoryError;

/// Farmer Repository Trait
///
/// The crop service only reads through this port; the farmer service also
/// saves and lists.
pub trait FarmerRepository {
    /// Save a farmer, assigning an id when it has none
    fn save(&self, farmer: Farmer) -> Result<Farmer, RepositoryError>;

    /// Find a farmer by ID
    fn find_by_id(&self, id: FarmerId) -> Result<Option<Farmer>, RepositoryError>;

    /// All farmers, ordered by id
    fn find_all(&self) -> Result<Vec<Farmer>, RepositoryError>;

    /// Check if a farmer exists
    fn exists(&self, id: FarmerId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}
