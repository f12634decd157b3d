//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define what persistence the services need, not how it is
//! done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait CropRepository  │  InMemoryCropRepository
//!   fn save()           │  JsonFileStore
//!   fn find_by_id()     │
//! ```
//!
//! All methods take `&self`; implementations that mutate use interior
//! mutability so one instance can be shared between services.

pub mod crop_repository;
pub mod farmer_repository;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Failed to read or persist
    PersistenceError { message: String },
    /// The entity cannot be stored as given
    InvalidEntity { message: String },
}

impl RepositoryError {
    pub fn persistence(message: impl Into<String>) -> Self {
        RepositoryError::PersistenceError {
            message: message.into(),
        }
    }

    pub fn invalid_entity(message: impl Into<String>) -> Self {
        RepositoryError::InvalidEntity {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
            RepositoryError::InvalidEntity { message } => {
                write!(f, "Invalid entity: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}
