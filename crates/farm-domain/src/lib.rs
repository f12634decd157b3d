//! # Farm Domain Layer
//!
//! Pure business vocabulary of the farm-management backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - Farmer, Crop and their identifiers           ││
//! │  │  repository/ - Persistence ports (not implementations)      ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Services that orchestrate these types live in `farm-usecase`; concrete
//! storage lives in `farm-adapter`.

pub mod model;
pub mod repository;

pub use model::{
    crop::{Crop, CropId},
    farmer::{Farmer, FarmerError, FarmerId},
};

pub use repository::{
    crop_repository::CropRepository, farmer_repository::FarmerRepository, RepositoryError,
};
