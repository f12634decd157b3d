//! # Farm Use Case Layer
//!
//! Application services over the domain ports.
//! This layer validates references, talks to repositories and maps
//! entities to the flat DTOs handed to callers.
//!
//! ```text
//! caller ──► CropService ──► FarmerRepository / CropRepository / CropMapper
//!        ◄── CropDto | ServiceError
//! ```

pub mod crop_service;
pub mod dto;
pub mod error;
pub mod farmer_service;
pub mod mapper;
#[cfg(test)]
pub mod test_support;

pub use farm_domain;

pub use crop_service::CropService;
pub use dto::{CropDto, FarmerDto};
pub use error::{Result, ServiceError};
pub use farmer_service::FarmerService;
pub use mapper::{CropMapper, DefaultCropMapper, DefaultFarmerMapper, FarmerMapper};
