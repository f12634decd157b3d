//! Domain Models
//!
//! A Farmer owns zero or more Crops; a Crop belongs to exactly one Farmer.

pub mod crop;
pub mod farmer;
