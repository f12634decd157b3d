//! Crop - Something a farmer grows
//!
//! A Crop belongs to exactly one Farmer. The reference is checked once,
//! when the crop is created, and never re-validated afterwards.

use super::farmer::{Farmer, FarmerId};

/// Unique identifier for a Crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CropId(i64);

impl CropId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for CropId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crop {
    /// `None` until persisted
    id: Option<CropId>,
    name: String,
    /// Owning farmer (many-to-one, never absent)
    farmer: Farmer,
}

impl Crop {
    pub fn new(name: impl Into<String>, farmer: Farmer) -> Self {
        Self {
            id: None,
            name: name.into(),
            farmer,
        }
    }

    /// Builder: attach an identity
    pub fn with_id(mut self, id: CropId) -> Self {
        self.id = Some(id);
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> Option<CropId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn farmer(&self) -> &Farmer {
        &self.farmer
    }

    pub fn farmer_id(&self) -> Option<FarmerId> {
        self.farmer.id()
    }

    pub fn belongs_to(&self, farmer_id: FarmerId) -> bool {
        self.farmer_id() == Some(farmer_id)
    }
}
