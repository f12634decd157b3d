//! Transport-facing views of the entities
//!
//! DTOs are flat: a crop carries its farmer's id, never the farmer itself.

use serde::{Deserialize, Serialize};

/// Flat view of a Crop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDto {
    /// Absent on create requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub farmer_id: i64,

    pub crop_name: String,
}

impl CropDto {
    /// A create request: no id yet
    pub fn new(farmer_id: i64, crop_name: impl Into<String>) -> Self {
        Self {
            id: None,
            farmer_id,
            crop_name: crop_name.into(),
        }
    }
}

/// Flat view of a Farmer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub first_name: String,

    #[serde(default)]
    pub middle_name: String,

    pub last_name: String,
}
