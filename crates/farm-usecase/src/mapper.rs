//! Entity <-> DTO mapping
//!
//! Mappers only copy fields. Lookups and validation of references stay in
//! the services.

use farm_domain::{Crop, Farmer, FarmerError, FarmerId};

use crate::dto::{CropDto, FarmerDto};

pub trait CropMapper {
    /// Build a new, unpersisted crop owned by `farmer`
    fn to_entity(&self, dto: &CropDto, farmer: Farmer) -> Crop;

    fn to_dto(&self, crop: &Crop) -> CropDto;
}

pub trait FarmerMapper {
    fn to_entity(&self, dto: &FarmerDto) -> Result<Farmer, FarmerError>;

    fn to_dto(&self, farmer: &Farmer) -> FarmerDto;
}

/// Field-copying crop mapper.
///
/// Any id carried by the DTO is dropped in `to_entity`: identity is assigned
/// by the store. A farmer without an id maps to `farmer_id = 0`; repositories
/// refuse to store such crops, so this only shows up for hand-built entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCropMapper;

impl CropMapper for DefaultCropMapper {
    fn to_entity(&self, dto: &CropDto, farmer: Farmer) -> Crop {
        Crop::new(dto.crop_name.clone(), farmer)
    }

    fn to_dto(&self, crop: &Crop) -> CropDto {
        CropDto {
            id: crop.id().map(|id| id.value()),
            farmer_id: crop.farmer_id().map_or(0, |id| id.value()),
            crop_name: crop.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFarmerMapper;

impl FarmerMapper for DefaultFarmerMapper {
    fn to_entity(&self, dto: &FarmerDto) -> Result<Farmer, FarmerError> {
        let farmer = Farmer::new(
            dto.first_name.clone(),
            dto.middle_name.clone(),
            dto.last_name.clone(),
        )?;

        Ok(match dto.id {
            Some(id) => farmer.with_id(FarmerId::new(id)),
            None => farmer,
        })
    }

    fn to_dto(&self, farmer: &Farmer) -> FarmerDto {
        FarmerDto {
            id: farmer.id().map(|id| id.value()),
            first_name: farmer.first_name().to_string(),
            middle_name: farmer.middle_name().to_string(),
            last_name: farmer.last_name().to_string(),
        }
    }
}
