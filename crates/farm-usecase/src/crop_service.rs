//! CropService - create, read, list and delete crops
//!
//! Each operation is a single validate-then-act step. Missing records turn
//! into `ServiceError`s; an empty farmer crop list is a normal result.

use std::sync::Arc;

use farm_domain::{CropId, CropRepository, FarmerId, FarmerRepository};
use tracing::{debug, info, instrument, warn};

use crate::dto::CropDto;
use crate::error::{Result, ServiceError};
use crate::mapper::{CropMapper, DefaultCropMapper};

pub struct CropService<F, C, M = DefaultCropMapper> {
    farmers: Arc<F>,
    crops: Arc<C>,
    mapper: M,
}

impl<F, C> CropService<F, C>
where
    F: FarmerRepository,
    C: CropRepository,
{
    /// Service using the field-copying mapper
    pub fn with_default_mapper(farmers: Arc<F>, crops: Arc<C>) -> Self {
        Self::new(farmers, crops, DefaultCropMapper)
    }
}

impl<F, C, M> CropService<F, C, M>
where
    F: FarmerRepository,
    C: CropRepository,
    M: CropMapper,
{
    pub fn new(farmers: Arc<F>, crops: Arc<C>, mapper: M) -> Self {
        Self {
            farmers,
            crops,
            mapper,
        }
    }

    /// Create a crop for an existing farmer
    #[instrument(skip(self, dto), fields(farmer_id = dto.farmer_id, crop_name = %dto.crop_name))]
    pub fn add_crop(&self, dto: &CropDto) -> Result<CropDto> {
        let farmer_id = FarmerId::new(dto.farmer_id);
        let farmer = match self.farmers.find_by_id(farmer_id)? {
            Some(farmer) => farmer,
            None => {
                warn!(%farmer_id, "farmer_not_found");
                return Err(ServiceError::FarmerNotFound { id: farmer_id });
            }
        };

        let crop = self.mapper.to_entity(dto, farmer);
        let saved = self.crops.save(crop)?;
        info!(crop_id = ?saved.id().map(|id| id.value()), "crop_created");

        Ok(self.mapper.to_dto(&saved))
    }

    #[instrument(skip(self), fields(crop_id = %id))]
    pub fn get_crop_by_id(&self, id: CropId) -> Result<CropDto> {
        let crop = self.crops.find_by_id(id)?.ok_or_else(|| {
            warn!("crop_not_found");
            ServiceError::crop_not_found(id)
        })?;

        Ok(self.mapper.to_dto(&crop))
    }

    /// All crops of a farmer in store order. An unknown farmer yields an
    /// empty list.
    #[instrument(skip(self), fields(farmer_id = %farmer_id))]
    pub fn get_crops_by_farmer_id(&self, farmer_id: FarmerId) -> Result<Vec<CropDto>> {
        let crops = self.crops.find_by_farmer_id(farmer_id)?;
        debug!(count = crops.len(), "crops_listed");

        Ok(crops.iter().map(|crop| self.mapper.to_dto(crop)).collect())
    }

    #[instrument(skip(self), fields(crop_id = %id))]
    pub fn delete_crop(&self, id: CropId) -> Result<()> {
        let crop = self.crops.find_by_id(id)?.ok_or_else(|| {
            warn!("crop_not_found");
            ServiceError::crop_not_found(id)
        })?;

        self.crops.delete(&crop)?;
        info!("crop_deleted");
        Ok(())
    }
}
