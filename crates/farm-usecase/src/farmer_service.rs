//! FarmerService - register and look up farmers

use std::sync::Arc;

use farm_domain::{FarmerId, FarmerRepository};
use tracing::{info, instrument, warn};

use crate::dto::FarmerDto;
use crate::error::{Result, ServiceError};
use crate::mapper::{DefaultFarmerMapper, FarmerMapper};

pub struct FarmerService<F, M = DefaultFarmerMapper> {
    farmers: Arc<F>,
    mapper: M,
}

impl<F: FarmerRepository> FarmerService<F> {
    pub fn with_default_mapper(farmers: Arc<F>) -> Self {
        Self::new(farmers, DefaultFarmerMapper)
    }
}

impl<F, M> FarmerService<F, M>
where
    F: FarmerRepository,
    M: FarmerMapper,
{
    pub fn new(farmers: Arc<F>, mapper: M) -> Self {
        Self { farmers, mapper }
    }

    /// Register a new farmer. Any id in the request is ignored.
    #[instrument(skip(self, dto), fields(last_name = %dto.last_name))]
    pub fn add_farmer(&self, dto: &FarmerDto) -> Result<FarmerDto> {
        let request = FarmerDto {
            id: None,
            ..dto.clone()
        };
        let farmer = self.mapper.to_entity(&request)?;
        let saved = self.farmers.save(farmer)?;
        info!(farmer_id = ?saved.id().map(|id| id.value()), "farmer_created");

        Ok(self.mapper.to_dto(&saved))
    }

    #[instrument(skip(self), fields(farmer_id = %id))]
    pub fn get_farmer_by_id(&self, id: FarmerId) -> Result<FarmerDto> {
        match self.farmers.find_by_id(id)? {
            Some(farmer) => Ok(self.mapper.to_dto(&farmer)),
            None => {
                warn!("farmer_not_found");
                Err(ServiceError::farmer_resource_not_found(id))
            }
        }
    }

    pub fn list_farmers(&self) -> Result<Vec<FarmerDto>> {
        Ok(self
            .farmers
            .find_all()?
            .iter()
            .map(|farmer| self.mapper.to_dto(farmer))
            .collect())
    }
}
