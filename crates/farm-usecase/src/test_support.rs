//! Recording fakes for the repository ports and the crop mapper.
//!
//! Each repository fake stores entities in a Vec (so store order is insertion
//! order) and records every call it receives, letting tests assert on call
//! counts and arguments.

use std::cell::RefCell;

use farm_domain::{
    Crop, CropId, CropRepository, Farmer, FarmerId, FarmerRepository, RepositoryError,
};

use crate::dto::CropDto;
use crate::mapper::CropMapper;

pub fn john_smith() -> Farmer {
    Farmer::new("John", "Doe", "Smith")
        .unwrap()
        .with_id(FarmerId::new(1))
}

#[derive(Default)]
pub struct RecordingFarmerRepository {
    pub farmers: RefCell<Vec<Farmer>>,
    pub find_by_id_calls: RefCell<Vec<FarmerId>>,
    pub saved: RefCell<Vec<Farmer>>,
    pub failure: Option<RepositoryError>,
}

impl RecordingFarmerRepository {
    pub fn with_farmers(farmers: impl IntoIterator<Item = Farmer>) -> Self {
        Self {
            farmers: RefCell::new(farmers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn failing(error: RepositoryError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), RepositoryError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl FarmerRepository for RecordingFarmerRepository {
    fn save(&self, farmer: Farmer) -> Result<Farmer, RepositoryError> {
        self.check()?;
        self.saved.borrow_mut().push(farmer.clone());
        let mut farmers = self.farmers.borrow_mut();
        let farmer = farmer.with_id(FarmerId::new(farmers.len() as i64 + 1));
        farmers.push(farmer.clone());
        Ok(farmer)
    }

    fn find_by_id(&self, id: FarmerId) -> Result<Option<Farmer>, RepositoryError> {
        self.find_by_id_calls.borrow_mut().push(id);
        self.check()?;
        Ok(self
            .farmers
            .borrow()
            .iter()
            .find(|f| f.id() == Some(id))
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Farmer>, RepositoryError> {
        self.check()?;
        Ok(self.farmers.borrow().clone())
    }
}

#[derive(Default)]
pub struct RecordingCropRepository {
    pub crops: RefCell<Vec<Crop>>,
    pub find_by_id_calls: RefCell<Vec<CropId>>,
    pub find_by_farmer_id_calls: RefCell<Vec<FarmerId>>,
    pub saved: RefCell<Vec<Crop>>,
    pub deleted: RefCell<Vec<Crop>>,
    pub failure: Option<RepositoryError>,
}

impl RecordingCropRepository {
    pub fn with_crops(crops: impl IntoIterator<Item = Crop>) -> Self {
        Self {
            crops: RefCell::new(crops.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn failing(error: RepositoryError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), RepositoryError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl CropRepository for RecordingCropRepository {
    fn save(&self, crop: Crop) -> Result<Crop, RepositoryError> {
        self.check()?;
        self.saved.borrow_mut().push(crop.clone());
        let mut crops = self.crops.borrow_mut();
        let next = crops
            .iter()
            .filter_map(|c| c.id())
            .map(|id| id.value())
            .max()
            .unwrap_or(0)
            + 1;
        let crop = crop.with_id(CropId::new(next));
        crops.push(crop.clone());
        Ok(crop)
    }

    fn find_by_id(&self, id: CropId) -> Result<Option<Crop>, RepositoryError> {
        self.find_by_id_calls.borrow_mut().push(id);
        self.check()?;
        Ok(self.crops.borrow().iter().find(|c| c.id() == Some(id)).cloned())
    }

    fn find_by_farmer_id(&self, farmer_id: FarmerId) -> Result<Vec<Crop>, RepositoryError> {
        self.find_by_farmer_id_calls.borrow_mut().push(farmer_id);
        self.check()?;
        Ok(self
            .crops
            .borrow()
            .iter()
            .filter(|c| c.belongs_to(farmer_id))
            .cloned()
            .collect())
    }

    fn delete(&self, crop: &Crop) -> Result<(), RepositoryError> {
        self.check()?;
        self.deleted.borrow_mut().push(crop.clone());
        self.crops.borrow_mut().retain(|c| c.id() != crop.id());
        Ok(())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        self.check()?;
        Ok(self.crops.borrow().len())
    }
}

/// Crop mapper that records its arguments and tags what it returns, so a
/// test can tell its output apart from a field copy. Implemented for `&Self`
/// so the test keeps access to the recorded calls.
#[derive(Default)]
pub struct RecordingCropMapper {
    pub to_entity_calls: RefCell<Vec<(CropDto, Farmer)>>,
    pub to_dto_calls: RefCell<Vec<Crop>>,
}

impl CropMapper for &RecordingCropMapper {
    fn to_entity(&self, dto: &CropDto, farmer: Farmer) -> Crop {
        self.to_entity_calls
            .borrow_mut()
            .push((dto.clone(), farmer.clone()));
        Crop::new(format!("{} (mapped)", dto.crop_name), farmer)
    }

    fn to_dto(&self, crop: &Crop) -> CropDto {
        self.to_dto_calls.borrow_mut().push(crop.clone());
        CropDto {
            id: crop.id().map(|id| id.value()),
            farmer_id: crop.farmer_id().map_or(-1, |id| id.value()),
            crop_name: format!("dto:{}", crop.name()),
        }
    }
}
