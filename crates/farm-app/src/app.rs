//! Service wiring

use std::sync::Arc;

use farm_adapter::{JsonFileStore, StoreError};
use farm_usecase::{CropService, FarmerService};

/// The services of one farmctl invocation, sharing a single store
pub struct App {
    pub farmers: FarmerService<JsonFileStore>,
    pub crops: CropService<JsonFileStore, JsonFileStore>,
}

impl App {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self {
            farmers: FarmerService::with_default_mapper(store.clone()),
            crops: CropService::with_default_mapper(store.clone(), store),
        }
    }

    pub fn open(config: &crate::AppConfig) -> Result<Self, StoreError> {
        let store = JsonFileStore::open(&config.data_file)?;
        Ok(Self::new(Arc::new(store)))
    }
}
