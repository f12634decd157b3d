//! In-Memory Repository Implementations
//!
//! Thread-safe maps behind `RwLock`. Ids are handed out sequentially from 1
//! and entries are kept in id order, which is also insertion order.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use farm_domain::{
    Crop, CropId, CropRepository, Farmer, FarmerId, FarmerRepository, RepositoryError,
};
use tracing::debug;

/// Rows of one entity type plus the highest id handed out so far
#[derive(Debug)]
struct Table<K, V> {
    rows: BTreeMap<K, V>,
    last_id: i64,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<K, V> Table<K, V> {
    /// Id to use for `existing`, allocating a fresh one when absent
    fn claim_id(&mut self, existing: Option<i64>) -> Result<i64, RepositoryError> {
        let id = match existing {
            Some(id) => id,
            None => self
                .last_id
                .checked_add(1)
                .ok_or_else(|| RepositoryError::persistence("id space exhausted"))?,
        };
        self.last_id = self.last_id.max(id);
        Ok(id)
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, RepositoryError> {
    lock.read()
        .map_err(|_| RepositoryError::persistence("Failed to acquire read lock"))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, RepositoryError> {
    lock.write()
        .map_err(|_| RepositoryError::persistence("Failed to acquire write lock"))
}

/// In-memory Farmer Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryFarmerRepository {
    farmers: Arc<RwLock<Table<FarmerId, Farmer>>>,
}

impl InMemoryFarmerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FarmerRepository for InMemoryFarmerRepository {
    fn save(&self, farmer: Farmer) -> Result<Farmer, RepositoryError> {
        let mut table = write(&self.farmers)?;
        let id = FarmerId::new(table.claim_id(farmer.id().map(|id| id.value()))?);
        let farmer = farmer.with_id(id);
        table.rows.insert(id, farmer.clone());
        debug!(farmer_id = %id, "farmer_stored");
        Ok(farmer)
    }

    fn find_by_id(&self, id: FarmerId) -> Result<Option<Farmer>, RepositoryError> {
        Ok(read(&self.farmers)?.rows.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Farmer>, RepositoryError> {
        Ok(read(&self.farmers)?.rows.values().cloned().collect())
    }
}

/// In-memory Crop Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryCropRepository {
    crops: Arc<RwLock<Table<CropId, Crop>>>,
}

impl InMemoryCropRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CropRepository for InMemoryCropRepository {
    /// Rejects a crop whose farmer has no id. The farmer itself is not looked
    /// up, so a farmer id this process never stored is accepted.
    fn save(&self, crop: Crop) -> Result<Crop, RepositoryError> {
        if crop.farmer_id().is_none() {
            return Err(RepositoryError::invalid_entity(
                "crop must reference a persisted farmer",
            ));
        }

        let mut table = write(&self.crops)?;
        let id = CropId::new(table.claim_id(crop.id().map(|id| id.value()))?);
        let crop = crop.with_id(id);
        table.rows.insert(id, crop.clone());
        debug!(crop_id = %id, "crop_stored");
        Ok(crop)
    }

    fn find_by_id(&self, id: CropId) -> Result<Option<Crop>, RepositoryError> {
        Ok(read(&self.crops)?.rows.get(&id).cloned())
    }

    fn find_by_farmer_id(&self, farmer_id: FarmerId) -> Result<Vec<Crop>, RepositoryError> {
        Ok(read(&self.crops)?
            .rows
            .values()
            .filter(|c| c.belongs_to(farmer_id))
            .cloned()
            .collect())
    }

    fn delete(&self, crop: &Crop) -> Result<(), RepositoryError> {
        if let Some(id) = crop.id() {
            write(&self.crops)?.rows.remove(&id);
            debug!(crop_id = %id, "crop_removed");
        }
        Ok(())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(read(&self.crops)?.rows.len())
    }
}
