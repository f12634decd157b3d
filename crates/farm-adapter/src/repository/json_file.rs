//! JSON File Store
//!
//! Farmers and crops kept in one JSON document. The whole document is loaded
//! on open and rewritten after every change. A change only becomes visible
//! once the rewrite succeeded.
//!
//! ```json
//! {
//!   "farmers": [{ "id": 1, "firstName": "John", "middleName": "Doe", "lastName": "Smith" }],
//!   "crops": [{ "id": 1, "farmerId": 1, "cropName": "Cotton" }],
//!   "lastFarmerId": 1,
//!   "lastCropId": 1,
//!   "updatedAt": "2026-10-19T08:00:00+00:00"
//! }
//! ```

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use farm_domain::{
    Crop, CropId, CropRepository, Farmer, FarmerId, FarmerRepository, RepositoryError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid farmer record {id}: {reason}")]
    InvalidFarmer { id: i64, reason: String },

    #[error("Crop {crop_id} references unknown farmer {farmer_id}")]
    DanglingFarmer { crop_id: i64, farmer_id: i64 },

    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: i64 },

    #[error("No {0} ids left to assign")]
    IdSpaceExhausted(&'static str),

    #[error("Failed to acquire {0} lock")]
    Lock(&'static str),
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        RepositoryError::persistence(err.to_string())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataFile {
    #[serde(default)]
    farmers: Vec<FarmerRecord>,
    #[serde(default)]
    crops: Vec<CropRecord>,
    #[serde(default)]
    last_farmer_id: i64,
    #[serde(default)]
    last_crop_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FarmerRecord {
    id: i64,
    first_name: String,
    #[serde(default)]
    middle_name: String,
    last_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CropRecord {
    id: i64,
    farmer_id: i64,
    crop_name: String,
}

/// Resolved in-memory view of the data file
#[derive(Debug, Clone, Default)]
struct State {
    farmers: BTreeMap<FarmerId, Farmer>,
    crops: BTreeMap<CropId, Crop>,
    last_farmer_id: i64,
    last_crop_id: i64,
}

impl State {
    fn from_file(file: DataFile) -> Result<Self, StoreError> {
        let mut state = State {
            last_farmer_id: file.last_farmer_id,
            last_crop_id: file.last_crop_id,
            ..State::default()
        };

        for record in file.farmers {
            let farmer = Farmer::new(record.first_name, record.middle_name, record.last_name)
                .map_err(|err| StoreError::InvalidFarmer {
                    id: record.id,
                    reason: err.to_string(),
                })?
                .with_id(FarmerId::new(record.id));
            state.last_farmer_id = state.last_farmer_id.max(record.id);
            if state.farmers.insert(FarmerId::new(record.id), farmer).is_some() {
                return Err(StoreError::DuplicateId {
                    kind: "farmer",
                    id: record.id,
                });
            }
        }

        for record in file.crops {
            let farmer = state
                .farmers
                .get(&FarmerId::new(record.farmer_id))
                .cloned()
                .ok_or(StoreError::DanglingFarmer {
                    crop_id: record.id,
                    farmer_id: record.farmer_id,
                })?;
            let id = CropId::new(record.id);
            state.last_crop_id = state.last_crop_id.max(record.id);
            let crop = Crop::new(record.crop_name, farmer).with_id(id);
            if state.crops.insert(id, crop).is_some() {
                return Err(StoreError::DuplicateId {
                    kind: "crop",
                    id: record.id,
                });
            }
        }

        Ok(state)
    }

    fn to_file(&self) -> DataFile {
        DataFile {
            farmers: self
                .farmers
                .values()
                .filter_map(|farmer| {
                    Some(FarmerRecord {
                        id: farmer.id()?.value(),
                        first_name: farmer.first_name().to_string(),
                        middle_name: farmer.middle_name().to_string(),
                        last_name: farmer.last_name().to_string(),
                    })
                })
                .collect(),
            crops: self
                .crops
                .values()
                .filter_map(|crop| {
                    Some(CropRecord {
                        id: crop.id()?.value(),
                        farmer_id: crop.farmer_id()?.value(),
                        crop_name: crop.name().to_string(),
                    })
                })
                .collect(),
            last_farmer_id: self.last_farmer_id,
            last_crop_id: self.last_crop_id,
            updated_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }
}

/// Id for a saved entity: `existing` when set, otherwise one past `last_id`.
/// `None` once the id space is used up.
fn claim_id(last_id: &mut i64, existing: Option<i64>) -> Option<i64> {
    let id = match existing {
        Some(id) => id,
        None => last_id.checked_add(1)?,
    };
    *last_id = (*last_id).max(id);
    Some(id)
}

/// `<file name>.tmp` next to `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// File-backed repository for both farmers and crops
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<State>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; the file
    /// is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let state = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            let file: DataFile = serde_json::from_str(&content)?;
            State::from_file(file)?
        } else {
            State::default()
        };

        info!(
            path = %path.display(),
            farmers = state.farmers.len(),
            crops = state.crops.len(),
            "data_file_loaded"
        );

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, state: &State) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(&state.to_file())?;
        let tmp = temp_path_for(&self.path);
        std::fs::write(&tmp, content).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;

        debug!(path = %self.path.display(), "data_file_written");
        Ok(())
    }

    fn read_state(&self) -> Result<std::sync::RwLockReadGuard<'_, State>, StoreError> {
        self.state.read().map_err(|_| StoreError::Lock("read"))
    }

    /// Apply `change` to a copy of the state, persist it, then publish it.
    /// A failing `change` leaves both the file and the state untouched.
    fn update<T>(
        &self,
        change: impl FnOnce(&mut State) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.state.write().map_err(|_| StoreError::Lock("write"))?;
        let mut next = guard.clone();
        let out = change(&mut next)?;
        self.flush(&next)?;
        *guard = next;
        Ok(out)
    }
}

impl FarmerRepository for JsonFileStore {
    fn save(&self, farmer: Farmer) -> Result<Farmer, RepositoryError> {
        let saved = self.update(|state| {
            let id = claim_id(&mut state.last_farmer_id, farmer.id().map(|id| id.value()))
                .ok_or(StoreError::IdSpaceExhausted("farmer"))?;
            let farmer = farmer.with_id(FarmerId::new(id));
            state.farmers.insert(FarmerId::new(id), farmer.clone());
            Ok(farmer)
        })?;
        Ok(saved)
    }

    fn find_by_id(&self, id: FarmerId) -> Result<Option<Farmer>, RepositoryError> {
        Ok(self.read_state()?.farmers.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Farmer>, RepositoryError> {
        Ok(self.read_state()?.farmers.values().cloned().collect())
    }
}

impl CropRepository for JsonFileStore {
    fn save(&self, crop: Crop) -> Result<Crop, RepositoryError> {
        let farmer_id = crop.farmer_id().ok_or_else(|| {
            RepositoryError::invalid_entity("crop must reference a persisted farmer")
        })?;
        if !self.read_state()?.farmers.contains_key(&farmer_id) {
            return Err(RepositoryError::invalid_entity(format!(
                "farmer {} is not stored in {}",
                farmer_id,
                self.path.display()
            )));
        }

        let saved = self.update(|state| {
            let id = claim_id(&mut state.last_crop_id, crop.id().map(|id| id.value()))
                .ok_or(StoreError::IdSpaceExhausted("crop"))?;
            let crop = crop.with_id(CropId::new(id));
            state.crops.insert(CropId::new(id), crop.clone());
            Ok(crop)
        })?;
        Ok(saved)
    }

    fn find_by_id(&self, id: CropId) -> Result<Option<Crop>, RepositoryError> {
        Ok(self.read_state()?.crops.get(&id).cloned())
    }

    fn find_by_farmer_id(&self, farmer_id: FarmerId) -> Result<Vec<Crop>, RepositoryError> {
        Ok(self
            .read_state()?
            .crops
            .values()
            .filter(|c| c.belongs_to(farmer_id))
            .cloned()
            .collect())
    }

    fn delete(&self, crop: &Crop) -> Result<(), RepositoryError> {
        if let Some(id) = crop.id() {
            self.update(|state| {
                state.crops.remove(&id);
                Ok(())
            })?;
        }
        Ok(())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.read_state()?.crops.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::open(dir.path().join("farm-data.json")).unwrap()
    }

    fn john(store: &JsonFileStore) -> Farmer {
        FarmerRepository::save(store, Farmer::new("John", "Doe", "Smith").unwrap()).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.find_all().unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_data_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = store_in(&dir);
            let farmer = john(&store);
            CropRepository::save(&store, Crop::new("Cotton", farmer.clone())).unwrap();
            CropRepository::save(&store, Crop::new("Wheat", farmer)).unwrap();
        }

        let store = store_in(&dir);
        let crops = store.find_by_farmer_id(FarmerId::new(1)).unwrap();

        let names: Vec<_> = crops.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Cotton", "Wheat"]);
        assert_eq!(crops[0].farmer().full_name(), "John Doe Smith");

        let next = CropRepository::save(&store, Crop::new("Rice", crops[0].farmer().clone())).unwrap();
        assert_eq!(next.id(), Some(CropId::new(3)));
    }

    #[test]
    fn test_delete_is_persisted() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let farmer = john(&store);
        let cotton = CropRepository::save(&store, Crop::new("Cotton", farmer)).unwrap();

        store.delete(&cotton).unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.count().unwrap(), 0);
        let again = CropRepository::save(
            &reopened,
            Crop::new("Wheat", reopened.find_all().unwrap()[0].clone()),
        )
        .unwrap();
        assert_eq!(again.id(), Some(CropId::new(2)));
    }

    #[test]
    fn test_crop_for_unknown_farmer_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let stranger = Farmer::new("Asha", "", "Patil")
            .unwrap()
            .with_id(FarmerId::new(5));

        let err = CropRepository::save(&store, Crop::new("Rice", stranger)).unwrap_err();

        assert!(matches!(err, RepositoryError::InvalidEntity { .. }));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_dangling_farmer_reference_fails_to_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("farm-data.json");
        std::fs::write(
            &path,
            r#"{ "farmers": [], "crops": [{ "id": 1, "farmerId": 3, "cropName": "Cotton" }] }"#,
        )
        .unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();

        assert!(matches!(
            err,
            StoreError::DanglingFarmer {
                crop_id: 1,
                farmer_id: 3
            }
        ));
    }

    #[test]
    fn test_exhausted_crop_ids_fail_without_poisoning() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("farm-data.json");
        std::fs::write(
            &path,
            r#"{
                "farmers": [{ "id": 1, "firstName": "John", "lastName": "Smith" }],
                "crops": [{ "id": 9223372036854775807, "farmerId": 1, "cropName": "Cotton" }]
            }"#,
        )
        .unwrap();
        let store = JsonFileStore::open(&path).unwrap();
        let farmer = store.find_all().unwrap()[0].clone();

        let err = CropRepository::save(&store, Crop::new("Wheat", farmer)).unwrap_err();

        assert_eq!(
            err,
            RepositoryError::persistence("No crop ids left to assign")
        );
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.find_by_farmer_id(FarmerId::new(1)).unwrap()[0].name(), "Cotton");
    }

    #[test]
    fn test_duplicate_crop_ids_fail_to_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("farm-data.json");
        std::fs::write(
            &path,
            r#"{
                "farmers": [{ "id": 1, "firstName": "John", "lastName": "Smith" }],
                "crops": [
                    { "id": 4, "farmerId": 1, "cropName": "Cotton" },
                    { "id": 4, "farmerId": 1, "cropName": "Wheat" }
                ]
            }"#,
        )
        .unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();

        assert!(matches!(err, StoreError::DuplicateId { kind: "crop", id: 4 }));
    }

    #[test]
    fn test_duplicate_farmer_ids_fail_to_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("farm-data.json");
        std::fs::write(
            &path,
            r#"{ "farmers": [
                { "id": 2, "firstName": "John", "lastName": "Smith" },
                { "id": 2, "firstName": "Asha", "lastName": "Patil" }
            ] }"#,
        )
        .unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::DuplicateId { kind: "farmer", id: 2 })
        ));
    }

    #[test]
    fn test_temp_file_keeps_full_name() {
        assert_eq!(
            temp_path_for(Path::new("/var/lib/farm/data.db")),
            PathBuf::from("/var/lib/farm/data.db.tmp")
        );
        assert_eq!(
            temp_path_for(Path::new("farm-data.json")),
            PathBuf::from("farm-data.json.tmp")
        );
    }

    #[test]
    fn test_non_json_extension_is_written_in_place() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("data.db")).unwrap();

        john(&store);

        assert!(dir.path().join("data.db").exists());
        assert!(!dir.path().join("data.db.tmp").exists());
        assert!(!dir.path().join("data.json.tmp").exists());
    }

    #[test]
    fn test_malformed_file_reports_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("farm-data.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(JsonFileStore::open(&path), Err(StoreError::Json(_))));
    }
}
