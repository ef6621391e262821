//! Farm persistence
//!
//! The farm document is loaded and saved whole. `JsonFileStore` keeps it in a
//! pretty-printed JSON file; `MemoryStore` keeps it in memory.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use shared::models::FarmDatabase;

use crate::error::{AppError, AppResult};

/// Load/save contract for the farm document
pub trait FarmStore: Send + Sync {
    /// Load the whole document; a missing document is empty
    fn load(&self) -> AppResult<FarmDatabase>;

    /// Replace the whole document
    fn save(&self, db: &FarmDatabase) -> AppResult<()>;
}

/// Farm document stored as a JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FarmStore for JsonFileStore {
    fn load(&self) -> AppResult<FarmDatabase> {
        if !self.path.exists() {
            return Ok(FarmDatabase::default());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::StorageError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            AppError::StorageError(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, db: &FarmDatabase) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(db)
            .map_err(|e| AppError::Internal(format!("Failed to serialize farm data: {}", e)))?;

        // Write then rename so readers never see a half-written file
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, contents).map_err(|e| {
            AppError::StorageError(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            AppError::StorageError(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(path = %self.path.display(), farms = db.farms.len(), "Saved farm data");
        Ok(())
    }
}

/// Farm document held in memory
#[derive(Default)]
pub struct MemoryStore {
    db: Mutex<FarmDatabase>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FarmStore for MemoryStore {
    fn load(&self) -> AppResult<FarmDatabase> {
        self.db
            .lock()
            .map(|db| db.clone())
            .map_err(|_| AppError::Internal("Memory store lock poisoned".to_string()))
    }

    fn save(&self, db: &FarmDatabase) -> AppResult<()> {
        let mut stored = self
            .db
            .lock()
            .map_err(|_| AppError::Internal("Memory store lock poisoned".to_string()))?;
        *stored = db.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{Farm, Reading};

    fn sample_db() -> FarmDatabase {
        let mut db = FarmDatabase::default();
        db.farms.push(Farm {
            id: 1,
            farm_size: 4.0,
            crop_type: "sugarcane".to_string(),
            irrigation_method: "flood".to_string(),
            location: "Thanjavur".to_string(),
            moisture_threshold: 40,
            created_at: Utc::now(),
        });
        db.sensor_data.insert(
            1,
            Reading {
                moisture: 42.0,
                temperature: 30.5,
                humidity: 61.0,
                last_updated: Utc::now(),
            },
        );
        db
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));
        assert_eq!(store.load().unwrap(), FarmDatabase::default());
    }

    #[test]
    fn test_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));
        let db = sample_db();
        store.save(&db).unwrap();

        let reopened = JsonFileStore::new(store.path().to_path_buf());
        assert_eq!(reopened.load().unwrap(), db);
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(path);
        assert!(matches!(store.load(), Err(AppError::StorageError(_))));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().farms.is_empty());
        store.save(&sample_db()).unwrap();
        assert_eq!(store.load().unwrap().farms.len(), 1);
    }
}
