//! Durable Storage
//!
//! Keyed blob storage behind a trait so the stores can run against the
//! app data directory or an in-memory map.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Keyed storage for serialized collections
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`; `None` if it was never written
    fn load(&self, key: &str) -> DomainResult<Option<String>>;

    /// Replace the value stored under `key`
    fn save(&self, key: &str, contents: &str) -> DomainResult<()>;
}

/// One `<key>.json` file per key inside a directory
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for JsonFileStorage {
    fn load(&self, key: &str) -> DomainResult<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => Ok(None),
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!("{}: {}", path.display(), e))),
        }
    }

    fn save(&self, key: &str, contents: &str) -> DomainResult<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| DomainError::Storage(format!("{}: {}", self.dir.display(), e)))?;

        // Write to a temp file, then rename over the target
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)
            .map_err(|e| DomainError::Storage(format!("{}: {}", tmp.display(), e)))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| DomainError::Storage(format!("{}: {}", path.display(), e)))
    }
}

/// In-memory storage, mostly for tests
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key
    pub fn with(self, key: &str, contents: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), contents.to_string());
        }
        self
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> DomainResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, contents: &str) -> DomainResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        values.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("data"));

        assert_eq!(storage.load("items").unwrap(), None);
        storage.save("items", "[1,2]").unwrap();
        assert_eq!(storage.load("items").unwrap(), Some("[1,2]".to_string()));
        assert!(dir.path().join("data").join("items.json").exists());
        assert!(!dir.path().join("data").join("items.json.tmp").exists());
    }

    #[test]
    fn test_file_storage_blank_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("items.json"), "  \n").unwrap();
        let storage = JsonFileStorage::new(dir.path());
        assert_eq!(storage.load("items").unwrap(), None);
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new().with("k", "v");
        assert_eq!(storage.load("k").unwrap(), Some("v".to_string()));
        storage.save("k", "w").unwrap();
        assert_eq!(storage.load("k").unwrap(), Some("w".to_string()));
        assert_eq!(storage.load("other").unwrap(), None);
    }
}
