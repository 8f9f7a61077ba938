//! File-backed key-value store
//!
//! All slots live in a single JSON object. Every write re-reads the file,
//! applies the change and replaces the file atomically, so a failed write
//! keeps the previous contents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::VaultResult;

use super::file_io::{read_json, write_json_atomic};
use super::KeyValueStore;

/// Key-value store persisted as a JSON object file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> VaultResult<BTreeMap<String, String>> {
        read_json(&self.path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> VaultResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> VaultResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        write_json_atomic(&self.path, &entries)?;
        log::debug!("stored key '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> VaultResult<bool> {
        let mut entries = self.load()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        write_json_atomic(&self.path, &entries)?;
        log::debug!("removed key '{}'", key);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{PROFILE_KEY, THEME_KEY};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("storage.json"));

        assert_eq!(store.get(PROFILE_KEY).unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("storage.json");

        let mut store = FileStore::new(&path);
        store.set(PROFILE_KEY, "c2FsdA==:bm9uY2U=:Y3Q=").unwrap();
        store.set(THEME_KEY, "dark").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get(PROFILE_KEY).unwrap().as_deref(),
            Some("c2FsdA==:bm9uY2U=:Y3Q=")
        );
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_remove_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("storage.json"));

        store.set(PROFILE_KEY, "x").unwrap();
        store.set(THEME_KEY, "light").unwrap();

        assert!(store.remove(PROFILE_KEY).unwrap());
        assert!(!store.remove(PROFILE_KEY).unwrap());
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_corrupt_file_reports_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let mut store = FileStore::new(&path);
        assert!(store.get(THEME_KEY).is_err());
        // The broken file is not overwritten by a later set
        assert!(store.set(THEME_KEY, "dark").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2");
    }
}
