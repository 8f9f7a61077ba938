//! String key-value storage
//!
//! The vault and theme preference only need a handful of string slots, the
//! way a browser page uses local storage. [`KeyValueStore`] is that seam;
//! [`FileStore`] persists it as one JSON object on disk and [`MemoryStore`]
//! keeps it in memory.

pub mod file_io;
pub mod file_store;

pub use file_io::{read_json, write_json_atomic};
pub use file_store::FileStore;

use std::collections::BTreeMap;

use crate::error::VaultResult;

/// Storage key holding the latest saved envelope
pub const PROFILE_KEY: &str = "bio_profile_encrypted";

/// Storage key holding the theme preference
pub const THEME_KEY: &str = "bio_theme";

/// A string-keyed store of string values
pub trait KeyValueStore {
    fn get(&self, key: &str) -> VaultResult<Option<String>>;

    /// Insert or replace a value. Either the new value is stored or the old
    /// one is left intact.
    fn set(&mut self, key: &str, value: &str) -> VaultResult<()>;

    /// Remove a value, returning whether it existed
    fn remove(&mut self, key: &str) -> VaultResult<bool>;

    fn contains(&self, key: &str) -> VaultResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> VaultResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> VaultResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> VaultResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> VaultResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> VaultResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> VaultResult<bool> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert!(store.contains(THEME_KEY).unwrap());

        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        assert!(store.remove(THEME_KEY).unwrap());
        assert!(!store.remove(THEME_KEY).unwrap());
        assert!(!store.contains(THEME_KEY).unwrap());
    }

    #[test]
    fn test_mutable_reference_is_a_store() {
        fn write_through<S: KeyValueStore>(mut store: S) {
            store.set(PROFILE_KEY, "a:b:c").unwrap();
        }

        let mut store = MemoryStore::new();
        write_through(&mut store);
        assert_eq!(store.get(PROFILE_KEY).unwrap().as_deref(), Some("a:b:c"));
    }
}
