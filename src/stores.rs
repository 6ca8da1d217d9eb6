//! Preference store implementations.
//!
//! - [`JsonFilePreferenceStore`]: a JSON object file in the user's config
//!   directory, rewritten in full on every write through a temp file and a
//!   rename. A file that does not parse reads as empty and is replaced by
//!   the next write.
//! - [`MemoryPreferenceStore`]: process-local map behind a shared handle, used
//!   by tests and as a stand-in for a store that is denied.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

use crate::config::APP_DIR_NAME;
use crate::error::StoreError;
use crate::traits::PreferenceStore;

const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Preference store persisted as a flat JSON object of string values.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/pawtrack/preferences.json`, if the platform has a config
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Like [`Self::read_all`], but a file that is not a JSON object of
    /// strings counts as empty. I/O failures still surface.
    fn read_or_reset(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.read_all() {
            Err(err @ StoreError::Json { .. }) => {
                tracing::warn!("{err}; treating it as empty, the next save replaces it");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(values).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        // Write beside the target and rename over it, so a crash never leaves
        // a truncated file behind.
        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|source| StoreError::Io {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &self.path).map_err(io_err)
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_or_reset()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.read_or_reset()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }
}

/// In-memory store. Clones share the same map, which lets a test "restart"
/// the app against the values a previous manager wrote.
#[derive(Debug, Clone)]
pub struct MemoryPreferenceStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    available: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self {
            values: Rc::default(),
            available: true,
        }
    }

    /// A store whose every operation fails with [`StoreError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            values: Rc::default(),
            available: false,
        }
    }

    /// Reads a value directly, bypassing availability.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl Default for MemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_json_store_set_creates_parent_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let mut store = JsonFilePreferenceStore::new(&path);

        store.set("theme", "dark").unwrap();
        store.set("other", "x").unwrap();
        store.set("theme", "light").unwrap();

        let reopened = JsonFilePreferenceStore::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_json_store_truncated_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"theme": "da"#).unwrap();

        let store = JsonFilePreferenceStore::new(&path);
        assert!(matches!(store.read_all(), Err(StoreError::Json { .. })));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_json_store_overwrites_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"theme": 1}"#).unwrap();

        let mut store = JsonFilePreferenceStore::new(&path);
        store.set("theme", "dark").unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_json_store_temp_path_sits_beside_target() {
        let store = JsonFilePreferenceStore::new("/tmp/pawtrack/preferences.json");
        assert_eq!(
            store.temp_path(),
            PathBuf::from("/tmp/pawtrack/preferences.json.tmp")
        );
    }

    #[test]
    fn test_memory_store_clones_share_values() {
        let mut store = MemoryPreferenceStore::new();
        let observer = store.clone();

        store.set("theme", "dark").unwrap();
        assert_eq!(observer.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_unavailable_memory_store_fails() {
        let mut store = MemoryPreferenceStore::unavailable();
        assert!(matches!(store.get("theme"), Err(StoreError::Unavailable)));
        assert!(matches!(store.set("theme", "dark"), Err(StoreError::Unavailable)));
        assert_eq!(store.peek("theme"), None);
    }
}
