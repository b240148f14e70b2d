//! Persistent store seam and its two implementations.
//!
//! [`JsonFileStore`] keeps `history.json` and `preferences.json` in one
//! directory; [`MemoryStore`] keeps everything in memory. Missing data is a
//! normal state and reads as empty.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::StoreError;
use crate::history::HistoryEntry;
use crate::legacy;

/// Preference key of the name style.
pub const PREF_FORMAT: &str = "format";
/// Preference key of the last active framework.
pub const PREF_FRAMEWORK: &str = "framework";

/// Best-effort durable storage for history and preferences.
pub trait Store {
    /// Loads the stored history, newest first. Absent data is `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be read.
    fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError>;

    /// Replaces the stored history.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be written.
    fn save_history(&mut self, entries: &[HistoryEntry]) -> Result<(), StoreError>;

    /// Loads a preference. Absent keys are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be read.
    fn load_preference(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores a preference.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be written.
    fn save_preference(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    /// Stored history.
    pub history: Vec<HistoryEntry>,
    /// Stored preferences.
    pub preferences: BTreeMap<String, String>,
}

impl Store for MemoryStore {
    fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.history.clone())
    }

    fn save_history(&mut self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        self.history = entries.to_vec();
        Ok(())
    }

    fn load_preference(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.preferences.get(key).cloned())
    }

    fn save_preference(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.preferences.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File name of the history document.
pub const HISTORY_FILE: &str = "history.json";
/// File name of the preferences document.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Store backed by JSON files in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the documents.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read(&self, name: &str) -> Result<Option<Value>, StoreError> {
        let path = self.dir.join(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Parse { path, source })
    }

    fn write(&self, name: &str, value: &Value) -> Result<(), StoreError> {
        let path = self.dir.join(name);
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write {
            path: self.dir.clone(),
            source,
        })?;
        let content = serde_json::to_string_pretty(value)
            .map_err(|source| StoreError::Parse { path: path.clone(), source })?;
        fs::write(&path, content).map_err(|source| StoreError::Write { path, source })
    }

    fn preferences(&self) -> Result<serde_json::Map<String, Value>, StoreError> {
        Ok(match self.read(PREFERENCES_FILE)? {
            Some(Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        })
    }
}

impl Store for JsonFileStore {
    fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(match self.read(HISTORY_FILE)? {
            Some(Value::Array(items)) => legacy::decode_history(items),
            _ => Vec::new(),
        })
    }

    fn save_history(&mut self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let path = self.dir.join(HISTORY_FILE);
        let value =
            serde_json::to_value(entries).map_err(|source| StoreError::Parse { path, source })?;
        self.write(HISTORY_FILE, &value)
    }

    fn load_preference(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .preferences()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned))
    }

    fn save_preference(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt preferences file is replaced rather than blocking the write.
        let mut map = self.preferences().unwrap_or_default();
        map.insert(key.to_owned(), Value::String(value.to_owned()));
        self.write(PREFERENCES_FILE, &Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_preferences() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load_preference(PREF_FORMAT).ok().flatten(), None);
        assert!(store.save_preference(PREF_FORMAT, "dot").is_ok());
        assert_eq!(
            store.load_preference(PREF_FORMAT).ok().flatten().as_deref(),
            Some("dot")
        );
    }
}
