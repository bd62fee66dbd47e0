//! Key-value slot stores
//!
//! The host's durable storage is modelled as an opaque map of string keys to
//! UTF-8 string values, like a browser's local storage. Two implementations
//! are provided:
//! - `MemoryStore`: shared in-process map with an optional byte quota
//! - `FileStore`: TOML document on disk with a `[slots]` table

use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Durable key-value slot storage
pub trait KeyValueStore: Send {
    /// Read a slot, `Ok(None)` if it has never been written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, overwriting any prior value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process key-value store
///
/// Clones share the same underlying map, so a test can keep a handle to
/// inspect what was written after giving another handle to the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
    /// Maximum total bytes of keys and values, `None` for unlimited
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once keys and values exceed `limit` bytes
    pub fn with_quota(limit: usize) -> Self {
        Self {
            slots: Arc::default(),
            quota: Some(limit),
        }
    }

    /// Total bytes used by all keys and values
    pub fn used_bytes(&self) -> usize {
        let slots = self.slots.lock().unwrap();
        slots.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().unwrap();
        Ok(slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap();

        if let Some(limit) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk layout of a `FileStore`
#[derive(Debug, Default, Serialize, Deserialize)]
struct SlotFile {
    #[serde(default)]
    slots: BTreeMap<String, String>,
}

/// Key-value store backed by a single TOML file
///
/// The file is re-read on every access and rewritten on every write, so
/// nothing is cached between calls. A missing file reads as empty.
pub struct FileStore {
    file_path: PathBuf,
}

impl FileStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing TOML file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read(&self) -> Result<SlotFile, StorageError> {
        if !self.file_path.exists() {
            return Ok(SlotFile::default());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let file: SlotFile = toml::from_str(&content)?;
        Ok(file)
    }

    /// Read the document for a write, replacing it if it cannot be parsed
    fn read_for_write(&self) -> Result<SlotFile, StorageError> {
        match self.read() {
            Ok(file) => Ok(file),
            Err(StorageError::TomlParse(e)) => {
                tracing::warn!(
                    "Storage file {} is corrupt and will be replaced: {}",
                    self.file_path.display(),
                    e
                );
                Ok(SlotFile::default())
            }
            Err(e) => Err(e),
        }
    }

    fn write(&self, file: &SlotFile) -> Result<(), StorageError> {
        let content = toml::to_string_pretty(file)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read()?.slots.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut file = self.read_for_write()?;
        file.slots.insert(key.to_string(), value.to_string());
        self.write(&file)
    }
}
