use crate::checklist::Checklist;
use crate::error::StorageError;
use crate::kv_store::KeyValueStore;

/// Durable load/save boundary for the checklist
///
/// Reads never fail: an absent, unreadable or invalid slot loads as `None`
/// and the caller falls back to defaults. Writes report their errors.
pub struct Storage {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl Storage {
    pub fn new(store: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
        }
    }

    /// Slot key holding the checklist
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Slot key holding the last viewed category
    pub fn active_category_key(&self) -> String {
        format!("{}.active_category", self.key)
    }

    pub fn load(&self) -> Option<Checklist> {
        let content = match self.store.get(&self.key) {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::debug!("No stored checklist under '{}'", self.key);
                return None;
            }
            Err(e) => {
                tracing::warn!("Failed to read checklist slot '{}': {}", self.key, e);
                return None;
            }
        };

        match serde_json::from_str::<Checklist>(&content) {
            Ok(checklist) => Some(checklist),
            Err(e) => {
                tracing::warn!("Ignoring invalid checklist in slot '{}': {}", self.key, e);
                None
            }
        }
    }

    pub fn save(&mut self, checklist: &Checklist) -> Result<(), StorageError> {
        let content = serde_json::to_string(checklist)?;
        self.store.set(&self.key, &content)
    }

    /// Read the persisted active category ID, if any
    pub fn load_active_category(&self) -> Option<String> {
        let key = self.active_category_key();
        let content = match self.store.get(&key) {
            Ok(content) => content?,
            Err(e) => {
                tracing::warn!("Failed to read slot '{}': {}", key, e);
                return None;
            }
        };
        serde_json::from_str::<String>(&content)
            .inspect_err(|e| tracing::warn!("Ignoring invalid value in slot '{}': {}", key, e))
            .ok()
    }

    pub fn save_active_category(&mut self, category_id: &str) -> Result<(), StorageError> {
        let content = serde_json::to_string(category_id)?;
        self.store.set(&self.active_category_key(), &content)
    }
}
