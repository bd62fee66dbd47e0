//! Runtime settings for the checklist store

/// Slot key used by the original packing list
pub const DEFAULT_STORAGE_KEY: &str = "tet_packing_todolist_v4";

/// Settings for a `ChecklistStore`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistConfig {
    /// Key of the slot holding the serialized checklist
    pub storage_key: String,
    /// Also persist the selected category so it survives a reload
    pub persist_active_category: bool,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_active_category: false,
        }
    }
}
