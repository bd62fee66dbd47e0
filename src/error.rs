//! Error types for the checklist engine
//!
//! `ChecklistError` covers rejected store operations. Every variant means the
//! operation was a no-op and the in-memory state is unchanged.
//! `StorageError` covers failures of the durable key-value slot.

/// Result type for checklist store operations
pub type ChecklistResult<T> = Result<T, ChecklistError>;

/// Errors returned by `ChecklistStore` operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    #[error("Item text must not be empty")]
    Validation,

    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    #[error("Item '{item_id}' not found in category '{category_id}'")]
    ItemNotFound {
        category_id: String,
        item_id: String,
    },

    #[error("No item is being edited")]
    NoActiveEdit,
}

impl ChecklistError {
    /// Check whether this error reports a missing category or item
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ChecklistError::CategoryNotFound(_) | ChecklistError::ItemNotFound { .. }
        )
    }
}

/// Errors raised by key-value stores and the persistence adapter
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to access storage file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse storage file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to write storage file: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Failed to serialize checklist: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Quota exceeded writing '{key}': {needed} bytes needed, {limit} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
}
