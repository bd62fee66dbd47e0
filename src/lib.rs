//! Packing Checklist Library
//!
//! A personal checklist engine: items grouped into fixed categories, each with
//! a completion flag, with progress derived live across all categories. State
//! is persisted to a durable key-value slot after every change, and at most
//! one item is in edit mode at a time.
//!
//! # Architecture
//!
//! - **Domain Layer**: `checklist` module - data model and `ChecklistStore`
//! - **Persistence Layer**: `storage` and `kv_store` modules - JSON slot in a
//!   memory or TOML-file backed key-value store
//! - **MCP Layer**: `ChecklistServerHandler` - exposes the store as MCP tools
//!
//! # Example
//!
//! ```
//! use packing_checklist::{ChecklistConfig, ChecklistStore, MemoryStore};
//!
//! let mut store = ChecklistStore::initialize(MemoryStore::new(), ChecklistConfig::default());
//! let coat = store.add_item("clothes", "Áo ấm").unwrap();
//! store.add_item("clothes", "Khăn").unwrap();
//! store.toggle_item("clothes", &coat.id).unwrap();
//! assert_eq!(store.progress(), 50);
//! ```

pub mod checklist;
pub mod config;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod kv_store;
pub mod storage;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::Mutex;

// Re-export commonly used types
pub use checklist::{
    Category, ChangeListener, Checklist, ChecklistEvent, ChecklistStore, EditSession, Item, Tally,
};
pub use config::ChecklistConfig;
pub use error::{ChecklistError, StorageError};
pub use kv_store::{FileStore, KeyValueStore, MemoryStore};
pub use storage::Storage;

/// MCP Server handler for the packing checklist
///
/// Wraps a `ChecklistStore` so tool calls run one at a time. All changes are
/// persisted to the key-value store the handler was built with.
pub struct ChecklistServerHandler {
    pub(crate) store: Mutex<ChecklistStore>,
}

impl ChecklistServerHandler {
    /// Create a handler backed by a TOML slot file
    ///
    /// # Arguments
    /// * `storage_path` - Path to the slot file; created on first save
    /// * `config` - Storage key and active category persistence
    ///
    /// # Example
    /// ```no_run
    /// # use packing_checklist::{ChecklistConfig, ChecklistServerHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = ChecklistServerHandler::new("checklist.toml", ChecklistConfig::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: impl AsRef<Path>, config: ChecklistConfig) -> Result<Self> {
        let path = storage_path.as_ref();
        anyhow::ensure!(
            !path.is_dir(),
            "Storage path {} is a directory",
            path.display()
        );
        tracing::info!("Using checklist storage file {}", path.display());

        let store = ChecklistStore::initialize(FileStore::new(path), config);
        Ok(Self::with_store(store))
    }

    /// Create a handler around an already initialized store
    pub fn with_store(store: ChecklistStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }
}

/// Packing checklist server for getting ready to travel home for Tết.
///
/// Items live in four fixed categories: clothes, personal, work, gifts.
/// One category is active at a time; tools that take an optional category
/// default to it. Progress is the share of done items across all categories.
///
/// Editing: begin_edit picks an item, commit_edit saves new text, cancel_edit
/// discards. Only one item can be edited at a time. submit saves the edit in
/// progress or adds a new item to the active category.
#[mcp_server]
impl McpServer for ChecklistServerHandler {
    /// List all categories with item counts and overall progress. The active category is marked with *.
    #[tool]
    async fn list_categories(&self) -> McpResult<String> {
        self.handle_list_categories().await
    }

    /// List items of a category with their IDs and done state.
    #[tool]
    async fn list_items(
        &self,
        /// Category ID (e.g., "clothes"). Defaults to the active category.
        category_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_items(category_id).await
    }

    /// Add a new item. Text is trimmed and must not be empty.
    #[tool]
    async fn add_item(
        &self,
        /// Item text (e.g., "Áo ấm")
        text: String,
        /// Category ID. Defaults to the active category.
        category_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_item(text, category_id).await
    }

    /// Mark an item done, or not done if it already was.
    #[tool]
    async fn toggle_item(
        &self,
        /// Category ID of the item
        category_id: String,
        /// Item ID from list_items
        item_id: String,
    ) -> McpResult<String> {
        self.handle_toggle_item(category_id, item_id).await
    }

    /// Delete an item. Cancels the edit if this item was being edited.
    #[tool]
    async fn remove_item(
        &self,
        /// Category ID of the item
        category_id: String,
        /// Item ID from list_items
        item_id: String,
    ) -> McpResult<String> {
        self.handle_remove_item(category_id, item_id).await
    }

    /// Start editing an item. Replaces any edit already in progress.
    #[tool]
    async fn begin_edit(
        &self,
        /// Category ID of the item
        category_id: String,
        /// Item ID from list_items
        item_id: String,
    ) -> McpResult<String> {
        self.handle_begin_edit(category_id, item_id).await
    }

    /// Replace the draft text of the edit in progress without saving it.
    #[tool]
    async fn update_draft(
        &self,
        /// Draft text
        text: String,
    ) -> McpResult<String> {
        self.handle_update_draft(text).await
    }

    /// Save new text for the item being edited and end the edit.
    #[tool]
    async fn commit_edit(
        &self,
        /// New item text, must not be empty
        text: String,
    ) -> McpResult<String> {
        self.handle_commit_edit(text).await
    }

    /// Discard the edit in progress.
    #[tool]
    async fn cancel_edit(&self) -> McpResult<String> {
        self.handle_cancel_edit().await
    }

    /// Save the edit in progress, or add a new item to the active category if none.
    #[tool]
    async fn submit(
        &self,
        /// Item text, must not be empty
        text: String,
    ) -> McpResult<String> {
        self.handle_submit(text).await
    }

    /// Switch the active category.
    #[tool]
    async fn set_active_category(
        &self,
        /// Category ID: clothes/personal/work/gifts
        category_id: String,
    ) -> McpResult<String> {
        self.handle_set_active_category(category_id).await
    }

    /// Show the percentage of done items across all categories.
    #[tool]
    async fn progress(&self) -> McpResult<String> {
        self.handle_progress().await
    }
}
