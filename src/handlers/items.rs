//! Item handlers: add, submit, toggle and remove

use crate::ChecklistServerHandler;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Adds an item to the given category, or to the active one when omitted.
    pub async fn handle_add_item(
        &self,
        text: String,
        category_id: Option<String>,
    ) -> McpResult<String> {
        let mut store = self.store.lock().unwrap();
        let category_id = category_id.unwrap_or_else(|| store.active_category_id().to_string());

        let item = match store.add_item(&category_id, &text) {
            Ok(item) => item,
            Err(e) => {
                drop(store);
                bail_public!(_, "{}", e);
            }
        };

        Ok(formatting::with_save_warning(
            format!("Item created with ID: {} (category: {})", item.id, category_id),
            store.last_save_error(),
        ))
    }

    /// Saves the edit in progress, or adds to the active category if nothing is being edited.
    pub async fn handle_submit(&self, text: String) -> McpResult<String> {
        let mut store = self.store.lock().unwrap();
        let editing = store.edit_session().is_some();

        let item = match store.submit(&text) {
            Ok(item) => item,
            Err(e) => {
                drop(store);
                bail_public!(_, "{}", e);
            }
        };

        let message = if editing {
            format!("Item {} updated: {}", item.id, item.text)
        } else {
            format!(
                "Item created with ID: {} (category: {})",
                item.id,
                store.active_category_id()
            )
        };
        Ok(formatting::with_save_warning(message, store.last_save_error()))
    }

    /// Flips the done flag of an item.
    pub async fn handle_toggle_item(
        &self,
        category_id: String,
        item_id: String,
    ) -> McpResult<String> {
        let mut store = self.store.lock().unwrap();

        let item = match store.toggle_item(&category_id, &item_id) {
            Ok(item) => item,
            Err(e) => {
                drop(store);
                bail_public!(_, "{}", e);
            }
        };

        let state = if item.done { "done" } else { "not done" };
        Ok(formatting::with_save_warning(
            format!(
                "Item {} marked {}. {}",
                item.id,
                state,
                formatting::format_progress(store.tally())
            ),
            store.last_save_error(),
        ))
    }

    /// Deletes an item; an edit of that item is cancelled.
    pub async fn handle_remove_item(
        &self,
        category_id: String,
        item_id: String,
    ) -> McpResult<String> {
        let mut store = self.store.lock().unwrap();

        if let Err(e) = store.remove_item(&category_id, &item_id) {
            drop(store);
            bail_public!(_, "{}", e);
        }

        Ok(formatting::with_save_warning(
            format!("Item {} removed from '{}'", item_id, category_id),
            store.last_save_error(),
        ))
    }
}
