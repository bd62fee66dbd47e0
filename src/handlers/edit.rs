//! Edit session handlers

use crate::ChecklistServerHandler;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Starts editing an item, replacing any edit already in progress.
    pub async fn handle_begin_edit(
        &self,
        category_id: String,
        item_id: String,
    ) -> McpResult<String> {
        let mut store = self.store.lock().unwrap();
        match store.begin_edit(&category_id, &item_id) {
            Ok(session) => Ok(formatting::format_edit_session(&session)),
            Err(e) => {
                drop(store);
                bail_public!(_, "{}", e);
            }
        }
    }

    /// Replaces the draft text of the edit in progress.
    pub async fn handle_update_draft(&self, text: String) -> McpResult<String> {
        let mut store = self.store.lock().unwrap();
        match store.update_draft(&text) {
            Ok(session) => Ok(formatting::format_edit_session(&session)),
            Err(e) => {
                drop(store);
                bail_public!(_, "{}", e);
            }
        }
    }

    /// Saves new text for the edited item and ends the edit.
    pub async fn handle_commit_edit(&self, text: String) -> McpResult<String> {
        let mut store = self.store.lock().unwrap();

        let item = match store.commit_edit(&text) {
            Ok(item) => item,
            Err(e) => {
                drop(store);
                bail_public!(_, "{}", e);
            }
        };

        Ok(formatting::with_save_warning(
            format!("Item {} updated: {}", item.id, item.text),
            store.last_save_error(),
        ))
    }

    /// Ends the edit without changing anything.
    pub async fn handle_cancel_edit(&self) -> McpResult<String> {
        let mut store = self.store.lock().unwrap();
        if store.edit_session().is_none() {
            return Ok("No edit in progress".to_string());
        }
        store.cancel_edit();
        Ok("Edit cancelled".to_string())
    }
}
