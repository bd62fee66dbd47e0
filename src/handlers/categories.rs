//! Category and progress handlers

use crate::ChecklistServerHandler;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Lists categories with per-category counts and overall progress.
    pub async fn handle_list_categories(&self) -> McpResult<String> {
        let store = self.store.lock().unwrap();
        let mut result = formatting::format_categories(&store);
        result.push_str(&formatting::format_progress(store.tally()));
        Ok(result)
    }

    /// Lists the items of a category, the active one when omitted.
    pub async fn handle_list_items(&self, category_id: Option<String>) -> McpResult<String> {
        let store = self.store.lock().unwrap();
        let category_id = category_id.unwrap_or_else(|| store.active_category_id().to_string());

        let Some(category) = store.checklist().category(&category_id) else {
            bail_public!(_, "Category '{}' not found", category_id);
        };

        Ok(formatting::format_category_items(
            category,
            store.edit_session(),
        ))
    }

    /// Switches the active category.
    pub async fn handle_set_active_category(&self, category_id: String) -> McpResult<String> {
        let mut store = self.store.lock().unwrap();

        if let Err(e) = store.set_active_category(&category_id) {
            drop(store);
            bail_public!(_, "{}", e);
        }

        let title = store
            .active_category()
            .map(|c| c.title.clone())
            .unwrap_or_default();
        let mut message = format!("Active category: [{}] {}", store.active_category_id(), title);
        if store.config().persist_active_category {
            message = formatting::with_save_warning(message, store.last_selection_error());
        }
        // An earlier checklist write may still be unsaved
        Ok(formatting::with_save_warning(message, store.last_save_error()))
    }

    /// Reports completion across all categories.
    pub async fn handle_progress(&self) -> McpResult<String> {
        let store = self.store.lock().unwrap();
        Ok(formatting::format_progress(store.tally()))
    }
}
