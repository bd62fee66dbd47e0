//! Plain-text rendering of checklist state for MCP responses

use crate::checklist::{Category, ChecklistStore, EditSession, Item, Tally};
use crate::error::StorageError;

/// Format one item as a checkbox line
///
/// # Arguments
/// * `item` - Item to render
/// * `editing` - Whether this item is the one being edited
pub fn format_item(item: &Item, editing: bool) -> String {
    let check = if item.done { "x" } else { " " };
    let marker = if editing { " (editing)" } else { "" };
    format!("- [{}] {} (id: {}){}", check, item.text, item.id, marker)
}

/// Format the category list, marking the active one
pub fn format_categories(store: &ChecklistStore) -> String {
    let mut result = format!("{} categories:\n", store.categories().len());
    for category in store.categories() {
        let active = category.id == store.active_category_id();
        result.push_str(&format!(
            "{} [{}] {} ({}/{} done)\n",
            if active { "*" } else { "-" },
            category.id,
            category.title,
            category.done_count(),
            category.items.len()
        ));
    }
    result
}

/// Format the items of a category in display order
pub fn format_category_items(category: &Category, edit: Option<&EditSession>) -> String {
    if category.items.is_empty() {
        return format!("{}: no items yet", category.title);
    }

    let mut result = format!("{} ({} item(s)):\n", category.title, category.items.len());
    for item in &category.items {
        let editing = edit
            .is_some_and(|s| s.category_id == category.id && s.item_id == item.id);
        result.push_str(&format_item(item, editing));
        result.push('\n');
    }
    result
}

/// Format overall progress, e.g. "Progress: 50% (1/2 done)"
pub fn format_progress(tally: Tally) -> String {
    format!(
        "Progress: {}% ({}/{} done)",
        tally.percent(),
        tally.done,
        tally.total
    )
}

/// Format an edit session for display
pub fn format_edit_session(session: &EditSession) -> String {
    format!(
        "Editing item {} in '{}'. Draft: {}",
        session.item_id, session.category_id, session.draft_text
    )
}

/// Append a warning line when the last save failed
pub fn with_save_warning(message: String, save_error: Option<&StorageError>) -> String {
    match save_error {
        Some(e) => format!("{}\nWarning: change not saved to disk: {}", message, e),
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_item() {
        let mut item = Item::new("a1", "Áo ấm");
        assert_eq!(format_item(&item, false), "- [ ] Áo ấm (id: a1)");
        item.done = true;
        assert_eq!(format_item(&item, true), "- [x] Áo ấm (id: a1) (editing)");
    }

    #[test]
    fn test_format_empty_category() {
        let category = Category::new("gifts", "🎁 Quà Tết");
        assert_eq!(format_category_items(&category, None), "🎁 Quà Tết: no items yet");
    }

    #[test]
    fn test_format_category_marks_edited_item() {
        let mut category = Category::new("work", "Work");
        category.items.push(Item::new("1", "Laptop"));
        category.items.push(Item::new("2", "Sạc"));
        let session = EditSession {
            category_id: "work".to_string(),
            item_id: "2".to_string(),
            draft_text: "Sạc".to_string(),
        };

        let output = format_category_items(&category, Some(&session));
        assert!(output.starts_with("Work (2 item(s)):"));
        assert!(output.contains("- [ ] Laptop (id: 1)\n"));
        assert!(output.contains("- [ ] Sạc (id: 2) (editing)\n"));
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(
            format_progress(Tally { done: 1, total: 2 }),
            "Progress: 50% (1/2 done)"
        );
        assert_eq!(
            format_progress(Tally::default()),
            "Progress: 0% (0/0 done)"
        );
    }

    #[test]
    fn test_with_save_warning() {
        assert_eq!(with_save_warning("ok".to_string(), None), "ok");
        let err = StorageError::QuotaExceeded {
            key: "k".to_string(),
            needed: 2,
            limit: 1,
        };
        let output = with_save_warning("ok".to_string(), Some(&err));
        assert!(output.starts_with("ok\nWarning: change not saved to disk:"));
    }
}
