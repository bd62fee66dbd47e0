//! Checklist store scenarios against a file-backed slot
mod common;

use packing_checklist::*;

fn texts(store: &ChecklistStore, category_id: &str) -> Vec<String> {
    store
        .checklist()
        .category(category_id)
        .unwrap()
        .items
        .iter()
        .map(|i| i.text.clone())
        .collect()
}

/// Progress recomputed from scratch over every item
fn expected_progress(store: &ChecklistStore) -> u8 {
    let items: Vec<&Item> = store
        .categories()
        .iter()
        .flat_map(|c| c.items.iter())
        .collect();
    if items.is_empty() {
        return 0;
    }
    let done = items.iter().filter(|i| i.done).count() as f64;
    (100.0 * done / items.len() as f64).round() as u8
}

#[test]
fn test_empty_default_checklist() {
    let (store, _temp_file) = common::get_file_store(ChecklistConfig::default());
    assert_eq!(store.categories().len(), 4);
    assert_eq!(store.checklist().item_count(), 0);
    assert_eq!(store.progress(), 0);
}

#[test]
fn test_two_items_one_done_is_fifty_percent() {
    let (mut store, _temp_file) = common::get_file_store(ChecklistConfig::default());
    let coat = store.add_item("clothes", "Áo ấm").unwrap();
    store.add_item("clothes", "Khăn").unwrap();
    store.toggle_item("clothes", &coat.id).unwrap();
    assert_eq!(store.progress(), 50);
}

#[test]
fn test_progress_matches_recount_after_mixed_operations() {
    let (mut store, _temp_file) = common::get_file_store(ChecklistConfig::default());
    let categories = ["clothes", "personal", "work", "gifts"];
    let mut ids: Vec<(String, String)> = Vec::new();

    for step in 0..40usize {
        let category = categories[step % categories.len()];
        match step % 5 {
            0 | 1 | 3 => {
                let item = store.add_item(category, &format!("Món {}", step)).unwrap();
                ids.push((category.to_string(), item.id));
            }
            2 => {
                let (cat, id) = &ids[step % ids.len()];
                store.toggle_item(cat, id).unwrap();
            }
            _ => {
                let (cat, id) = ids.remove(step % ids.len());
                store.remove_item(&cat, &id).unwrap();
            }
        }
        assert_eq!(store.progress(), expected_progress(&store));
    }
}

#[test]
fn test_blank_text_leaves_persisted_state_unchanged() {
    let (mut store, temp_file) = common::get_file_store(ChecklistConfig::default());
    store.add_item("personal", "Bàn chải").unwrap();
    let before = common::stored_json(&temp_file);

    assert!(store.add_item("personal", "").is_err());
    assert!(store.add_item("personal", "   ").is_err());

    assert_eq!(texts(&store, "personal"), vec!["Bàn chải"]);
    assert_eq!(common::stored_json(&temp_file), before);
}

#[test]
fn test_single_edit_session() {
    let (mut store, _temp_file) = common::get_file_store(ChecklistConfig::default());
    let a = store.add_item("work", "Laptop").unwrap();
    let b = store.add_item("work", "Sạc").unwrap();

    store.begin_edit("work", &a.id).unwrap();
    store.begin_edit("work", &b.id).unwrap();
    let session = store.edit_session().unwrap();
    assert_eq!(session.item_id, b.id);
    assert_eq!(session.draft_text, "Sạc");

    store.commit_edit("Sạc dự phòng").unwrap();
    assert_eq!(texts(&store, "work"), vec!["Laptop", "Sạc dự phòng"]);
}

#[test]
fn test_cancel_edit_leaves_text() {
    let (mut store, _temp_file) = common::get_file_store(ChecklistConfig::default());
    let item = store.add_item("clothes", "Áo ấm").unwrap();

    store.begin_edit("clothes", &item.id).unwrap();
    store.cancel_edit();

    assert!(store.edit_session().is_none());
    assert_eq!(texts(&store, "clothes"), vec!["Áo ấm"]);
}

#[test]
fn test_removing_edited_item_ends_session() {
    let (mut store, _temp_file) = common::get_file_store(ChecklistConfig::default());
    let item = store.add_item("clothes", "Áo ấm").unwrap();
    store.begin_edit("clothes", &item.id).unwrap();

    store.remove_item("clothes", &item.id).unwrap();

    assert!(store.edit_session().is_none());
    assert_eq!(
        store.commit_edit("Áo khoác"),
        Err(ChecklistError::NoActiveEdit)
    );
}

#[test]
fn test_state_survives_reopen() {
    let (mut store, temp_file) = common::get_file_store(ChecklistConfig::default());
    let coat = store.add_item("clothes", "Áo ấm").unwrap();
    store.add_item("gifts", "Bánh chưng").unwrap();
    store.toggle_item("clothes", &coat.id).unwrap();
    let snapshot = store.checklist().clone();
    drop(store);

    let reopened = common::reopen(&temp_file, ChecklistConfig::default());
    assert_eq!(reopened.checklist(), &snapshot);
    assert_eq!(reopened.progress(), 50);
    // The edit session and selection are transient by default
    assert!(reopened.edit_session().is_none());
    assert_eq!(reopened.active_category_id(), "clothes");
}

#[test]
fn test_active_category_survives_reopen_when_configured() {
    let config = ChecklistConfig {
        persist_active_category: true,
        ..ChecklistConfig::default()
    };
    let (mut store, temp_file) = common::get_file_store(config.clone());
    store.set_active_category("work").unwrap();
    drop(store);

    assert_eq!(common::reopen(&temp_file, config).active_category_id(), "work");
}

#[test]
fn test_item_ids_unique_across_categories() {
    let (mut store, _temp_file) = common::get_file_store(ChecklistConfig::default());
    let mut seen = std::collections::HashSet::new();
    for category in ["clothes", "personal", "work", "gifts"] {
        for n in 0..5 {
            let item = store.add_item(category, &format!("{} {}", category, n)).unwrap();
            assert!(seen.insert(item.id));
        }
    }
}
