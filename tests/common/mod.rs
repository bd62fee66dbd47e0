//! Common test utilities for integration tests
#![allow(dead_code)]

use packing_checklist::{
    ChecklistConfig, ChecklistServerHandler, ChecklistStore, FileStore, KeyValueStore,
};
use tempfile::NamedTempFile;

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (ChecklistServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = ChecklistServerHandler::new(temp_file.path(), ChecklistConfig::default()).unwrap();
    (handler, temp_file)
}

/// Create a store backed by a temporary slot file
pub fn get_file_store(config: ChecklistConfig) -> (ChecklistStore, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let store = ChecklistStore::initialize(FileStore::new(temp_file.path()), config);
    (store, temp_file)
}

/// Reopen a store on an existing slot file
pub fn reopen(temp_file: &NamedTempFile, config: ChecklistConfig) -> ChecklistStore {
    ChecklistStore::initialize(FileStore::new(temp_file.path()), config)
}

/// Raw JSON stored under the default checklist key
pub fn stored_json(temp_file: &NamedTempFile) -> Option<String> {
    FileStore::new(temp_file.path())
        .get(&ChecklistConfig::default().storage_key)
        .unwrap()
}

/// Extract item ID from an "Item created with ID: <id> (category: ...)" response
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}
