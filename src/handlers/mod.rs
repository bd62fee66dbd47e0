//! MCP tool handlers for the checklist server
//!
//! Each handler locks the store, performs one operation and renders the
//! result as text. Grouped by what they act on.

pub mod categories;
pub mod edit;
pub mod items;
