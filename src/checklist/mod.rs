//! Checklist domain models and state engine
//!
//! - `model`: categories, items, edit session and tallies
//! - `checklist_data`: the root Checklist and its item index
//! - `queries`: progress and invariant checks for Checklist
//! - `serde_impl`: serialization to and from the stored JSON shape
//! - `store`: the ChecklistStore owning all state transitions

mod checklist_data;
mod model;
mod queries;
mod serde_impl;
mod store;

pub use checklist_data::Checklist;
pub use model::{
    Category, DEFAULT_ACTIVE_CATEGORY, DEFAULT_CATEGORIES, EditSession, Item, Tally,
};
pub use store::{ChangeListener, ChecklistEvent, ChecklistStore};
