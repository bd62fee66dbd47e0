//! Derived views over a Checklist
//!
//! Progress and counts are computed from the items on every call and never
//! cached, so they cannot drift from the source data.

use super::checklist_data::Checklist;
use super::model::{Category, Tally};
use std::collections::HashSet;

impl Checklist {
    /// Done/total counts across all categories
    pub fn tally(&self) -> Tally {
        self.categories
            .iter()
            .fold(Tally::default(), |acc, c| Tally {
                done: acc.done + c.done_count(),
                total: acc.total + c.items.len(),
            })
    }

    /// Done/total counts for one category
    pub fn category_tally(&self, category_id: &str) -> Option<Tally> {
        self.category(category_id).map(|c| Tally {
            done: c.done_count(),
            total: c.items.len(),
        })
    }

    /// Overall completion percentage in [0, 100]
    pub fn progress(&self) -> u8 {
        self.tally().percent()
    }

    /// Total number of items across all categories
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Check the data model invariants on a set of categories
    ///
    /// An empty category list is valid. Item text must already be trimmed.
    ///
    /// # Returns
    /// `Err` with a description of the first violation found
    pub fn validate(categories: &[Category]) -> Result<(), String> {
        let mut category_ids = HashSet::new();
        let mut item_ids = HashSet::new();
        for category in categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(format!("duplicate category id '{}'", category.id));
            }
            for item in &category.items {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(format!("duplicate item id '{}'", item.id));
                }
                if item.text.trim().is_empty() {
                    return Err(format!("item '{}' has empty text", item.id));
                }
                if item.text.trim() != item.text {
                    return Err(format!("item '{}' has untrimmed text", item.id));
                }
            }
        }
        Ok(())
    }
}
