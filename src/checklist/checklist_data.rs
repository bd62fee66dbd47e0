use crate::checklist::model::{Category, DEFAULT_CATEGORIES, Item};
use std::collections::HashMap;
use uuid::Uuid;

/// Root of the checklist: an ordered sequence of categories
///
/// The category set is fixed for the lifetime of a session. Items are only
/// added or removed through the methods below so that `item_index` stays in
/// sync with `categories`.
#[derive(Debug, Clone)]
pub struct Checklist {
    /// Categories in display order
    pub(crate) categories: Vec<Category>,

    /// Item ID -> owning category ID, for O(1) global uniqueness checks
    ///
    /// Not serialized; rebuilt from `categories` on deserialization.
    pub(crate) item_index: HashMap<String, String>,
}

impl PartialEq for Checklist {
    fn eq(&self, other: &Self) -> bool {
        self.categories == other.categories
    }
}

impl Eq for Checklist {}

impl Default for Checklist {
    /// The four fixed categories with no items
    fn default() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(id, title)| Category::new(*id, *title))
            .collect();
        Self {
            categories,
            item_index: HashMap::new(),
        }
    }
}

impl Checklist {
    /// Create the default checklist
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a checklist from categories, rebuilding the item index
    ///
    /// Callers are expected to pass categories that already satisfy the
    /// uniqueness invariants; see `Checklist::validate`.
    pub fn from_categories(categories: Vec<Category>) -> Self {
        let item_index = categories
            .iter()
            .flat_map(|c| c.items.iter().map(|i| (i.id.clone(), c.id.clone())))
            .collect();
        Self {
            categories,
            item_index,
        }
    }

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find a category by ID
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub(crate) fn category_mut(&mut self, category_id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    /// Find an item by category and item ID
    pub fn item(&self, category_id: &str, item_id: &str) -> Option<&Item> {
        self.category(category_id)?.item(item_id)
    }

    pub(crate) fn item_mut(&mut self, category_id: &str, item_id: &str) -> Option<&mut Item> {
        self.category_mut(category_id)?
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
    }

    /// Check whether an item ID is used anywhere in the checklist
    pub fn contains_item_id(&self, item_id: &str) -> bool {
        self.item_index.contains_key(item_id)
    }

    /// Generate an item ID not used by any category
    pub fn generate_item_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contains_item_id(&id) {
                return id;
            }
        }
    }

    /// Append an item to the end of a category
    ///
    /// # Returns
    /// `Some(())` if the category exists, `None` otherwise
    pub(crate) fn push_item(&mut self, category_id: &str, item: Item) -> Option<()> {
        let item_id = item.id.clone();
        let category = self.category_mut(category_id)?;
        category.items.push(item);
        self.item_index.insert(item_id, category_id.to_string());
        Some(())
    }

    /// Remove an item from a category, preserving the order of the rest
    ///
    /// # Returns
    /// The removed item if found
    pub(crate) fn remove_item(&mut self, category_id: &str, item_id: &str) -> Option<Item> {
        let category = self.category_mut(category_id)?;
        let pos = category.items.iter().position(|i| i.id == item_id)?;
        let item = category.items.remove(pos);
        self.item_index.remove(item_id);
        Some(item)
    }
}
