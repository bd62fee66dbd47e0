use serde::{Deserialize, Serialize};

/// Default active category when nothing else is selected
pub const DEFAULT_ACTIVE_CATEGORY: &str = "clothes";

/// Fixed category set used on cold start: (id, title)
pub const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("clothes", "👕 Quần áo"),
    ("personal", "🧴 Đồ cá nhân"),
    ("work", "💻 Đồ công việc"),
    ("gifts", "🎁 Quà Tết"),
];

/// A single checklist entry
///
/// Serialized as `{"id", "text", "done"}`. All three fields are required when
/// loading; a missing field makes the stored checklist invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Generated at creation, never changed afterwards
    pub id: String,
    /// Trimmed, non-empty description
    pub text: String,
    /// Completion flag
    pub done: bool,
}

impl Item {
    /// Create a not-yet-done item
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            done: false,
        }
    }
}

/// A named, fixed grouping of items
///
/// `items` keeps insertion order, which is also the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier (e.g., "clothes", "gifts")
    pub id: String,
    /// Display label, not interpreted by the engine
    pub title: String,
    /// Items in insertion order
    pub items: Vec<Item>,
}

impl Category {
    /// Create an empty category
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Find an item by ID
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Number of items marked done
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|i| i.done).count()
    }
}

/// The single item currently being renamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub category_id: String,
    pub item_id: String,
    /// In-progress replacement text, mirrors the input buffer
    pub draft_text: String,
}

/// Done/total counts over a set of items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub done: usize,
    pub total: usize,
}

impl Tally {
    /// Completion percentage rounded half up, 0 when there are no items
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        // round(100 * done / total) in integer arithmetic
        ((200 * self.done + self.total) / (2 * self.total)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_not_done() {
        let item = Item::new("a", "Áo ấm");
        assert_eq!(item.id, "a");
        assert_eq!(item.text, "Áo ấm");
        assert!(!item.done);
    }

    #[test]
    fn test_tally_percent_rounding() {
        assert_eq!(Tally { done: 0, total: 0 }.percent(), 0);
        assert_eq!(Tally { done: 0, total: 3 }.percent(), 0);
        assert_eq!(Tally { done: 1, total: 2 }.percent(), 50);
        assert_eq!(Tally { done: 1, total: 3 }.percent(), 33);
        assert_eq!(Tally { done: 2, total: 3 }.percent(), 67);
        // 12.5 rounds up like Math.round
        assert_eq!(Tally { done: 1, total: 8 }.percent(), 13);
        assert_eq!(Tally { done: 7, total: 7 }.percent(), 100);
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item::new("id-1", "Khăn");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"id-1","text":"Khăn","done":false}"#);
    }

    #[test]
    fn test_item_requires_done_field() {
        let result: Result<Item, _> = serde_json::from_str(r#"{"id":"a","text":"b"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_category_done_count() {
        let mut category = Category::new("work", "💻 Đồ công việc");
        category.items.push(Item::new("1", "Laptop"));
        category.items.push(Item {
            id: "2".to_string(),
            text: "Sạc".to_string(),
            done: true,
        });
        assert_eq!(category.done_count(), 1);
        assert_eq!(category.item("2").map(|i| i.text.as_str()), Some("Sạc"));
        assert!(category.item("3").is_none());
    }
}
