//! Serialization and deserialization implementations for Checklist
//!
//! The stored shape is a bare JSON array of categories. Deserialization
//! checks the data model invariants and rebuilds the item index, so a
//! successfully deserialized Checklist is always safe to hand to the store.

use super::checklist_data::Checklist;
use super::model::Category;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Checklist {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.categories.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Checklist {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let categories = Vec::<Category>::deserialize(deserializer)?;
        Checklist::validate(&categories).map_err(D::Error::custom)?;
        Ok(Checklist::from_categories(categories))
    }
}
