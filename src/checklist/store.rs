use crate::checklist::checklist_data::Checklist;
use crate::checklist::model::{Category, DEFAULT_ACTIVE_CATEGORY, EditSession, Item, Tally};
use crate::config::ChecklistConfig;
use crate::error::{ChecklistError, ChecklistResult, StorageError};
use crate::kv_store::KeyValueStore;
use crate::storage::Storage;
use crate::validation::normalize_text;

/// State transition reported to subscribers after it has been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistEvent {
    ItemAdded {
        category_id: String,
        item_id: String,
    },
    ItemEdited {
        category_id: String,
        item_id: String,
    },
    ItemToggled {
        category_id: String,
        item_id: String,
        done: bool,
    },
    ItemRemoved {
        category_id: String,
        item_id: String,
    },
    EditStarted {
        category_id: String,
        item_id: String,
    },
    EditCancelled,
    ActiveCategoryChanged {
        category_id: String,
    },
}

/// Callback invoked with every `ChecklistEvent`
pub type ChangeListener = Box<dyn FnMut(&ChecklistEvent) + Send>;

/// Owner of the checklist, the active category and the edit session
///
/// Every successful add, commit, toggle and remove writes the full checklist
/// through `Storage` before returning. A failed write is logged and kept in
/// `last_save_error`; the in-memory change stands. Writes of the active
/// category slot are tracked separately in `last_selection_error`.
pub struct ChecklistStore {
    checklist: Checklist,
    active_category: String,
    edit: Option<EditSession>,
    storage: Storage,
    config: ChecklistConfig,
    last_save_error: Option<StorageError>,
    last_selection_error: Option<StorageError>,
    listeners: Vec<ChangeListener>,
}

impl ChecklistStore {
    /// Load the checklist from `store`, or start from the default categories
    ///
    /// Never fails: a missing or invalid slot silently yields the defaults.
    pub fn initialize(store: impl KeyValueStore + 'static, config: ChecklistConfig) -> Self {
        let storage = Storage::new(store, config.storage_key.clone());

        let checklist = match storage.load() {
            Some(checklist) => {
                tracing::debug!(
                    "Loaded checklist with {} item(s) from '{}'",
                    checklist.item_count(),
                    storage.key()
                );
                checklist
            }
            None => {
                tracing::debug!("Starting from the default checklist");
                Checklist::new()
            }
        };

        let restored = if config.persist_active_category {
            storage
                .load_active_category()
                .filter(|id| checklist.category(id).is_some())
        } else {
            None
        };
        let active_category = restored.unwrap_or_else(|| Self::fallback_category(&checklist));

        Self {
            checklist,
            active_category,
            edit: None,
            storage,
            config,
            last_save_error: None,
            last_selection_error: None,
            listeners: Vec::new(),
        }
    }

    fn fallback_category(checklist: &Checklist) -> String {
        if checklist.category(DEFAULT_ACTIVE_CATEGORY).is_some() {
            DEFAULT_ACTIVE_CATEGORY.to_string()
        } else {
            // Empty when the loaded checklist has no categories
            checklist
                .categories()
                .first()
                .map(|c| c.id.clone())
                .unwrap_or_default()
        }
    }

    /// Register a callback for state transitions
    pub fn subscribe(&mut self, listener: impl FnMut(&ChecklistEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: ChecklistEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    fn persist(&mut self) {
        match self.storage.save(&self.checklist) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                tracing::warn!("Failed to save checklist to '{}': {}", self.storage.key(), e);
                self.last_save_error = Some(e);
            }
        }
    }

    /// Error of the most recent checklist save, cleared by the next successful one
    pub fn last_save_error(&self) -> Option<&StorageError> {
        self.last_save_error.as_ref()
    }

    /// Error of the most recent active category save
    pub fn last_selection_error(&self) -> Option<&StorageError> {
        self.last_selection_error.as_ref()
    }

    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        self.checklist.categories()
    }

    pub fn active_category_id(&self) -> &str {
        &self.active_category
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.checklist.category(&self.active_category)
    }

    /// Items of the active category in display order
    pub fn active_items(&self) -> &[Item] {
        self.active_category()
            .map(|c| c.items.as_slice())
            .unwrap_or_default()
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Done/total counts across all categories
    pub fn tally(&self) -> Tally {
        self.checklist.tally()
    }

    pub fn category_tally(&self, category_id: &str) -> ChecklistResult<Tally> {
        self.checklist
            .category_tally(category_id)
            .ok_or_else(|| ChecklistError::CategoryNotFound(category_id.to_string()))
    }

    /// Completion percentage over all categories, recomputed on each call
    pub fn progress(&self) -> u8 {
        self.checklist.progress()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Append a new item to the end of a category
    pub fn add_item(&mut self, category_id: &str, text: &str) -> ChecklistResult<Item> {
        let text = normalize_text(text)?;
        if self.checklist.category(category_id).is_none() {
            return Err(ChecklistError::CategoryNotFound(category_id.to_string()));
        }

        let item = Item::new(self.checklist.generate_item_id(), text);
        self.checklist.push_item(category_id, item.clone());
        tracing::debug!("Added item {} to '{}'", item.id, category_id);

        self.persist();
        self.notify(ChecklistEvent::ItemAdded {
            category_id: category_id.to_string(),
            item_id: item.id.clone(),
        });
        Ok(item)
    }

    /// Start editing an item, replacing any edit already in progress
    pub fn begin_edit(&mut self, category_id: &str, item_id: &str) -> ChecklistResult<EditSession> {
        let item = self
            .checklist
            .item(category_id, item_id)
            .ok_or_else(|| Self::item_not_found(category_id, item_id))?;

        let session = EditSession {
            category_id: category_id.to_string(),
            item_id: item_id.to_string(),
            draft_text: item.text.clone(),
        };
        self.edit = Some(session.clone());

        self.notify(ChecklistEvent::EditStarted {
            category_id: session.category_id.clone(),
            item_id: session.item_id.clone(),
        });
        Ok(session)
    }

    /// Mirror the input buffer into the active edit session
    pub fn update_draft(&mut self, text: &str) -> ChecklistResult<EditSession> {
        let session = self.edit.as_mut().ok_or(ChecklistError::NoActiveEdit)?;
        session.draft_text = text.to_string();
        Ok(session.clone())
    }

    /// Replace the edited item's text and end the edit session
    ///
    /// Empty text is rejected and leaves the session active.
    pub fn commit_edit(&mut self, text: &str) -> ChecklistResult<Item> {
        let session = self.edit.as_ref().ok_or(ChecklistError::NoActiveEdit)?;
        let text = normalize_text(text)?;
        let (category_id, item_id) = (session.category_id.clone(), session.item_id.clone());

        let Some(item) = self.checklist.item_mut(&category_id, &item_id) else {
            self.edit = None;
            return Err(Self::item_not_found(&category_id, &item_id));
        };
        item.text = text;
        let item = item.clone();
        self.edit = None;
        tracing::debug!("Edited item {} in '{}'", item_id, category_id);

        self.persist();
        self.notify(ChecklistEvent::ItemEdited {
            category_id,
            item_id,
        });
        Ok(item)
    }

    /// End the edit session without changing any item
    pub fn cancel_edit(&mut self) {
        if self.edit.take().is_some() {
            self.notify(ChecklistEvent::EditCancelled);
        }
    }

    /// Commit the edit in progress, or add to the active category if none
    pub fn submit(&mut self, text: &str) -> ChecklistResult<Item> {
        if self.edit.is_some() {
            self.commit_edit(text)
        } else {
            let category_id = self.active_category.clone();
            self.add_item(&category_id, text)
        }
    }

    /// Flip an item's completion flag
    pub fn toggle_item(&mut self, category_id: &str, item_id: &str) -> ChecklistResult<Item> {
        let item = self
            .checklist
            .item_mut(category_id, item_id)
            .ok_or_else(|| Self::item_not_found(category_id, item_id))?;
        item.done = !item.done;
        let item = item.clone();
        tracing::debug!("Toggled item {} to done={}", item.id, item.done);

        self.persist();
        self.notify(ChecklistEvent::ItemToggled {
            category_id: category_id.to_string(),
            item_id: item_id.to_string(),
            done: item.done,
        });
        Ok(item)
    }

    /// Delete an item, cancelling the edit session if it referenced it
    pub fn remove_item(&mut self, category_id: &str, item_id: &str) -> ChecklistResult<()> {
        self.checklist
            .remove_item(category_id, item_id)
            .ok_or_else(|| Self::item_not_found(category_id, item_id))?;
        tracing::debug!("Removed item {} from '{}'", item_id, category_id);

        if self
            .edit
            .as_ref()
            .is_some_and(|s| s.category_id == category_id && s.item_id == item_id)
        {
            self.edit = None;
            self.notify(ChecklistEvent::EditCancelled);
        }

        self.persist();
        self.notify(ChecklistEvent::ItemRemoved {
            category_id: category_id.to_string(),
            item_id: item_id.to_string(),
        });
        Ok(())
    }

    /// Select the category shown by the presentation layer
    pub fn set_active_category(&mut self, category_id: &str) -> ChecklistResult<()> {
        if self.checklist.category(category_id).is_none() {
            return Err(ChecklistError::CategoryNotFound(category_id.to_string()));
        }
        self.active_category = category_id.to_string();

        if self.config.persist_active_category {
            match self.storage.save_active_category(category_id) {
                Ok(()) => self.last_selection_error = None,
                Err(e) => {
                    tracing::warn!("Failed to save active category: {}", e);
                    self.last_selection_error = Some(e);
                }
            }
        }

        self.notify(ChecklistEvent::ActiveCategoryChanged {
            category_id: category_id.to_string(),
        });
        Ok(())
    }

    fn item_not_found(category_id: &str, item_id: &str) -> ChecklistError {
        ChecklistError::ItemNotFound {
            category_id: category_id.to_string(),
            item_id: item_id.to_string(),
        }
    }
}
