//! crates/word_of_the_day_core/src/filter.rs
//!
//! The on-page category override and the client-side identifiers that live
//! next to it in durable client storage.

use std::str::FromStr;
use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::domain::{Category, VisitorId};
use crate::ports::{KeyValueStore, PortResult};

pub const CATEGORY_FILTER_KEY: &str = "wotd.category_filter";
pub const VISITOR_ID_KEY: &str = "wotd.visitor_id";
pub const ACTIVITY_SESSION_KEY: &str = "wotd.activity_session_id";

/// The single category chosen interactively, or `None` for "All".
///
/// Every change is written through to the store; clearing removes the key.
pub struct CategoryFilterState {
    store: Arc<dyn KeyValueStore>,
    current: Option<Category>,
}

impl CategoryFilterState {
    /// Reads the stored override. A missing, unreadable or unrecognised value
    /// starts the state with no override.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let current = match store.get(CATEGORY_FILTER_KEY) {
            Ok(Some(raw)) => match Category::from_str(&raw) {
                Ok(category) => Some(category),
                Err(e) => {
                    warn!("Ignoring stored category filter: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read category filter, defaulting to all: {}", e);
                None
            }
        };
        Self { store, current }
    }

    pub fn get(&self) -> Option<Category> {
        self.current
    }

    pub fn set(&mut self, category: Option<Category>) -> PortResult<()> {
        match category {
            Some(c) => self.store.set(CATEGORY_FILTER_KEY, c.as_str())?,
            None => self.store.remove(CATEGORY_FILTER_KEY)?,
        }
        self.current = category;
        Ok(())
    }

    /// The categories selection should draw from.
    ///
    /// The override wins; otherwise a signed-in user's saved list applies;
    /// otherwise `None` means every category.
    pub fn effective_categories(&self, saved: Option<&[Category]>) -> Option<Vec<Category>> {
        effective_categories(self.current, saved)
    }
}

/// Precedence between an interactive override and a saved category list.
pub fn effective_categories(
    override_category: Option<Category>,
    saved: Option<&[Category]>,
) -> Option<Vec<Category>> {
    match (override_category, saved) {
        (Some(c), _) => Some(vec![c]),
        (None, Some(saved)) if !saved.is_empty() => Some(saved.to_vec()),
        _ => None,
    }
}

/// Returns the stored visitor id, minting and storing one on first use.
pub fn load_or_mint_visitor_id(store: &dyn KeyValueStore) -> PortResult<VisitorId> {
    if let Some(raw) = store.get(VISITOR_ID_KEY)? {
        if !raw.trim().is_empty() {
            return Ok(VisitorId::new(raw));
        }
    }
    let visitor = VisitorId::generate();
    store.set(VISITOR_ID_KEY, visitor.as_str())?;
    Ok(visitor)
}

/// Same as [`load_or_mint_visitor_id`], for the activity trail's per-tab session id.
pub fn load_or_mint_activity_session(store: &dyn KeyValueStore) -> PortResult<String> {
    if let Some(raw) = store.get(ACTIVITY_SESSION_KEY)? {
        return Ok(raw);
    }
    let session = Uuid::new_v4().to_string();
    store.set(ACTIVITY_SESSION_KEY, &session)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryKeyValueStore;

    #[test]
    fn starts_unfiltered_without_stored_value() {
        let store = Arc::new(MemoryKeyValueStore::default());
        let state = CategoryFilterState::load(store);
        assert_eq!(state.get(), None);
    }

    #[test]
    fn set_persists_and_clear_removes_key() {
        let store = Arc::new(MemoryKeyValueStore::default());
        let mut state = CategoryFilterState::load(store.clone());

        state.set(Some(Category::Creative)).unwrap();
        assert_eq!(store.get(CATEGORY_FILTER_KEY).unwrap().as_deref(), Some("creative"));

        // Survives a reload.
        let reloaded = CategoryFilterState::load(store.clone());
        assert_eq!(reloaded.get(), Some(Category::Creative));

        state.set(None).unwrap();
        assert_eq!(store.get(CATEGORY_FILTER_KEY).unwrap(), None);
        assert_eq!(CategoryFilterState::load(store).get(), None);
    }

    #[test]
    fn garbage_in_storage_is_ignored() {
        let store = Arc::new(MemoryKeyValueStore::default());
        store.set(CATEGORY_FILTER_KEY, "poetry").unwrap();
        assert_eq!(CategoryFilterState::load(store).get(), None);
    }

    #[test]
    fn override_beats_saved_preferences() {
        let store = Arc::new(MemoryKeyValueStore::default());
        let mut state = CategoryFilterState::load(store);
        let saved = [Category::Business, Category::Academic];

        assert_eq!(state.effective_categories(None), None);
        assert_eq!(state.effective_categories(Some(&saved[..])), Some(saved.to_vec()));
        assert_eq!(state.effective_categories(Some(&[][..])), None);

        state.set(Some(Category::Mindfulness)).unwrap();
        assert_eq!(
            state.effective_categories(Some(&saved[..])),
            Some(vec![Category::Mindfulness])
        );
    }

    #[test]
    fn visitor_id_is_stable_per_store() {
        let store = MemoryKeyValueStore::default();
        let first = load_or_mint_visitor_id(&store).unwrap();
        let second = load_or_mint_visitor_id(&store).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.get(VISITOR_ID_KEY).unwrap().as_deref(), Some(first.as_str()));
    }
}
