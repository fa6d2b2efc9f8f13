//! crates/word_of_the_day_core/src/preferences.rs
//!
//! Saved per-user category preferences.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{Category, UserPreferences};
use crate::ports::{PortError, PortResult, PreferencesStore};

#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("at least one category must stay selected")]
    EmptySelection,
    #[error(transparent)]
    Port(#[from] PortError),
}

/// Adds `category` if missing, removes it if present, but never removes the
/// last remaining one. Returns whether the list changed.
pub fn toggle_category(selected: &mut Vec<Category>, category: Category) -> bool {
    match selected.iter().position(|c| *c == category) {
        Some(_) if selected.len() == 1 => false,
        Some(i) => {
            selected.remove(i);
            true
        }
        None => {
            selected.push(category);
            true
        }
    }
}

pub struct PreferencesService {
    store: Arc<dyn PreferencesStore>,
}

impl PreferencesService {
    pub fn new(store: Arc<dyn PreferencesStore>) -> Self {
        Self { store }
    }

    /// The user's saved preferences, or the defaults when nothing usable is stored.
    pub async fn load(&self, user_id: Uuid) -> PortResult<UserPreferences> {
        let prefs = match self.store.get_preferences(user_id).await? {
            Some(mut prefs) => {
                if prefs.preferred_categories.is_empty() {
                    prefs.preferred_categories = UserPreferences::default().preferred_categories;
                }
                prefs
            }
            None => UserPreferences::default(),
        };
        Ok(prefs)
    }

    pub async fn save(
        &self,
        user_id: Uuid,
        mut prefs: UserPreferences,
    ) -> Result<UserPreferences, PreferencesError> {
        if prefs.preferred_categories.is_empty() {
            return Err(PreferencesError::EmptySelection);
        }
        prefs.preferred_categories.sort();
        prefs.preferred_categories.dedup();
        self.store.save_preferences(user_id, &prefs).await?;
        info!(%user_id, categories = prefs.preferred_categories.len(), "Preferences saved");
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;

    #[test]
    fn toggle_keeps_last_category() {
        let mut selected = vec![Category::General, Category::Academic];
        assert!(toggle_category(&mut selected, Category::General));
        assert_eq!(selected, [Category::Academic]);
        assert!(!toggle_category(&mut selected, Category::Academic));
        assert_eq!(selected, [Category::Academic]);
        assert!(toggle_category(&mut selected, Category::Mindfulness));
        assert_eq!(selected, [Category::Academic, Category::Mindfulness]);
    }

    #[tokio::test]
    async fn defaults_until_saved() {
        let service = PreferencesService::new(Arc::new(MemoryBackend::new()));
        let user_id = Uuid::from_u128(1);

        let prefs = service.load(user_id).await.unwrap();
        assert_eq!(prefs, UserPreferences::default());
        assert!(!prefs.preferred_categories.contains(&Category::Mindfulness));

        let saved = service
            .save(
                user_id,
                UserPreferences {
                    preferred_categories: vec![Category::Mindfulness, Category::Academic, Category::Mindfulness],
                    send_daily_email: true,
                },
            )
            .await
            .unwrap();
        assert_eq!(saved.preferred_categories, [Category::Academic, Category::Mindfulness]);
        assert_eq!(service.load(user_id).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn empty_list_is_rejected() {
        let service = PreferencesService::new(Arc::new(MemoryBackend::new()));
        let empty = UserPreferences {
            preferred_categories: vec![],
            send_daily_email: false,
        };
        assert!(matches!(
            service.save(Uuid::from_u128(2), empty).await,
            Err(PreferencesError::EmptySelection)
        ));
    }
}
