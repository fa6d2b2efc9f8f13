//! services/api/src/web/state.rs
//!
//! Defines the application state shared by every request handler.

use std::sync::Arc;

use word_of_the_day_core::activity::ActivityLogger;
use word_of_the_day_core::feedback::FeedbackService;
use word_of_the_day_core::history::WordHistory;
use word_of_the_day_core::preferences::PreferencesService;
use word_of_the_day_core::ports::{
    ActivityLogStore, AuthSessionStore, FeedbackStore, PreferencesStore, ReactionStore,
    WordHistoryStore,
};
use word_of_the_day_core::{ReactionLedger, WordCatalog};

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: WordCatalog<'static>,
    pub reactions: Arc<ReactionLedger>,
    pub preferences: Arc<PreferencesService>,
    pub activity: Arc<ActivityLogger>,
    pub history: Arc<WordHistory>,
    pub feedback: Arc<FeedbackService>,
    pub auth: Arc<dyn AuthSessionStore>,
}

impl AppState {
    /// Wires every service to one backend that implements all the persistence ports.
    pub fn new<B>(backend: Arc<B>, catalog: WordCatalog<'static>) -> Self
    where
        B: ReactionStore
            + PreferencesStore
            + ActivityLogStore
            + WordHistoryStore
            + FeedbackStore
            + AuthSessionStore
            + 'static,
    {
        Self {
            catalog,
            reactions: Arc::new(ReactionLedger::new(backend.clone())),
            preferences: Arc::new(PreferencesService::new(backend.clone())),
            activity: Arc::new(ActivityLogger::new(backend.clone())),
            history: Arc::new(WordHistory::new(backend.clone(), catalog)),
            feedback: Arc::new(FeedbackService::new(backend.clone())),
            auth: backend,
        }
    }
}
