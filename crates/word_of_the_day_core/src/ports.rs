//! crates/word_of_the_day_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the hosted backend and of the client's local storage.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    ActorId, DailyWord, Feedback, ReactionCounts, ReactionKind, User, UserAction,
    UserPreferences, WordDisplay,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, disk).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
    #[error("Unauthorized")]
    Unauthorized,
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Backend Ports (Traits)
//=========================================================================================

/// Row-level access to reaction records plus the two aggregate queries.
///
/// Implementations enforce at most one record per (word, actor).
#[async_trait]
pub trait ReactionStore: Send + Sync {
    async fn count_reactions(&self, word: &str) -> PortResult<ReactionCounts>;

    async fn find_reaction(&self, word: &str, actor: &ActorId)
        -> PortResult<Option<ReactionKind>>;

    async fn insert_reaction(&self, word: &str, actor: &ActorId, kind: ReactionKind)
        -> PortResult<()>;

    async fn update_reaction(&self, word: &str, actor: &ActorId, kind: ReactionKind)
        -> PortResult<()>;

    async fn delete_reaction(&self, word: &str, actor: &ActorId) -> PortResult<()>;
}

#[async_trait]
pub trait PreferencesStore: Send + Sync {
    /// `None` when the user has never saved preferences.
    async fn get_preferences(&self, user_id: Uuid) -> PortResult<Option<UserPreferences>>;

    async fn save_preferences(&self, user_id: Uuid, prefs: &UserPreferences) -> PortResult<()>;
}

#[async_trait]
pub trait ActivityLogStore: Send + Sync {
    async fn insert_action(&self, action: &UserAction) -> PortResult<()>;

    async fn insert_word_display(&self, display: &WordDisplay) -> PortResult<()>;
}

#[async_trait]
pub trait WordHistoryStore: Send + Sync {
    async fn find_by_date(&self, date: NaiveDate) -> PortResult<Option<DailyWord>>;

    /// Inserts the row, or returns the row already stored for that date.
    async fn insert_daily_word(&self, entry: &DailyWord) -> PortResult<DailyWord>;

    /// Most recent first.
    async fn recent(&self, limit: u32) -> PortResult<Vec<DailyWord>>;
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn insert_feedback(&self, feedback: &Feedback) -> PortResult<()>;
}

#[async_trait]
pub trait AuthSessionStore: Send + Sync {
    /// Resolves a session token issued by the auth provider to its user.
    async fn validate_auth_session(&self, session_id: &str) -> PortResult<User>;
}

//=========================================================================================
// Client Storage Port
//=========================================================================================

/// Durable, synchronous key-value storage scoped to one client profile.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> PortResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> PortResult<()>;

    fn remove(&self, key: &str) -> PortResult<()>;
}
