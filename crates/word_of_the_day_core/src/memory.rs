//! crates/word_of_the_day_core/src/memory.rs
//!
//! In-process implementations of every port. Used by the local CLI and by
//! tests in place of the hosted backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{
    ActorId, DailyWord, Feedback, ReactionCounts, ReactionKind, ReactionRecord, User,
    UserAction, UserPreferences, WordDisplay,
};
use crate::ports::{
    ActivityLogStore, AuthSessionStore, FeedbackStore, KeyValueStore, PortError, PortResult,
    PreferencesStore, ReactionStore, WordHistoryStore,
};

fn lock<T>(mutex: &Mutex<T>) -> PortResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| PortError::Unexpected("in-memory store lock poisoned".to_string()))
}

//=========================================================================================
// Client storage
//=========================================================================================

#[derive(Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        Ok(lock(&self.values)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        lock(&self.values)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PortResult<()> {
        lock(&self.values)?.remove(key);
        Ok(())
    }
}

//=========================================================================================
// Backend
//=========================================================================================

/// A single in-memory "backend" holding every table.
#[derive(Default)]
pub struct MemoryBackend {
    reactions: Mutex<Vec<ReactionRecord>>,
    preferences: Mutex<HashMap<Uuid, UserPreferences>>,
    actions: Mutex<Vec<UserAction>>,
    displays: Mutex<Vec<WordDisplay>>,
    history: Mutex<Vec<DailyWord>>,
    feedback: Mutex<Vec<Feedback>>,
    sessions: Mutex<HashMap<String, User>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session token as the auth provider would.
    pub fn add_session(&self, session_id: &str, user: User) {
        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.insert(session_id.to_string(), user);
        }
    }

    pub fn reactions(&self) -> Vec<ReactionRecord> {
        self.reactions.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn actions(&self) -> Vec<UserAction> {
        self.actions.lock().map(|a| a.clone()).unwrap_or_default()
    }

    pub fn displays(&self) -> Vec<WordDisplay> {
        self.displays.lock().map(|d| d.clone()).unwrap_or_default()
    }

    pub fn feedback(&self) -> Vec<Feedback> {
        self.feedback.lock().map(|f| f.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ReactionStore for MemoryBackend {
    async fn count_reactions(&self, word: &str) -> PortResult<ReactionCounts> {
        let mut counts = ReactionCounts::default();
        for record in lock(&self.reactions)?.iter().filter(|r| r.word == word) {
            counts.add(record.kind);
        }
        Ok(counts)
    }

    async fn find_reaction(
        &self,
        word: &str,
        actor: &ActorId,
    ) -> PortResult<Option<ReactionKind>> {
        Ok(lock(&self.reactions)?
            .iter()
            .find(|r| r.word == word && &r.actor == actor)
            .map(|r| r.kind))
    }

    async fn insert_reaction(
        &self,
        word: &str,
        actor: &ActorId,
        kind: ReactionKind,
    ) -> PortResult<()> {
        let mut reactions = lock(&self.reactions)?;
        if reactions.iter().any(|r| r.word == word && &r.actor == actor) {
            return Err(PortError::Unexpected(format!(
                "duplicate reaction for {word} by {actor}"
            )));
        }
        reactions.push(ReactionRecord {
            word: word.to_string(),
            actor: actor.clone(),
            kind,
            updated_at: Utc::now(),
        });
        Ok(())
    }

    async fn update_reaction(
        &self,
        word: &str,
        actor: &ActorId,
        kind: ReactionKind,
    ) -> PortResult<()> {
        let mut reactions = lock(&self.reactions)?;
        let record = reactions
            .iter_mut()
            .find(|r| r.word == word && &r.actor == actor)
            .ok_or_else(|| PortError::NotFound(format!("reaction for {word} by {actor}")))?;
        record.kind = kind;
        record.updated_at = Utc::now();
        Ok(())
    }

    async fn delete_reaction(&self, word: &str, actor: &ActorId) -> PortResult<()> {
        lock(&self.reactions)?.retain(|r| !(r.word == word && &r.actor == actor));
        Ok(())
    }
}

#[async_trait]
impl PreferencesStore for MemoryBackend {
    async fn get_preferences(&self, user_id: Uuid) -> PortResult<Option<UserPreferences>> {
        Ok(lock(&self.preferences)?.get(&user_id).cloned())
    }

    async fn save_preferences(&self, user_id: Uuid, prefs: &UserPreferences) -> PortResult<()> {
        lock(&self.preferences)?.insert(user_id, prefs.clone());
        Ok(())
    }
}

#[async_trait]
impl ActivityLogStore for MemoryBackend {
    async fn insert_action(&self, action: &UserAction) -> PortResult<()> {
        lock(&self.actions)?.push(action.clone());
        Ok(())
    }

    async fn insert_word_display(&self, display: &WordDisplay) -> PortResult<()> {
        lock(&self.displays)?.push(display.clone());
        Ok(())
    }
}

#[async_trait]
impl WordHistoryStore for MemoryBackend {
    async fn find_by_date(&self, date: NaiveDate) -> PortResult<Option<DailyWord>> {
        Ok(lock(&self.history)?.iter().find(|d| d.date == date).cloned())
    }

    async fn insert_daily_word(&self, entry: &DailyWord) -> PortResult<DailyWord> {
        let mut history = lock(&self.history)?;
        if let Some(existing) = history.iter().find(|d| d.date == entry.date) {
            return Ok(existing.clone());
        }
        history.push(entry.clone());
        Ok(entry.clone())
    }

    async fn recent(&self, limit: u32) -> PortResult<Vec<DailyWord>> {
        let mut history = lock(&self.history)?.clone();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history.truncate(limit as usize);
        Ok(history)
    }
}

#[async_trait]
impl FeedbackStore for MemoryBackend {
    async fn insert_feedback(&self, feedback: &Feedback) -> PortResult<()> {
        lock(&self.feedback)?.push(feedback.clone());
        Ok(())
    }
}

#[async_trait]
impl AuthSessionStore for MemoryBackend {
    async fn validate_auth_session(&self, session_id: &str) -> PortResult<User> {
        lock(&self.sessions)?
            .get(session_id)
            .cloned()
            .ok_or(PortError::Unauthorized)
    }
}
