//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the persistence ports from the `core` crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use tracing::warn;
use uuid::Uuid;
use word_of_the_day_core::domain::{
    ActorId, Category, DailyWord, Feedback, ReactionCounts, ReactionKind, User, UserAction,
    UserPreferences, WordDisplay,
};
use word_of_the_day_core::ports::{
    ActivityLogStore, AuthSessionStore, FeedbackStore, PortError, PortResult, PreferencesStore,
    ReactionStore, WordHistoryStore,
};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements every backend port.
#[derive(Clone)]
pub struct DbAdapter {
    pool: PgPool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

/// Splits an actor into the `(user_id, visitor_id)` column pair; exactly one is set.
fn actor_columns(actor: &ActorId) -> (Option<Uuid>, Option<&str>) {
    match actor {
        ActorId::User(id) => (Some(*id), None),
        ActorId::Visitor(visitor) => (None, Some(visitor.as_str())),
    }
}

const ACTOR_MATCHES: &str =
    "user_id IS NOT DISTINCT FROM $2 AND visitor_id IS NOT DISTINCT FROM $3";

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct CountsRecord {
    likes: i64,
    dislikes: i64,
}
impl CountsRecord {
    fn to_domain(self) -> ReactionCounts {
        ReactionCounts::new(self.likes.max(0) as u32, self.dislikes.max(0) as u32)
    }
}

#[derive(FromRow)]
struct ReactionRecord {
    reaction: String,
}
impl ReactionRecord {
    fn to_domain(self) -> PortResult<ReactionKind> {
        ReactionKind::from_str(&self.reaction).map_err(PortError::Unexpected)
    }
}

#[derive(FromRow)]
struct PreferencesRecord {
    preferred_word_types: Option<Vec<String>>,
    send_daily_email: bool,
}
impl PreferencesRecord {
    fn to_domain(self) -> UserPreferences {
        let preferred_categories = self
            .preferred_word_types
            .unwrap_or_default()
            .iter()
            .filter_map(|raw| match Category::from_str(raw) {
                Ok(c) => Some(c),
                Err(e) => {
                    warn!("Dropping stored preference: {}", e);
                    None
                }
            })
            .collect();
        UserPreferences {
            preferred_categories,
            send_daily_email: self.send_daily_email,
        }
    }
}

#[derive(FromRow)]
struct DailyWordRecord {
    word: String,
    word_type: String,
    date: NaiveDate,
}
impl DailyWordRecord {
    fn to_domain(self) -> PortResult<DailyWord> {
        let category = Category::from_str(&self.word_type)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(DailyWord {
            word: self.word,
            category,
            date: self.date,
        })
    }
}

#[derive(FromRow)]
struct SessionUserRecord {
    user_id: Uuid,
    email: Option<String>,
}
impl SessionUserRecord {
    fn to_domain(self) -> User {
        User {
            user_id: self.user_id,
            email: self.email,
        }
    }
}

//=========================================================================================
// Port Implementations
//=========================================================================================

#[async_trait]
impl ReactionStore for DbAdapter {
    async fn count_reactions(&self, word: &str) -> PortResult<ReactionCounts> {
        let record = sqlx::query_as::<_, CountsRecord>(
            "SELECT COUNT(*) FILTER (WHERE reaction = 'like') AS likes, \
                    COUNT(*) FILTER (WHERE reaction = 'dislike') AS dislikes \
             FROM word_reactions WHERE word = $1",
        )
        .bind(word)
        .fetch_one(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(record.to_domain())
    }

    async fn find_reaction(
        &self,
        word: &str,
        actor: &ActorId,
    ) -> PortResult<Option<ReactionKind>> {
        let (user_id, visitor_id) = actor_columns(actor);
        let record = sqlx::query_as::<_, ReactionRecord>(&format!(
            "SELECT reaction FROM word_reactions WHERE word = $1 AND {ACTOR_MATCHES}"
        ))
        .bind(word)
        .bind(user_id)
        .bind(visitor_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;
        record.map(ReactionRecord::to_domain).transpose()
    }

    async fn insert_reaction(
        &self,
        word: &str,
        actor: &ActorId,
        kind: ReactionKind,
    ) -> PortResult<()> {
        let (user_id, visitor_id) = actor_columns(actor);
        sqlx::query(
            "INSERT INTO word_reactions (word, user_id, visitor_id, reaction) VALUES ($1, $2, $3, $4)",
        )
        .bind(word)
        .bind(user_id)
        .bind(visitor_id)
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(())
    }

    async fn update_reaction(
        &self,
        word: &str,
        actor: &ActorId,
        kind: ReactionKind,
    ) -> PortResult<()> {
        let (user_id, visitor_id) = actor_columns(actor);
        let result = sqlx::query(&format!(
            "UPDATE word_reactions SET reaction = $4, updated_at = NOW() \
             WHERE word = $1 AND {ACTOR_MATCHES}"
        ))
        .bind(word)
        .bind(user_id)
        .bind(visitor_id)
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        if result.rows_affected() == 0 {
            return Err(PortError::NotFound(format!("Reaction on {} by {} not found", word, actor)));
        }
        Ok(())
    }

    async fn delete_reaction(&self, word: &str, actor: &ActorId) -> PortResult<()> {
        let (user_id, visitor_id) = actor_columns(actor);
        sqlx::query(&format!(
            "DELETE FROM word_reactions WHERE word = $1 AND {ACTOR_MATCHES}"
        ))
        .bind(word)
        .bind(user_id)
        .bind(visitor_id)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(())
    }
}

#[async_trait]
impl PreferencesStore for DbAdapter {
    async fn get_preferences(&self, user_id: Uuid) -> PortResult<Option<UserPreferences>> {
        let record = sqlx::query_as::<_, PreferencesRecord>(
            "SELECT preferred_word_types, send_daily_email FROM user_preferences WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(record.map(PreferencesRecord::to_domain))
    }

    async fn save_preferences(&self, user_id: Uuid, prefs: &UserPreferences) -> PortResult<()> {
        let types: Vec<String> = prefs
            .preferred_categories
            .iter()
            .map(|c| c.as_str().to_string())
            .collect();
        sqlx::query(
            "INSERT INTO user_preferences (user_id, preferred_word_types, send_daily_email) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id) DO UPDATE SET \
                preferred_word_types = EXCLUDED.preferred_word_types, \
                send_daily_email = EXCLUDED.send_daily_email, \
                updated_at = NOW()",
        )
        .bind(user_id)
        .bind(types)
        .bind(prefs.send_daily_email)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(())
    }
}

#[async_trait]
impl ActivityLogStore for DbAdapter {
    async fn insert_action(&self, action: &UserAction) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO user_actions (user_id, session_id, action_type, page_path, element_info, \
                browser, device, os, screen_resolution, language, referrer, user_agent) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(action.user_id)
        .bind(&action.session_id)
        .bind(action.action_type.as_str())
        .bind(&action.page_path)
        .bind(&action.element_info)
        .bind(&action.browser)
        .bind(&action.device)
        .bind(&action.os)
        .bind(&action.screen_resolution)
        .bind(&action.language)
        .bind(&action.referrer)
        .bind(&action.user_agent)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(())
    }

    async fn insert_word_display(&self, display: &WordDisplay) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO word_displays (word, session_id, user_id, user_email) VALUES ($1, $2, $3, $4)",
        )
        .bind(&display.word)
        .bind(&display.session_id)
        .bind(display.user_id)
        .bind(&display.user_email)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(())
    }
}

#[async_trait]
impl WordHistoryStore for DbAdapter {
    async fn find_by_date(&self, date: NaiveDate) -> PortResult<Option<DailyWord>> {
        let record = sqlx::query_as::<_, DailyWordRecord>(
            "SELECT word, word_type, date FROM word_of_the_day WHERE date = $1",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;
        record.map(DailyWordRecord::to_domain).transpose()
    }

    async fn insert_daily_word(&self, entry: &DailyWord) -> PortResult<DailyWord> {
        sqlx::query(
            "INSERT INTO word_of_the_day (word, word_type, date) VALUES ($1, $2, $3) \
             ON CONFLICT (date) DO NOTHING",
        )
        .bind(&entry.word)
        .bind(entry.category.as_str())
        .bind(entry.date)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        // Someone else may have won the race for this date; return whichever row is stored.
        self.find_by_date(entry.date)
            .await?
            .ok_or_else(|| PortError::NotFound(format!("Word of the day for {} not found", entry.date)))
    }

    async fn recent(&self, limit: u32) -> PortResult<Vec<DailyWord>> {
        let records = sqlx::query_as::<_, DailyWordRecord>(
            "SELECT word, word_type, date FROM word_of_the_day ORDER BY date DESC LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        records.into_iter().map(|r| r.to_domain()).collect()
    }
}

#[async_trait]
impl FeedbackStore for DbAdapter {
    async fn insert_feedback(&self, feedback: &Feedback) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO feedback (user_id, user_email, feedback_type, message, page_path) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(feedback.user_id)
        .bind(&feedback.user_email)
        .bind(feedback.kind.as_str())
        .bind(&feedback.message)
        .bind(&feedback.page_path)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(())
    }
}

#[async_trait]
impl AuthSessionStore for DbAdapter {
    async fn validate_auth_session(&self, session_id: &str) -> PortResult<User> {
        let record = sqlx::query_as::<_, SessionUserRecord>(
            "SELECT s.user_id, p.email FROM auth_sessions s \
             LEFT JOIN profiles p ON p.user_id = s.user_id \
             WHERE s.id = $1 AND s.expires_at > NOW()",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        record
            .map(SessionUserRecord::to_domain)
            .ok_or(PortError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_of_the_day_core::domain::VisitorId;

    #[test]
    fn actor_maps_to_exactly_one_column() {
        let id = Uuid::from_u128(7);
        assert_eq!(actor_columns(&ActorId::User(id)), (Some(id), None));
        assert_eq!(
            actor_columns(&ActorId::Visitor(VisitorId::new("v-7"))),
            (None, Some("v-7"))
        );
    }

    #[test]
    fn unknown_stored_categories_are_dropped() {
        let record = PreferencesRecord {
            preferred_word_types: Some(vec!["academic".to_string(), "poetry".to_string()]),
            send_daily_email: true,
        };
        let prefs = record.to_domain();
        assert_eq!(prefs.preferred_categories, [Category::Academic]);
        assert!(prefs.send_daily_email);
    }
}
