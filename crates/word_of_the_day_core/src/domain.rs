//! crates/word_of_the_day_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or wire format; the serde
//! derives only fix their external spelling.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

//=========================================================================================
// Vocabulary
//=========================================================================================

/// One of the five fixed word groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Academic,
    Creative,
    Business,
    Mindfulness,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Academic,
        Category::Creative,
        Category::Business,
        Category::Mindfulness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Academic => "academic",
            Category::Creative => "creative",
            Category::Business => "business",
            Category::Mindfulness => "mindfulness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A literary quotation that uses the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub book_title: &'static str,
    pub author: &'static str,
}

/// A single vocabulary entry. Entries are compiled in and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub text: &'static str,
    pub pronunciation: &'static str,
    pub part_of_speech: &'static str,
    pub definition: &'static str,
    pub example: &'static str,
    pub etymology: &'static str,
    pub category: Category,
    pub quote: Option<Quote>,
}

//=========================================================================================
// Identity
//=========================================================================================

/// Represents a signed-in user, as supplied by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: Uuid,
    pub email: Option<String>,
}

/// Anonymous identifier minted once per client and kept in client storage.
///
/// Stable only for as long as that storage survives; two devices (or one
/// device after clearing storage) get different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorId(String);

impl VisitorId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mints a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whoever owns a reaction: a signed-in user or an anonymous visitor, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActorId {
    User(Uuid),
    Visitor(VisitorId),
}

impl ActorId {
    /// Applies the identity precedence rule: a signed-in user always wins and
    /// the visitor id is ignored. `None` when neither is known.
    pub fn resolve(user: Option<&User>, visitor: Option<&VisitorId>) -> Option<Self> {
        match (user, visitor) {
            (Some(user), _) => Some(ActorId::User(user.user_id)),
            (None, Some(visitor)) => Some(ActorId::Visitor(visitor.clone())),
            (None, None) => None,
        }
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorId::User(id) => write!(f, "user:{id}"),
            ActorId::Visitor(id) => write!(f, "visitor:{id}"),
        }
    }
}

//=========================================================================================
// Reactions
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }
}

impl FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(ReactionKind::Like),
            "dislike" => Ok(ReactionKind::Dislike),
            other => Err(format!("unknown reaction '{other}'")),
        }
    }
}

/// Aggregate like/dislike totals for one word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub likes: u32,
    pub dislikes: u32,
}

impl ReactionCounts {
    pub fn new(likes: u32, dislikes: u32) -> Self {
        Self { likes, dislikes }
    }

    pub(crate) fn add(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::Like => self.likes += 1,
            ReactionKind::Dislike => self.dislikes += 1,
        }
    }
}

/// A persisted reaction. At most one exists per (word, actor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRecord {
    pub word: String,
    pub actor: ActorId,
    pub kind: ReactionKind,
    pub updated_at: DateTime<Utc>,
}

//=========================================================================================
// Preferences and history
//=========================================================================================

/// Long-term per-user settings, distinct from the on-page category override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub preferred_categories: Vec<Category>,
    pub send_daily_email: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preferred_categories: vec![
                Category::General,
                Category::Academic,
                Category::Creative,
                Category::Business,
            ],
            send_daily_email: false,
        }
    }
}

/// The word recorded for a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyWord {
    pub word: String,
    pub category: Category,
    pub date: NaiveDate,
}

//=========================================================================================
// Activity and feedback
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionType {
    PageVisit,
    ButtonClick,
    Custom(String),
}

impl ActionType {
    pub fn as_str(&self) -> &str {
        match self {
            ActionType::PageVisit => "page_visit",
            ActionType::ButtonClick => "button_click",
            ActionType::Custom(name) => name,
        }
    }
}

/// One row of the insert-only activity trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAction {
    pub user_id: Option<Uuid>,
    pub session_id: String,
    pub action_type: ActionType,
    pub page_path: String,
    pub element_info: Option<String>,
    pub browser: String,
    pub device: String,
    pub os: String,
    pub screen_resolution: Option<String>,
    pub language: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

/// Records that a word was shown to someone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDisplay {
    pub word: String,
    pub session_id: String,
    pub user_id: Option<Uuid>,
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Bug,
    Suggestion,
    General,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Bug => "bug",
            FeedbackKind::Suggestion => "suggestion",
            FeedbackKind::General => "general",
        }
    }
}

impl FromStr for FeedbackKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bug" => Ok(FeedbackKind::Bug),
            "suggestion" => Ok(FeedbackKind::Suggestion),
            "general" => Ok(FeedbackKind::General),
            other => Err(format!("unknown feedback type '{other}'")),
        }
    }
}

/// A validated feedback message, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub user_id: Option<Uuid>,
    pub user_email: Option<String>,
    pub kind: FeedbackKind,
    pub message: String,
    pub page_path: String,
}
