//! services/api/src/web/protocol.rs
//!
//! Request and response payloads exchanged with the browser client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use word_of_the_day_core::quiz::QuizOption;
use word_of_the_day_core::{DailyWord, ReactionSnapshot, UserPreferences, WordEntry};

//=========================================================================================
// Words
//=========================================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuoteResponse {
    pub text: String,
    pub book_title: String,
    pub author: String,
}

/// A catalog entry as shown on the page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WordResponse {
    pub word: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
    pub etymology: String,
    pub category: String,
    pub quote: Option<QuoteResponse>,
}

impl From<&WordEntry> for WordResponse {
    fn from(entry: &WordEntry) -> Self {
        Self {
            word: entry.text.to_string(),
            pronunciation: entry.pronunciation.to_string(),
            part_of_speech: entry.part_of_speech.to_string(),
            definition: entry.definition.to_string(),
            example: entry.example.to_string(),
            etymology: entry.etymology.to_string(),
            category: entry.category.as_str().to_string(),
            quote: entry.quote.as_ref().map(|q| QuoteResponse {
                text: q.text.to_string(),
                book_title: q.book_title.to_string(),
                author: q.author.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TodayQuery {
    /// A single category override, or `all`.
    pub category: Option<String>,
    /// Defaults to the server's current UTC date.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShuffleQuery {
    /// The word currently on screen; never returned unless it is the only candidate.
    pub current: String,
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizOptionResponse {
    pub text: String,
    pub is_correct: bool,
}

impl From<QuizOption> for QuizOptionResponse {
    fn from(option: QuizOption) -> Self {
        Self {
            text: option.text,
            is_correct: option.is_correct,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub word: String,
    pub options: Vec<QuizOptionResponse>,
}

//=========================================================================================
// Reactions
//=========================================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReactRequest {
    /// `like` or `dislike`.
    pub reaction: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReactionResponse {
    pub word: String,
    pub likes: u32,
    pub dislikes: u32,
    /// The caller's own reaction, if any.
    pub current: Option<String>,
}

impl ReactionResponse {
    pub fn new(word: &str, snapshot: ReactionSnapshot) -> Self {
        Self {
            word: word.to_string(),
            likes: snapshot.counts.likes,
            dislikes: snapshot.counts.dislikes,
            current: snapshot.current.map(|k| k.as_str().to_string()),
        }
    }
}

//=========================================================================================
// History
//=========================================================================================

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DailyWordResponse {
    pub date: NaiveDate,
    pub word: String,
    pub category: String,
    /// Missing when the word is no longer in the catalog.
    pub entry: Option<WordResponse>,
}

impl DailyWordResponse {
    pub fn new(row: DailyWord, entry: Option<&WordEntry>) -> Self {
        Self {
            date: row.date,
            category: row.category.as_str().to_string(),
            word: row.word,
            entry: entry.map(WordResponse::from),
        }
    }
}

//=========================================================================================
// Activity, feedback and preferences
//=========================================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct ActivityRequest {
    pub session_id: String,
    /// `page_visit`, `button_click`, or any custom action name.
    pub action_type: String,
    pub page_path: String,
    pub element_info: Option<String>,
    pub screen_resolution: Option<String>,
    pub language: Option<String>,
    pub referrer: Option<String>,
    /// Also records that this word was shown.
    pub displayed_word: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FeedbackRequest {
    /// `bug`, `suggestion` or `general`.
    pub kind: String,
    pub email: Option<String>,
    pub message: String,
    pub page_path: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PreferencesBody {
    pub preferred_categories: Vec<String>,
    pub send_daily_email: bool,
}

impl From<UserPreferences> for PreferencesBody {
    fn from(prefs: UserPreferences) -> Self {
        Self {
            preferred_categories: prefs
                .preferred_categories
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            send_daily_email: prefs.send_daily_email,
        }
    }
}
