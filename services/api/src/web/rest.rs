//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    Extension,
};
use chrono::Utc;
use tracing::{error, warn};
use utoipa::OpenApi;

use word_of_the_day_core::activity::ClientContext;
use word_of_the_day_core::feedback::{FeedbackError, FeedbackSubmission};
use word_of_the_day_core::filter::effective_categories;
use word_of_the_day_core::history::DEFAULT_HISTORY_LIMIT;
use word_of_the_day_core::preferences::PreferencesError;
use word_of_the_day_core::selector::word_of_day;
use word_of_the_day_core::{
    quiz, shuffle, ActionType, Category, FeedbackKind, ReactionError, ReactionKind,
    ReactionSnapshot, UserPreferences, WordEntry,
};

use crate::web::middleware::Identity;
use crate::web::protocol::{
    ActivityRequest, DailyWordResponse, FeedbackRequest, FeedbackResponse, HistoryQuery,
    PreferencesBody, QuizOptionResponse, QuizResponse, QuoteResponse, ReactRequest,
    ReactionResponse, ShuffleQuery, TodayQuery, WordResponse,
};
use crate::web::state::AppState;

const MAX_HISTORY_LIMIT: u32 = 365;

type HandlerError = (StatusCode, String);

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_words_handler,
        today_handler,
        shuffle_handler,
        quiz_handler,
        get_reactions_handler,
        react_handler,
        history_handler,
        record_today_handler,
        activity_handler,
        feedback_handler,
        get_preferences_handler,
        put_preferences_handler,
    ),
    components(
        schemas(
            WordResponse,
            QuoteResponse,
            QuizResponse,
            QuizOptionResponse,
            ReactRequest,
            ReactionResponse,
            DailyWordResponse,
            ActivityRequest,
            FeedbackRequest,
            FeedbackResponse,
            PreferencesBody,
        )
    ),
    tags(
        (name = "Word of the Day API", description = "Daily vocabulary, reactions, history and feedback.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Helpers
//=========================================================================================

fn internal(context: &str, e: impl Debug) -> HandlerError {
    error!("{}: {:?}", context, e);
    (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
}

/// `None` and `all` both mean "no override".
fn parse_category(raw: Option<&str>) -> Result<Option<Category>, HandlerError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(name) => Category::from_str(name)
            .map(Some)
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string())),
    }
}

fn find_word(state: &AppState, word: &str) -> Result<&'static WordEntry, HandlerError> {
    state
        .catalog
        .find(word)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Unknown word '{word}'")))
}

//=========================================================================================
// Words
//=========================================================================================

/// List every word in the catalog, in catalog order.
#[utoipa::path(
    get,
    path = "/words",
    responses((status = 200, description = "The full catalog", body = Vec<WordResponse>))
)]
pub async fn list_words_handler(State(state): State<Arc<AppState>>) -> Json<Vec<WordResponse>> {
    Json(state.catalog.all().iter().map(WordResponse::from).collect())
}

/// The word of the day.
///
/// A `category` override wins; otherwise a signed-in user's saved categories
/// apply; anonymous callers draw from the whole catalog.
#[utoipa::path(
    get,
    path = "/words/today",
    params(TodayQuery),
    responses(
        (status = 200, description = "The word for the date", body = WordResponse),
        (status = 400, description = "Unknown category")
    )
)]
pub async fn today_handler(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<WordResponse>, HandlerError> {
    let override_category = parse_category(query.category.as_deref())?;

    let saved = match (&identity.user, override_category) {
        (Some(user), None) => match state.preferences.load(user.user_id).await {
            Ok(prefs) => Some(prefs.preferred_categories),
            Err(e) => {
                warn!(user_id = %user.user_id, "Failed to load preferences, using defaults: {:?}", e);
                Some(UserPreferences::default().preferred_categories)
            }
        },
        _ => None,
    };
    let allowed = effective_categories(override_category, saved.as_deref());

    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let entry = word_of_day(&state.catalog, date, allowed.as_deref());
    Ok(Json(WordResponse::from(entry)))
}

/// A random word other than `current`.
#[utoipa::path(
    get,
    path = "/words/shuffle",
    params(ShuffleQuery),
    responses(
        (status = 200, description = "The next word", body = WordResponse),
        (status = 400, description = "Unknown category"),
        (status = 404, description = "Unknown current word")
    )
)]
pub async fn shuffle_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ShuffleQuery>,
) -> Result<Json<WordResponse>, HandlerError> {
    let filter = parse_category(query.category.as_deref())?;
    let current = find_word(&state, &query.current)?;
    let next = shuffle::next_word(&state.catalog, current, filter, &mut rand::thread_rng());
    Ok(Json(WordResponse::from(next)))
}

/// A fresh three-option quiz for `word`.
#[utoipa::path(
    get,
    path = "/words/{word}/quiz",
    params(("word" = String, Path, description = "The word text, as spelled in the catalog.")),
    responses(
        (status = 200, description = "One true and two false facts", body = QuizResponse),
        (status = 404, description = "Unknown word")
    )
)]
pub async fn quiz_handler(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
) -> Result<Json<QuizResponse>, HandlerError> {
    let entry = find_word(&state, &word)?;
    let options = quiz::generate(entry, &mut rand::thread_rng());
    Ok(Json(QuizResponse {
        word: entry.text.to_string(),
        options: options.into_iter().map(QuizOptionResponse::from).collect(),
    }))
}

//=========================================================================================
// Reactions
//=========================================================================================

/// Like/dislike totals for `word`, plus the caller's own reaction.
#[utoipa::path(
    get,
    path = "/reactions/{word}",
    params(
        ("word" = String, Path, description = "The word text."),
        ("x-visitor-id" = Option<String>, Header, description = "Anonymous visitor id.")
    ),
    responses(
        (status = 200, description = "Current totals", body = ReactionResponse),
        (status = 404, description = "Unknown word"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_reactions_handler(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(word): Path<String>,
) -> Result<Json<ReactionResponse>, HandlerError> {
    let word = find_word(&state, &word)?.text;
    let counts = state
        .reactions
        .counts(word)
        .await
        .map_err(|e| internal("Failed to load reactions", e))?;
    let current = match identity.actor() {
        Some(actor) => state
            .reactions
            .current_reaction(word, &actor)
            .await
            .map_err(|e| internal("Failed to load reactions", e))?,
        None => None,
    };
    Ok(Json(ReactionResponse::new(
        word,
        ReactionSnapshot { counts, current },
    )))
}

/// Apply a like or dislike. Repeating the current reaction removes it.
#[utoipa::path(
    post,
    path = "/reactions/{word}",
    request_body = ReactRequest,
    params(
        ("word" = String, Path, description = "The word text."),
        ("x-visitor-id" = Option<String>, Header, description = "Anonymous visitor id.")
    ),
    responses(
        (status = 200, description = "Totals after the update", body = ReactionResponse),
        (status = 400, description = "No identity, or an unknown reaction"),
        (status = 404, description = "Unknown word"),
        (status = 409, description = "An update for this word is still in progress"),
        (status = 500, description = "Failed to update reaction")
    )
)]
pub async fn react_handler(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(word): Path<String>,
    Json(payload): Json<ReactRequest>,
) -> Result<Json<ReactionResponse>, HandlerError> {
    let kind = ReactionKind::from_str(&payload.reaction).map_err(|e| (StatusCode::BAD_REQUEST, e))?;
    let entry = find_word(&state, &word)?;
    let actor = identity.actor().ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            "A session or x-visitor-id header is required".to_string(),
        )
    })?;

    match state.reactions.react(entry.text, &actor, kind).await {
        Ok(snapshot) => Ok(Json(ReactionResponse::new(entry.text, snapshot))),
        Err(ReactionError::Busy) => Err((
            StatusCode::CONFLICT,
            "A reaction update is already in progress".to_string(),
        )),
        // Already logged by the ledger.
        Err(ReactionError::Persistence(_)) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to update reaction".to_string(),
        )),
    }
}

//=========================================================================================
// History
//=========================================================================================

/// Recorded words of the day, newest first.
#[utoipa::path(
    get,
    path = "/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Past words", body = Vec<DailyWordResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn history_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<DailyWordResponse>>, HandlerError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT);
    let rows = state
        .history
        .recent(limit)
        .await
        .map_err(|e| internal("Failed to load history", e))?;
    Ok(Json(
        rows.into_iter()
            .map(|(row, entry)| DailyWordResponse::new(row, entry))
            .collect(),
    ))
}

/// Record today's unfiltered word. Safe to call repeatedly.
#[utoipa::path(
    post,
    path = "/history/today",
    responses(
        (status = 200, description = "The word stored for today", body = DailyWordResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn record_today_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DailyWordResponse>, HandlerError> {
    let row = state
        .history
        .record_today(Utc::now().date_naive())
        .await
        .map_err(|e| internal("Failed to record today's word", e))?;
    let entry = state.catalog.find(&row.word);
    Ok(Json(DailyWordResponse::new(row, entry)))
}

//=========================================================================================
// Activity
//=========================================================================================

/// Append to the activity trail. Always accepted once well-formed; storage
/// failures are only logged.
#[utoipa::path(
    post,
    path = "/activity",
    request_body = ActivityRequest,
    responses(
        (status = 202, description = "Accepted"),
        (status = 400, description = "Missing session id or page path")
    )
)]
pub async fn activity_handler(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    headers: HeaderMap,
    Json(payload): Json<ActivityRequest>,
) -> Result<StatusCode, HandlerError> {
    if payload.session_id.trim().is_empty() || payload.page_path.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "session_id and page_path are required".to_string(),
        ));
    }

    let client = ClientContext {
        session_id: payload.session_id,
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        screen_resolution: payload.screen_resolution,
        language: payload.language,
        referrer: payload.referrer,
    };
    let action_type = match payload.action_type.as_str() {
        "page_visit" => ActionType::PageVisit,
        "button_click" => ActionType::ButtonClick,
        other => ActionType::Custom(other.to_string()),
    };
    let user = identity.user.as_ref();

    state
        .activity
        .log(
            user,
            &client,
            action_type,
            &payload.page_path,
            payload.element_info.as_deref(),
        )
        .await;
    if let Some(word) = payload.displayed_word.as_deref() {
        state
            .activity
            .word_displayed(user, &client.session_id, word)
            .await;
    }
    Ok(StatusCode::ACCEPTED)
}

//=========================================================================================
// Feedback
//=========================================================================================

/// Submit feedback. A signed-in user's email replaces any typed one.
#[utoipa::path(
    post,
    path = "/feedback",
    request_body = FeedbackRequest,
    responses(
        (status = 201, description = "Feedback stored", body = FeedbackResponse),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn feedback_handler(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<FeedbackRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let kind = FeedbackKind::from_str(&payload.kind).map_err(|e| (StatusCode::BAD_REQUEST, e))?;
    let submission = FeedbackSubmission {
        kind,
        email: payload.email,
        message: payload.message,
        page_path: payload.page_path,
    };

    match state.feedback.submit(submission, identity.user.as_ref()).await {
        Ok(feedback) => Ok((
            StatusCode::CREATED,
            Json(FeedbackResponse {
                kind: feedback.kind.as_str().to_string(),
                message: feedback.message,
            }),
        )),
        Err(FeedbackError::Invalid(reason)) => Err((StatusCode::BAD_REQUEST, reason)),
        Err(FeedbackError::Port(e)) => Err(internal("Failed to submit feedback", e)),
    }
}

//=========================================================================================
// Preferences (signed-in only)
//=========================================================================================

fn signed_in(identity: &Identity) -> Result<uuid::Uuid, HandlerError> {
    identity
        .user
        .as_ref()
        .map(|u| u.user_id)
        .ok_or((StatusCode::UNAUTHORIZED, "Sign in required".to_string()))
}

/// The caller's saved preferences, or the defaults.
#[utoipa::path(
    get,
    path = "/preferences",
    responses(
        (status = 200, description = "Saved or default preferences", body = PreferencesBody),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_preferences_handler(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<PreferencesBody>, HandlerError> {
    let user_id = signed_in(&identity)?;
    let prefs = state
        .preferences
        .load(user_id)
        .await
        .map_err(|e| internal("Failed to load preferences", e))?;
    Ok(Json(prefs.into()))
}

/// Replace the caller's preferences. At least one category is required.
#[utoipa::path(
    put,
    path = "/preferences",
    request_body = PreferencesBody,
    responses(
        (status = 200, description = "Preferences as stored", body = PreferencesBody),
        (status = 400, description = "Empty or unknown categories"),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn put_preferences_handler(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<PreferencesBody>,
) -> Result<Json<PreferencesBody>, HandlerError> {
    let user_id = signed_in(&identity)?;
    let preferred_categories = payload
        .preferred_categories
        .iter()
        .map(|name| Category::from_str(name))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let prefs = UserPreferences {
        preferred_categories,
        send_daily_email: payload.send_daily_email,
    };
    match state.preferences.save(user_id, prefs).await {
        Ok(saved) => Ok(Json(saved.into())),
        Err(e @ PreferencesError::EmptySelection) => Err((StatusCode::BAD_REQUEST, e.to_string())),
        Err(PreferencesError::Port(e)) => Err(internal("Failed to save preferences", e)),
    }
}
