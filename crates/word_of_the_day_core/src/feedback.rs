//! crates/word_of_the_day_core/src/feedback.rs
//!
//! Validation and submission of user feedback.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::info;

use crate::domain::{Feedback, FeedbackKind, User};
use crate::ports::{FeedbackStore, PortError};

pub const MIN_MESSAGE_CHARS: usize = 10;
pub const MAX_MESSAGE_CHARS: usize = 1000;
pub const MAX_EMAIL_CHARS: usize = 255;

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Port(#[from] PortError),
}

/// The form as the visitor filled it in.
#[derive(Debug, Clone)]
pub struct FeedbackSubmission {
    pub kind: FeedbackKind,
    pub email: Option<String>,
    pub message: String,
    pub page_path: String,
}

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// Checks the form and settles which email to keep: the signed-in user's
/// address wins over a typed one, and a blank field counts as none.
pub fn validate(submission: FeedbackSubmission, user: Option<&User>) -> Result<Feedback, FeedbackError> {
    let message = submission.message.trim().to_string();
    let length = message.chars().count();
    if length < MIN_MESSAGE_CHARS {
        return Err(FeedbackError::Invalid(format!(
            "Please provide at least {MIN_MESSAGE_CHARS} characters"
        )));
    }
    if length > MAX_MESSAGE_CHARS {
        return Err(FeedbackError::Invalid(format!(
            "Message must be less than {MAX_MESSAGE_CHARS} characters"
        )));
    }

    let typed_email = submission
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());
    if let Some(email) = typed_email {
        if email.chars().count() > MAX_EMAIL_CHARS {
            return Err(FeedbackError::Invalid(format!(
                "Email must be less than {MAX_EMAIL_CHARS} characters"
            )));
        }
        if !email_pattern().is_some_and(|p| p.is_match(email)) {
            return Err(FeedbackError::Invalid("Please enter a valid email".to_string()));
        }
    }

    let user_email = user
        .and_then(|u| u.email.clone())
        .or_else(|| typed_email.map(str::to_string));

    Ok(Feedback {
        user_id: user.map(|u| u.user_id),
        user_email,
        kind: submission.kind,
        message,
        page_path: submission.page_path,
    })
}

pub struct FeedbackService {
    store: Arc<dyn FeedbackStore>,
}

impl FeedbackService {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    pub async fn submit(
        &self,
        submission: FeedbackSubmission,
        user: Option<&User>,
    ) -> Result<Feedback, FeedbackError> {
        let feedback = validate(submission, user)?;
        self.store.insert_feedback(&feedback).await?;
        info!(kind = feedback.kind.as_str(), page = %feedback.page_path, "Feedback received");
        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use uuid::Uuid;

    fn submission(message: &str, email: Option<&str>) -> FeedbackSubmission {
        FeedbackSubmission {
            kind: FeedbackKind::Suggestion,
            email: email.map(str::to_string),
            message: message.to_string(),
            page_path: "/".to_string(),
        }
    }

    #[test]
    fn message_length_is_checked_after_trimming() {
        assert!(validate(submission("   too short   ", None), None).is_err());
        assert!(validate(submission(&"x".repeat(1001), None), None).is_err());

        let ok = validate(submission("  Please add more business words.  ", None), None).unwrap();
        assert_eq!(ok.message, "Please add more business words.");
    }

    #[test]
    fn email_rules() {
        let msg = "The quiz is a lovely touch.";
        assert!(matches!(
            validate(submission(msg, Some("not-an-email")), None),
            Err(FeedbackError::Invalid(_))
        ));
        assert_eq!(validate(submission(msg, Some("   ")), None).unwrap().user_email, None);
        assert_eq!(
            validate(submission(msg, Some(" a@b.co ")), None).unwrap().user_email.as_deref(),
            Some("a@b.co")
        );

        let user = User {
            user_id: Uuid::from_u128(1),
            email: Some("member@example.com".to_string()),
        };
        let fb = validate(submission(msg, Some("other@example.com")), Some(&user)).unwrap();
        assert_eq!(fb.user_email.as_deref(), Some("member@example.com"));
        assert_eq!(fb.user_id, Some(user.user_id));
    }

    #[tokio::test]
    async fn submit_persists_valid_feedback_only() {
        let backend = Arc::new(MemoryBackend::new());
        let service = FeedbackService::new(backend.clone());

        assert!(service.submit(submission("short", None), None).await.is_err());
        service
            .submit(submission("Found a typo in Petrichor.", None), None)
            .await
            .unwrap();
        assert_eq!(backend.feedback().len(), 1);
    }
}
