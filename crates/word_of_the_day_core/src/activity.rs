//! crates/word_of_the_day_core/src/activity.rs
//!
//! Insert-only audit trail of what visitors do, plus word-display records.
//! Logging is best effort: failures are written to the log and dropped.

use std::sync::{Arc, Mutex};

use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::{ActionType, User, UserAction, WordDisplay};
use crate::ports::ActivityLogStore;

/// Button label the shuffle control logs under.
pub const SHUFFLE_BUTTON: &str = "Try another word";

pub fn classify_browser(user_agent: &str) -> &'static str {
    if user_agent.contains("Firefox") {
        "Firefox"
    } else if user_agent.contains("Edg") {
        "Edge"
    } else if user_agent.contains("Chrome") {
        "Chrome"
    } else if user_agent.contains("Safari") {
        "Safari"
    } else if user_agent.contains("Opera") || user_agent.contains("OPR") {
        "Opera"
    } else {
        "Unknown"
    }
}

pub fn classify_device(user_agent: &str) -> &'static str {
    let lower = user_agent.to_lowercase();
    if lower.contains("mobi") || lower.contains("android") {
        "Mobile"
    } else if lower.contains("tablet") || lower.contains("ipad") {
        "Tablet"
    } else {
        "Desktop"
    }
}

pub fn classify_os(user_agent: &str) -> &'static str {
    if user_agent.contains("Win") {
        "Windows"
    } else if user_agent.contains("Mac") {
        "macOS"
    } else if user_agent.contains("Linux") {
        "Linux"
    } else if user_agent.contains("Android") {
        "Android"
    } else if ["iOS", "iPhone", "iPad"].iter().any(|t| user_agent.contains(t)) {
        "iOS"
    } else {
        "Unknown"
    }
}

/// What the client reports about itself with each action.
#[derive(Debug, Clone, Default)]
pub struct ClientContext {
    pub session_id: String,
    pub user_agent: Option<String>,
    pub screen_resolution: Option<String>,
    pub language: Option<String>,
    pub referrer: Option<String>,
}

pub struct ActivityLogger {
    store: Arc<dyn ActivityLogStore>,
    last_visited: Mutex<Option<String>>,
}

impl ActivityLogger {
    pub fn new(store: Arc<dyn ActivityLogStore>) -> Self {
        Self {
            store,
            last_visited: Mutex::new(None),
        }
    }

    pub fn build_action(
        user_id: Option<Uuid>,
        client: &ClientContext,
        action_type: ActionType,
        page_path: &str,
        element_info: Option<&str>,
    ) -> UserAction {
        let ua = client.user_agent.as_deref().unwrap_or("");
        UserAction {
            user_id,
            session_id: client.session_id.clone(),
            action_type,
            page_path: page_path.to_string(),
            element_info: element_info.map(str::to_string),
            browser: classify_browser(ua).to_string(),
            device: classify_device(ua).to_string(),
            os: classify_os(ua).to_string(),
            screen_resolution: client.screen_resolution.clone(),
            language: client.language.clone(),
            referrer: client.referrer.clone().filter(|r| !r.is_empty()),
            user_agent: client.user_agent.clone(),
        }
    }

    /// Records an action. Never fails the caller.
    pub async fn log(
        &self,
        user: Option<&User>,
        client: &ClientContext,
        action_type: ActionType,
        page_path: &str,
        element_info: Option<&str>,
    ) {
        let action = Self::build_action(
            user.map(|u| u.user_id),
            client,
            action_type,
            page_path,
            element_info,
        );
        if let Err(e) = self.store.insert_action(&action).await {
            error!("Failed to log action: {:?}", e);
        }
    }

    /// Logs a page visit unless `page_path` was the last page logged by this logger.
    pub async fn page_visit(&self, user: Option<&User>, client: &ClientContext, page_path: &str) {
        {
            let mut last = self
                .last_visited
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if last.as_deref() == Some(page_path) {
                return;
            }
            *last = Some(page_path.to_string());
        }
        self.log(user, client, ActionType::PageVisit, page_path, None).await;
    }

    pub async fn button_click(
        &self,
        user: Option<&User>,
        client: &ClientContext,
        page_path: &str,
        button: &str,
    ) {
        self.log(user, client, ActionType::ButtonClick, page_path, Some(button))
            .await;
    }

    /// Records that `word` was shown. Never fails the caller.
    pub async fn word_displayed(&self, user: Option<&User>, session_id: &str, word: &str) {
        let display = WordDisplay {
            word: word.to_string(),
            session_id: session_id.to_string(),
            user_id: user.map(|u| u.user_id),
            user_email: user.and_then(|u| u.email.clone()),
        };
        if let Err(e) = self.store.insert_word_display(&display).await {
            warn!("Failed to record word display: {:?}", e);
        }
    }

    /// A shuffle is both a button click and a new word on screen.
    pub async fn shuffled(
        &self,
        user: Option<&User>,
        client: &ClientContext,
        page_path: &str,
        word: &str,
    ) {
        self.button_click(user, client, page_path, SHUFFLE_BUTTON).await;
        self.word_displayed(user, &client.session_id, word).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::ports::{PortError, PortResult};
    use async_trait::async_trait;

    const FIREFOX_WIN: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0";
    const EDGE_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0";
    const SAFARI_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";

    fn client() -> ClientContext {
        ClientContext {
            session_id: "s-1".to_string(),
            user_agent: Some(FIREFOX_WIN.to_string()),
            screen_resolution: Some("1920x1080".to_string()),
            language: Some("en-US".to_string()),
            referrer: Some(String::new()),
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl ActivityLogStore for BrokenStore {
        async fn insert_action(&self, _action: &UserAction) -> PortResult<()> {
            Err(PortError::Unexpected("down".to_string()))
        }
        async fn insert_word_display(&self, _display: &WordDisplay) -> PortResult<()> {
            Err(PortError::Unexpected("down".to_string()))
        }
    }

    #[test]
    fn classifies_desktop_browsers() {
        assert_eq!(classify_browser(FIREFOX_WIN), "Firefox");
        assert_eq!(classify_browser(EDGE_WIN), "Edge");
        assert_eq!(classify_browser(SAFARI_MAC), "Safari");
        assert_eq!(classify_browser("curl/8.4.0"), "Unknown");

        assert_eq!(classify_os(FIREFOX_WIN), "Windows");
        assert_eq!(classify_os(SAFARI_MAC), "macOS");
        assert_eq!(classify_device(SAFARI_MAC), "Desktop");
        assert_eq!(
            classify_device("Mozilla/5.0 (Linux; Android 14) Mobile Safari/537.36"),
            "Mobile"
        );
    }

    #[test]
    fn empty_referrer_is_dropped() {
        let action = ActivityLogger::build_action(None, &client(), ActionType::PageVisit, "/", None);
        assert_eq!(action.referrer, None);
        assert_eq!(action.browser, "Firefox");
        assert_eq!(action.os, "Windows");
        assert_eq!(action.device, "Desktop");
    }

    #[tokio::test]
    async fn repeated_page_visit_is_logged_once() {
        let backend = Arc::new(MemoryBackend::new());
        let logger = ActivityLogger::new(backend.clone());
        let client = client();

        logger.page_visit(None, &client, "/").await;
        logger.page_visit(None, &client, "/").await;
        logger.page_visit(None, &client, "/history").await;
        logger.page_visit(None, &client, "/").await;

        let paths: Vec<_> = backend.actions().into_iter().map(|a| a.page_path).collect();
        assert_eq!(paths, ["/", "/history", "/"]);
    }

    #[tokio::test]
    async fn shuffle_logs_click_and_display() {
        let backend = Arc::new(MemoryBackend::new());
        let logger = ActivityLogger::new(backend.clone());
        let user = User {
            user_id: Uuid::from_u128(8),
            email: Some("reader@example.com".to_string()),
        };

        logger.shuffled(Some(&user), &client(), "/", "Ennui").await;

        let actions = backend.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action_type, ActionType::ButtonClick);
        assert_eq!(actions[0].element_info.as_deref(), Some(SHUFFLE_BUTTON));
        assert_eq!(actions[0].user_id, Some(user.user_id));

        let displays = backend.displays();
        assert_eq!(displays.len(), 1);
        assert_eq!(displays[0].word, "Ennui");
        assert_eq!(displays[0].user_email.as_deref(), Some("reader@example.com"));
    }

    #[tokio::test]
    async fn store_failures_are_swallowed() {
        let logger = ActivityLogger::new(Arc::new(BrokenStore));
        logger.page_visit(None, &client(), "/").await;
        logger.word_displayed(None, "s-1", "Ennui").await;
    }
}
