pub mod activity;
pub mod catalog;
pub mod domain;
pub mod feedback;
pub mod filter;
pub mod history;
pub mod memory;
pub mod ports;
pub mod preferences;
pub mod quiz;
pub mod reactions;
pub mod selector;
pub mod shuffle;

pub use catalog::{CatalogError, WordCatalog};
pub use domain::{
    ActionType, ActorId, Category, DailyWord, Feedback, FeedbackKind, Quote, ReactionCounts,
    ReactionKind, ReactionRecord, User, UserAction, UserPreferences, VisitorId, WordDisplay,
    WordEntry,
};
pub use ports::{
    ActivityLogStore, AuthSessionStore, FeedbackStore, KeyValueStore, PortError, PortResult,
    PreferencesStore, ReactionStore, WordHistoryStore,
};
pub use reactions::{ReactionError, ReactionLedger, ReactionSnapshot};
