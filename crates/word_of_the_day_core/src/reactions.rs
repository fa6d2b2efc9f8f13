//! crates/word_of_the_day_core/src/reactions.rs
//!
//! Like/dislike bookkeeping for words.
//!
//! The ledger caches the aggregate counts per word and keeps that cache in
//! step with the store:
//!
//! - a successful write re-reads the word's counts from the store;
//! - a failed write re-reads them too, so the cache never shows an update that
//!   was not persisted;
//! - only one write per (word, actor) may be outstanding at a time.
//!
//! Each actor's own reaction is always read from the store.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::domain::{ActorId, ReactionCounts, ReactionKind};
use crate::ports::{PortError, PortResult, ReactionStore};

/// How long cached counts are served before the store is asked again.
pub const DEFAULT_COUNTS_TTL: Duration = Duration::from_secs(30);

/// Upper bound on the number of words with cached counts.
pub const MAX_CACHED_WORDS: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum ReactionError {
    /// Another write for the same word and actor has not finished yet.
    #[error("a reaction update is already in progress")]
    Busy,
    #[error("failed to update reaction: {0}")]
    Persistence(#[from] PortError),
}

/// What the display shows after a read or a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionSnapshot {
    pub counts: ReactionCounts,
    pub current: Option<ReactionKind>,
}

type Key = (String, ActorId);

#[derive(Debug, Clone, Copy)]
struct CachedCounts {
    counts: ReactionCounts,
    /// Taken before the store read that produced `counts`. A later ticket
    /// means a read that started later.
    ticket: u64,
    fetched_at: Instant,
}

/// Caches counts per word and serialises writes per (word, actor).
///
/// Writes through this ledger are reflected at once. Rows changed by anyone
/// else (another instance, a manual fix in the database) show up once the
/// cached entry is older than the TTL.
pub struct ReactionLedger {
    store: Arc<dyn ReactionStore>,
    ttl: Duration,
    tickets: AtomicU64,
    counts: Mutex<HashMap<String, CachedCounts>>,
    in_flight: Mutex<HashSet<Key>>,
}

// The maps only hold cached values, so a poisoned lock is still usable.
fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Clears the in-flight mark for a key when the write finishes, however it ends.
struct InFlight<'a> {
    set: &'a Mutex<HashSet<Key>>,
    key: Key,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        guard(self.set).remove(&self.key);
    }
}

impl ReactionLedger {
    pub fn new(store: Arc<dyn ReactionStore>) -> Self {
        Self::with_ttl(store, DEFAULT_COUNTS_TTL)
    }

    pub fn with_ttl(store: Arc<dyn ReactionStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            tickets: AtomicU64::new(0),
            counts: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Aggregate counts for `word`, from cache while the entry is fresh.
    pub async fn counts(&self, word: &str) -> PortResult<ReactionCounts> {
        if let Some(cached) = guard(&self.counts).get(word) {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.counts);
            }
        }
        self.load_counts(word).await
    }

    /// The actor's own reaction to `word`.
    pub async fn current_reaction(
        &self,
        word: &str,
        actor: &ActorId,
    ) -> PortResult<Option<ReactionKind>> {
        self.store.find_reaction(word, actor).await
    }

    /// Re-reads counts and, if given, the actor's reaction from the store.
    pub async fn refresh(
        &self,
        word: &str,
        actor: Option<&ActorId>,
    ) -> PortResult<ReactionSnapshot> {
        let counts = self.load_counts(word).await?;
        let current = match actor {
            Some(actor) => self.store.find_reaction(word, actor).await?,
            None => None,
        };
        Ok(ReactionSnapshot { counts, current })
    }

    pub fn is_pending(&self, word: &str, actor: &ActorId) -> bool {
        guard(&self.in_flight).contains(&(word.to_string(), actor.clone()))
    }

    /// Applies `kind` for `actor` on `word`:
    /// no reaction yet inserts it, the same reaction again removes it, and the
    /// other reaction replaces it.
    ///
    /// Never retries. On failure the cache is re-synchronised with the store
    /// before the error is returned.
    pub async fn react(
        &self,
        word: &str,
        actor: &ActorId,
        kind: ReactionKind,
    ) -> Result<ReactionSnapshot, ReactionError> {
        let _in_flight = self.begin(word, actor)?;

        match self.apply(word, actor, kind).await {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                error!(word, %actor, "Failed to update reaction: {:?}", e);
                if let Err(refresh_err) = self.load_counts(word).await {
                    warn!(word, "Could not re-read reactions after failure: {:?}", refresh_err);
                    guard(&self.counts).remove(word);
                }
                Err(ReactionError::Persistence(e))
            }
        }
    }

    fn begin(&self, word: &str, actor: &ActorId) -> Result<InFlight<'_>, ReactionError> {
        let key = (word.to_string(), actor.clone());
        if !guard(&self.in_flight).insert(key.clone()) {
            debug!(word, %actor, "Rejecting overlapping reaction update");
            return Err(ReactionError::Busy);
        }
        Ok(InFlight { set: &self.in_flight, key })
    }

    async fn apply(
        &self,
        word: &str,
        actor: &ActorId,
        kind: ReactionKind,
    ) -> PortResult<ReactionSnapshot> {
        let current = match self.store.find_reaction(word, actor).await? {
            None => {
                self.store.insert_reaction(word, actor, kind).await?;
                Some(kind)
            }
            Some(old) if old == kind => {
                self.store.delete_reaction(word, actor).await?;
                None
            }
            Some(_) => {
                self.store.update_reaction(word, actor, kind).await?;
                Some(kind)
            }
        };
        let counts = self.load_counts(word).await?;
        Ok(ReactionSnapshot { counts, current })
    }

    /// Reads counts from the store and caches them, unless a read that started
    /// later has already been cached. Returns whichever value the cache holds.
    async fn load_counts(&self, word: &str) -> PortResult<ReactionCounts> {
        let ticket = self.tickets.fetch_add(1, Ordering::SeqCst);
        let counts = self.store.count_reactions(word).await?;
        Ok(self.cache_counts(word, counts, ticket))
    }

    fn cache_counts(&self, word: &str, counts: ReactionCounts, ticket: u64) -> ReactionCounts {
        let mut cache = guard(&self.counts);
        if let Some(cached) = cache.get(word) {
            if cached.ticket > ticket {
                return cached.counts;
            }
        } else if cache.len() >= MAX_CACHED_WORDS {
            let ttl = self.ttl;
            cache.retain(|_, cached| cached.fetched_at.elapsed() < ttl);
            if cache.len() >= MAX_CACHED_WORDS {
                cache.clear();
            }
        }
        cache.insert(
            word.to_string(),
            CachedCounts {
                counts,
                ticket,
                fetched_at: Instant::now(),
            },
        );
        counts
    }

    #[cfg(test)]
    fn cached_words(&self) -> usize {
        guard(&self.counts).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Semaphore;
    use uuid::Uuid;

    fn user(n: u128) -> ActorId {
        ActorId::User(Uuid::from_u128(n))
    }

    /// Delegates to a memory backend, failing writes while `fail_writes` is set.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryBackend,
        fail_writes: AtomicBool,
    }

    impl FlakyStore {
        fn check(&self) -> PortResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(PortError::Unexpected("connection reset".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ReactionStore for FlakyStore {
        async fn count_reactions(&self, word: &str) -> PortResult<ReactionCounts> {
            self.inner.count_reactions(word).await
        }
        async fn find_reaction(&self, word: &str, actor: &ActorId) -> PortResult<Option<ReactionKind>> {
            self.inner.find_reaction(word, actor).await
        }
        async fn insert_reaction(&self, word: &str, actor: &ActorId, kind: ReactionKind) -> PortResult<()> {
            self.check()?;
            self.inner.insert_reaction(word, actor, kind).await
        }
        async fn update_reaction(&self, word: &str, actor: &ActorId, kind: ReactionKind) -> PortResult<()> {
            self.check()?;
            self.inner.update_reaction(word, actor, kind).await
        }
        async fn delete_reaction(&self, word: &str, actor: &ActorId) -> PortResult<()> {
            self.check()?;
            self.inner.delete_reaction(word, actor).await
        }
    }

    /// Holds every insert until a permit is released.
    struct GatedStore {
        inner: MemoryBackend,
        gate: Semaphore,
    }

    #[async_trait]
    impl ReactionStore for GatedStore {
        async fn count_reactions(&self, word: &str) -> PortResult<ReactionCounts> {
            self.inner.count_reactions(word).await
        }
        async fn find_reaction(&self, word: &str, actor: &ActorId) -> PortResult<Option<ReactionKind>> {
            self.inner.find_reaction(word, actor).await
        }
        async fn insert_reaction(&self, word: &str, actor: &ActorId, kind: ReactionKind) -> PortResult<()> {
            let _permit = self
                .gate
                .acquire()
                .await
                .map_err(|e| PortError::Unexpected(e.to_string()))?;
            self.inner.insert_reaction(word, actor, kind).await
        }
        async fn update_reaction(&self, word: &str, actor: &ActorId, kind: ReactionKind) -> PortResult<()> {
            self.inner.update_reaction(word, actor, kind).await
        }
        async fn delete_reaction(&self, word: &str, actor: &ActorId) -> PortResult<()> {
            self.inner.delete_reaction(word, actor).await
        }
    }

    /// Holds the next `count_reactions` call after it has read the store,
    /// until a permit is released.
    struct StalledCounts {
        inner: MemoryBackend,
        stall_next: AtomicBool,
        stalled: AtomicBool,
        gate: Semaphore,
    }

    #[async_trait]
    impl ReactionStore for StalledCounts {
        async fn count_reactions(&self, word: &str) -> PortResult<ReactionCounts> {
            let counts = self.inner.count_reactions(word).await?;
            if self.stall_next.swap(false, Ordering::SeqCst) {
                self.stalled.store(true, Ordering::SeqCst);
                let _permit = self
                    .gate
                    .acquire()
                    .await
                    .map_err(|e| PortError::Unexpected(e.to_string()))?;
            }
            Ok(counts)
        }
        async fn find_reaction(&self, word: &str, actor: &ActorId) -> PortResult<Option<ReactionKind>> {
            self.inner.find_reaction(word, actor).await
        }
        async fn insert_reaction(&self, word: &str, actor: &ActorId, kind: ReactionKind) -> PortResult<()> {
            self.inner.insert_reaction(word, actor, kind).await
        }
        async fn update_reaction(&self, word: &str, actor: &ActorId, kind: ReactionKind) -> PortResult<()> {
            self.inner.update_reaction(word, actor, kind).await
        }
        async fn delete_reaction(&self, word: &str, actor: &ActorId) -> PortResult<()> {
            self.inner.delete_reaction(word, actor).await
        }
    }

    #[tokio::test]
    async fn two_actors_and_a_toggle_off() {
        let ledger = ReactionLedger::new(Arc::new(MemoryBackend::new()));
        let (u1, u2) = (user(1), user(2));

        assert_eq!(ledger.counts("Resilient").await.unwrap(), ReactionCounts::new(0, 0));

        let s = ledger.react("Resilient", &u1, ReactionKind::Like).await.unwrap();
        assert_eq!(s.counts, ReactionCounts::new(1, 0));

        let s = ledger.react("Resilient", &u2, ReactionKind::Dislike).await.unwrap();
        assert_eq!(s.counts, ReactionCounts::new(1, 1));

        let s = ledger.react("Resilient", &u1, ReactionKind::Like).await.unwrap();
        assert_eq!(s.counts, ReactionCounts::new(0, 1));
        assert_eq!(s.current, None);
    }

    #[tokio::test]
    async fn same_reaction_twice_restores_counts() {
        let store = Arc::new(MemoryBackend::new());
        let ledger = ReactionLedger::new(store.clone());
        let actor = ActorId::Visitor(crate::domain::VisitorId::new("v-1"));
        ledger.react("Axiom", &user(9), ReactionKind::Dislike).await.unwrap();
        let before = ledger.counts("Axiom").await.unwrap();

        ledger.react("Axiom", &actor, ReactionKind::Like).await.unwrap();
        ledger.react("Axiom", &actor, ReactionKind::Like).await.unwrap();

        assert_eq!(ledger.counts("Axiom").await.unwrap(), before);
        assert_eq!(ledger.current_reaction("Axiom", &actor).await.unwrap(), None);
        assert_eq!(store.reactions().len(), 1);
    }

    #[tokio::test]
    async fn switching_moves_one_count() {
        let store = Arc::new(MemoryBackend::new());
        let ledger = ReactionLedger::new(store.clone());
        let actor = user(1);

        let after_like = ledger.react("Pivot", &actor, ReactionKind::Like).await.unwrap();
        let after_switch = ledger.react("Pivot", &actor, ReactionKind::Dislike).await.unwrap();

        assert_eq!(after_switch.counts.likes, after_like.counts.likes - 1);
        assert_eq!(after_switch.counts.dislikes, after_like.counts.dislikes + 1);
        assert_eq!(after_switch.current, Some(ReactionKind::Dislike));

        // The switch is an in-place update: still one row for this actor.
        let rows = store.reactions();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, ReactionKind::Dislike);
    }

    #[tokio::test]
    async fn user_and_visitor_are_separate_actors() {
        let ledger = ReactionLedger::new(Arc::new(MemoryBackend::new()));
        let signed_in = user(5);
        let visitor = ActorId::Visitor(crate::domain::VisitorId::new("v-5"));

        ledger.react("Solace", &signed_in, ReactionKind::Like).await.unwrap();
        ledger.react("Solace", &visitor, ReactionKind::Like).await.unwrap();

        assert_eq!(ledger.counts("Solace").await.unwrap(), ReactionCounts::new(2, 0));
        assert_eq!(
            ledger.current_reaction("Solace", &visitor).await.unwrap(),
            Some(ReactionKind::Like)
        );
    }

    #[tokio::test]
    async fn failed_write_resyncs_from_store() {
        let store = Arc::new(FlakyStore::default());
        let ledger = ReactionLedger::new(store.clone());
        let actor = user(1);

        ledger.react("Ennui", &actor, ReactionKind::Like).await.unwrap();
        // Another client removes the like behind the ledger's back.
        store.inner.delete_reaction("Ennui", &actor).await.unwrap();
        store.fail_writes.store(true, Ordering::SeqCst);

        let err = ledger.react("Ennui", &actor, ReactionKind::Dislike).await.unwrap_err();
        assert!(matches!(err, ReactionError::Persistence(_)));

        // Cache now matches the store, not the optimistic guess.
        assert_eq!(ledger.counts("Ennui").await.unwrap(), ReactionCounts::new(0, 0));
        assert_eq!(ledger.current_reaction("Ennui", &actor).await.unwrap(), None);
        assert!(!ledger.is_pending("Ennui", &actor));
    }

    #[tokio::test]
    async fn overlapping_write_is_rejected() {
        let store = Arc::new(GatedStore {
            inner: MemoryBackend::new(),
            gate: Semaphore::new(0),
        });
        let ledger = Arc::new(ReactionLedger::new(store.clone()));
        let actor = user(3);

        let first = tokio::spawn({
            let ledger = ledger.clone();
            let actor = actor.clone();
            async move { ledger.react("Halcyon", &actor, ReactionKind::Like).await }
        });
        while !ledger.is_pending("Halcyon", &actor) {
            tokio::task::yield_now().await;
        }

        let second = ledger.react("Halcyon", &actor, ReactionKind::Like).await;
        assert!(matches!(second, Err(ReactionError::Busy)));

        // A different actor is not blocked by it.
        store.gate.add_permits(2);
        ledger.react("Halcyon", &user(4), ReactionKind::Dislike).await.unwrap();

        let snapshot = first.await.unwrap().unwrap();
        assert_eq!(snapshot.current, Some(ReactionKind::Like));
        assert!(!ledger.is_pending("Halcyon", &actor));
        assert_eq!(ledger.refresh("Halcyon", None).await.unwrap().counts, ReactionCounts::new(1, 1));
    }

    #[tokio::test]
    async fn slow_read_does_not_overwrite_a_newer_write() {
        let store = Arc::new(StalledCounts {
            inner: MemoryBackend::new(),
            stall_next: AtomicBool::new(true),
            stalled: AtomicBool::new(false),
            gate: Semaphore::new(0),
        });
        let ledger = Arc::new(ReactionLedger::new(store.clone()));

        let slow = tokio::spawn({
            let ledger = ledger.clone();
            async move { ledger.counts("Resilient").await }
        });
        while !store.stalled.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }

        let written = ledger.react("Resilient", &user(1), ReactionKind::Like).await.unwrap();
        assert_eq!(written.counts, ReactionCounts::new(1, 0));

        store.gate.add_permits(1);
        let slow = slow.await.unwrap().unwrap();
        assert_eq!(slow, ReactionCounts::new(1, 0));

        let in_store = store.inner.count_reactions("Resilient").await.unwrap();
        assert_eq!(ledger.counts("Resilient").await.unwrap(), in_store);
    }

    #[tokio::test]
    async fn outside_changes_show_after_ttl() {
        let store = Arc::new(MemoryBackend::new());
        let cached = ReactionLedger::new(store.clone());
        let uncached = ReactionLedger::with_ttl(store.clone(), Duration::ZERO);
        assert_eq!(cached.counts("Zenith").await.unwrap(), ReactionCounts::new(0, 0));
        assert_eq!(uncached.counts("Zenith").await.unwrap(), ReactionCounts::new(0, 0));

        store.insert_reaction("Zenith", &user(7), ReactionKind::Dislike).await.unwrap();

        assert_eq!(cached.counts("Zenith").await.unwrap(), ReactionCounts::new(0, 0));
        assert_eq!(uncached.counts("Zenith").await.unwrap(), ReactionCounts::new(0, 1));
    }

    #[tokio::test]
    async fn cache_is_bounded_and_keeps_no_actor_state() {
        let ledger = ReactionLedger::new(Arc::new(MemoryBackend::new()));
        for n in 0..(MAX_CACHED_WORDS + 200) {
            let visitor = ActorId::Visitor(crate::domain::VisitorId::new(format!("v-{n}")));
            let word = format!("word-{n}");
            ledger.counts(&word).await.unwrap();
            ledger.current_reaction(&word, &visitor).await.unwrap();
            assert!(ledger.cached_words() <= MAX_CACHED_WORDS);
        }
    }
}
