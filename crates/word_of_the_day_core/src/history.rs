//! crates/word_of_the_day_core/src/history.rs
//!
//! The public record of which word was the word of the day on each date.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::catalog::WordCatalog;
use crate::domain::{DailyWord, WordEntry};
use crate::ports::{PortResult, WordHistoryStore};
use crate::selector::word_of_day;

pub const DEFAULT_HISTORY_LIMIT: u32 = 30;

pub struct WordHistory {
    store: Arc<dyn WordHistoryStore>,
    catalog: WordCatalog<'static>,
}

impl WordHistory {
    pub fn new(store: Arc<dyn WordHistoryStore>, catalog: WordCatalog<'static>) -> Self {
        Self { store, catalog }
    }

    /// Records the unfiltered word for `date`. Calling it again for the same
    /// date returns the row already stored.
    pub async fn record_today(&self, date: NaiveDate) -> PortResult<DailyWord> {
        if let Some(existing) = self.store.find_by_date(date).await? {
            return Ok(existing);
        }
        let word = word_of_day(&self.catalog, date, None);
        let stored = self
            .store
            .insert_daily_word(&DailyWord {
                word: word.text.to_string(),
                category: word.category,
                date,
            })
            .await?;
        info!(%date, word = %stored.word, "Recorded word of the day");
        Ok(stored)
    }

    /// Newest first, each paired with its catalog entry when the word is still known.
    pub async fn recent(&self, limit: u32) -> PortResult<Vec<(DailyWord, Option<&'static WordEntry>)>> {
        let rows = self.store.recent(limit).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let entry = self.catalog.find(&row.word);
                (row, entry)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[tokio::test]
    async fn record_is_idempotent_per_date() {
        let history = WordHistory::new(Arc::new(MemoryBackend::new()), WordCatalog::builtin());

        let first = history.record_today(date(1, 1)).await.unwrap();
        let again = history.record_today(date(1, 1)).await.unwrap();
        assert_eq!(first, again);
        assert_eq!(first.word, "Resilient");

        assert_eq!(history.recent(DEFAULT_HISTORY_LIMIT).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn recent_is_newest_first_and_limited() {
        let history = WordHistory::new(Arc::new(MemoryBackend::new()), WordCatalog::builtin());
        for day in 1..=5 {
            history.record_today(date(3, day)).await.unwrap();
        }

        let recent = history.recent(3).await.unwrap();
        let dates: Vec<_> = recent.iter().map(|(row, _)| row.date).collect();
        assert_eq!(dates, [date(3, 5), date(3, 4), date(3, 3)]);
        assert!(recent.iter().all(|(row, entry)| entry.map(|e| e.text) == Some(row.word.as_str())));
    }
}
