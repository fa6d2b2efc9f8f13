//! crates/word_of_the_day_core/src/catalog/mod.rs
//!
//! Read-only lookups over the fixed vocabulary.

mod words;

use crate::domain::{Category, WordEntry};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("a word catalog needs at least one entry")]
    Empty,
}

/// A non-empty, ordered list of word entries.
#[derive(Debug, Clone, Copy)]
pub struct WordCatalog<'a> {
    entries: &'a [WordEntry],
}

impl WordCatalog<'static> {
    /// The compiled-in vocabulary.
    pub fn builtin() -> Self {
        Self { entries: words::WORDS }
    }
}

impl<'a> WordCatalog<'a> {
    pub fn new(entries: &'a [WordEntry]) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// Every entry, in stored order.
    pub fn all(&self) -> &'a [WordEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries whose category is in `categories`, in stored order.
    ///
    /// Falls back to the whole catalog when `categories` is empty or nothing
    /// matches, so the result is never empty.
    pub fn by_category(&self, categories: &[Category]) -> Vec<&'a WordEntry> {
        let matches: Vec<&'a WordEntry> = self
            .entries
            .iter()
            .filter(|w| categories.contains(&w.category))
            .collect();

        if matches.is_empty() {
            tracing::debug!(?categories, "category filter matched nothing, using full catalog");
            return self.entries.iter().collect();
        }
        matches
    }

    /// Looks an entry up by its word text.
    pub fn find(&self, text: &str) -> Option<&'a WordEntry> {
        self.entries.iter().find(|w| w.text == text)
    }

    /// Distinct categories present in the catalog.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.entries.iter().any(|w| w.category == *c))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn entry(text: &'static str, category: Category) -> WordEntry {
        WordEntry {
            text,
            pronunciation: "",
            part_of_speech: "noun",
            definition: "A test word, used in tests.",
            example: "",
            etymology: "From Latin testum, a pot.",
            category,
            quote: None,
        }
    }

    #[test]
    fn builtin_catalog_covers_every_category() {
        let catalog = WordCatalog::builtin();
        assert_eq!(catalog.len(), 48);
        assert_eq!(catalog.all()[0].text, "Serendipity");
        assert_eq!(catalog.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn builtin_words_are_unique() {
        let catalog = WordCatalog::builtin();
        for (i, w) in catalog.all().iter().enumerate() {
            assert_eq!(catalog.find(w.text).map(|found| found.text), Some(w.text));
            assert!(
                catalog.all()[i + 1..].iter().all(|other| other.text != w.text),
                "duplicate word {}",
                w.text
            );
        }
    }

    #[test]
    fn by_category_preserves_order() {
        let catalog = WordCatalog::builtin();
        let academic: Vec<_> = catalog
            .by_category(&[Category::Academic])
            .into_iter()
            .map(|w| w.text)
            .collect();
        assert_eq!(
            academic,
            ["Paradigm", "Empirical", "Synthesis", "Juxtaposition", "Axiom", "Dichotomy"]
        );
    }

    #[test]
    fn empty_or_unmatched_filter_falls_back_to_all() {
        let words = [entry("Serendipity", Category::General), entry("Ennui", Category::Mindfulness)];
        let catalog = WordCatalog::new(&words).unwrap();

        let all: Vec<_> = catalog.all().iter().collect();
        assert_eq!(catalog.by_category(&[]), all);
        assert_eq!(catalog.by_category(&[Category::Business]), all);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(WordCatalog::new(&[]), Err(CatalogError::Empty)));
    }
}
