//! crates/word_of_the_day_core/src/shuffle.rs
//!
//! "Try another word": a random pick that never repeats the current word.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::WordCatalog;
use crate::domain::{Category, WordEntry};

/// Picks uniformly among the pool entries other than `current`.
///
/// When the pool holds nothing but `current`, `current` is returned unchanged.
pub fn next_word<'a>(
    catalog: &WordCatalog<'a>,
    current: &'a WordEntry,
    filter: Option<Category>,
    rng: &mut impl Rng,
) -> &'a WordEntry {
    let pool = match filter {
        Some(category) => catalog.by_category(&[category]),
        None => catalog.all().iter().collect(),
    };
    let candidates: Vec<&'a WordEntry> = pool
        .into_iter()
        .filter(|w| w.text != current.text)
        .collect();

    candidates.choose(rng).copied().unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::entry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_repeats_current_word() {
        let catalog = WordCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let mut current = &catalog.all()[0];
        for _ in 0..200 {
            let next = next_word(&catalog, current, None, &mut rng);
            assert_ne!(next.text, current.text);
            current = next;
        }
    }

    #[test]
    fn respects_filter() {
        let catalog = WordCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let current = catalog.find("Serendipity").unwrap();
        for _ in 0..100 {
            let next = next_word(&catalog, current, Some(Category::Business), &mut rng);
            assert_eq!(next.category, Category::Business);
        }
    }

    #[test]
    fn single_word_pool_returns_current() {
        let words = [
            entry("Serendipity", Category::General),
            entry("Paradigm", Category::Academic),
        ];
        let catalog = WordCatalog::new(&words).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let only_academic = &words[1];
        let next = next_word(&catalog, only_academic, Some(Category::Academic), &mut rng);
        assert_eq!(next.text, "Paradigm");
    }

    #[test]
    fn eventually_reaches_every_candidate() {
        let catalog = WordCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let current = catalog.find("Synergy").unwrap();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(next_word(&catalog, current, Some(Category::Business), &mut rng).text);
        }
        assert_eq!(seen.len(), 5);
        assert!(!seen.contains("Synergy"));
    }
}
