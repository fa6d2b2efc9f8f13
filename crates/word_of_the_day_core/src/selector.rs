//! crates/word_of_the_day_core/src/selector.rs
//!
//! Deterministic date -> word mapping.

use chrono::{Datelike, NaiveDate};

use crate::catalog::WordCatalog;
use crate::domain::{Category, WordEntry};

/// Days since December 31 of the previous year, so January 1 is day 1.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Returns the word for `date`, drawn from the entries allowed by `allowed`.
///
/// The same date, filter and catalog always give the same word. An empty or
/// unmatched filter selects from the whole catalog.
pub fn word_of_day<'a>(
    catalog: &WordCatalog<'a>,
    date: NaiveDate,
    allowed: Option<&[Category]>,
) -> &'a WordEntry {
    let pool = match allowed {
        Some(categories) => catalog.by_category(categories),
        None => catalog.all().iter().collect(),
    };
    let index = day_of_year(date) as usize % pool.len();
    pool[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::entry;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn january_first_is_day_one() {
        assert_eq!(day_of_year(date(2025, 1, 1)), 1);
        assert_eq!(day_of_year(date(2025, 12, 31)), 365);
        assert_eq!(day_of_year(date(2024, 12, 31)), 366);
    }

    #[test]
    fn builtin_selection_is_index_by_day() {
        let catalog = WordCatalog::builtin();
        assert_eq!(word_of_day(&catalog, date(2025, 1, 1), None).text, "Resilient");
        // Day 48 wraps to the first entry.
        assert_eq!(word_of_day(&catalog, date(2025, 2, 17), None).text, "Serendipity");
    }

    #[test]
    fn same_day_of_year_gives_same_word() {
        let catalog = WordCatalog::builtin();
        let filter = [Category::Creative, Category::Business];
        let a = word_of_day(&catalog, date(2023, 3, 10), Some(&filter[..]));
        let b = word_of_day(&catalog, date(2025, 3, 10), Some(&filter[..]));
        assert_eq!(a, b);
    }

    #[test]
    fn filtered_selection_stays_in_filter() {
        let catalog = WordCatalog::builtin();
        let filter = [Category::Academic];
        assert_eq!(word_of_day(&catalog, date(2025, 1, 1), Some(&filter[..])).text, "Empirical");

        let mut day = date(2025, 1, 1);
        while day.year() == 2025 {
            let word = word_of_day(&catalog, day, Some(&filter[..]));
            assert_eq!(word.category, Category::Academic);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn unmatched_filter_uses_full_catalog() {
        let words = [entry("Serendipity", Category::General)];
        let catalog = WordCatalog::new(&words).unwrap();
        for day in [date(2025, 1, 1), date(2025, 6, 15), date(2026, 12, 31)] {
            let word = word_of_day(&catalog, day, Some(&[Category::Academic][..]));
            assert_eq!(word.text, "Serendipity");
        }
    }
}
