//! crates/word_of_the_day_core/src/quiz.rs
//!
//! A three-option "which fact is true?" quiz built from a word's own fields.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::domain::WordEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub text: String,
    pub is_correct: bool,
}

/// Where the etymology says the word comes from: the text after the first
/// lowercase "from", cut at the next comma. The presence check ignores case
/// but the split does not, so a lone leading "From" gives "ancient origins".
fn origin(etymology: &str) -> String {
    if !etymology.to_lowercase().contains("from") {
        return etymology.split('.').next().unwrap_or("").trim().to_string();
    }
    let fragment = etymology
        .split("from")
        .nth(1)
        .map(|rest| rest.trim().split(',').next().unwrap_or(""))
        .unwrap_or("");
    if fragment.is_empty() {
        "ancient origins".to_string()
    } else {
        fragment.to_string()
    }
}

fn true_facts(word: &WordEntry) -> [String; 3] {
    let w = word.text;
    let first_clause = word.definition.split(',').next().unwrap_or("").to_lowercase();
    [
        format!("The word \"{w}\" comes from {}", origin(word.etymology)),
        format!("\"{w}\" is a {}", word.part_of_speech.to_lowercase()),
        format!("One meaning of \"{w}\" is: {first_clause}"),
    ]
}

fn false_facts(word: &WordEntry) -> [String; 8] {
    let w = word.text;
    [
        format!("The word \"{w}\" was coined in the 21st century by internet culture"),
        format!("\"{w}\" originally meant \"a type of ancient currency\""),
        format!("The word \"{w}\" has exactly 47 different meanings in English"),
        format!("\"{w}\" was first used by Shakespeare in his lost play"),
        "This word is banned from use in formal academic writing".to_string(),
        format!("\"{w}\" is derived from an extinct language spoken only in Antarctica"),
        "The word was invented by a 5-year-old in a spelling bee".to_string(),
        format!("\"{w}\" is the most mispronounced word in the English language"),
    ]
}

/// One true fact and two distinct false ones, in random order.
pub fn generate(word: &WordEntry, rng: &mut impl Rng) -> Vec<QuizOption> {
    let truths = true_facts(word);
    let falsehoods = false_facts(word);

    let mut options = Vec::with_capacity(3);
    if let Some(fact) = truths.choose(rng) {
        options.push(QuizOption {
            text: fact.clone(),
            is_correct: true,
        });
    }
    options.extend(falsehoods.choose_multiple(rng, 2).map(|fact| QuizOption {
        text: fact.clone(),
        is_correct: false,
    }));
    options.shuffle(rng);
    options
}

/// A single sitting of the quiz: the first answer sticks until reset.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    options: Vec<QuizOption>,
    selected: Option<usize>,
}

impl QuizAttempt {
    pub fn new(options: Vec<QuizOption>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    /// Records the answer and returns whether it was correct. Later answers,
    /// and out-of-range indexes, are ignored and return `None`.
    pub fn answer(&mut self, index: usize) -> Option<bool> {
        if self.selected.is_some() {
            return None;
        }
        let option = self.options.get(index)?;
        self.selected = Some(index);
        Some(option.is_correct)
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_correct(&self) -> bool {
        self.selected
            .and_then(|i| self.options.get(i))
            .is_some_and(|o| o.is_correct)
    }

    /// "Play again": same options, answer cleared.
    pub fn reset(&mut self) {
        self.selected = None;
    }
}
