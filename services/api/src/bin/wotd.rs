//! services/api/src/bin/wotd.rs
//!
//! Local command-line client. Runs the selection rules against the built-in
//! catalog and keeps the category override and visitor id in a JSON file, the
//! way the browser keeps them in local storage.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use api_lib::{adapters::JsonFileStore, error::ApiError};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_of_the_day_core::filter::{load_or_mint_visitor_id, CategoryFilterState};
use word_of_the_day_core::quiz::{self, QuizAttempt};
use word_of_the_day_core::selector::word_of_day;
use word_of_the_day_core::{shuffle, Category, PortError, WordCatalog, WordEntry};

#[derive(Parser, Debug)]
#[command(name = "wotd", about = "Word of the day, from the terminal")]
struct Cli {
    /// File holding the category override and visitor id.
    #[arg(long, env = "WOTD_STORE", default_value = ".wotd.json", global = true)]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the word of the day.
    Today {
        /// Another date, as YYYY-MM-DD.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show a random word other than the current one.
    Shuffle {
        /// The word on screen now. Defaults to today's word.
        #[arg(long)]
        current: Option<String>,
    },
    /// Set the category override, or `all` to clear it.
    Filter {
        #[arg(value_parser = parse_filter)]
        category: CategoryChoice,
    },
    /// List the catalog, optionally for one category.
    Words {
        #[arg(long)]
        category: Option<Category>,
    },
    /// Quiz yourself on a word. Defaults to today's word.
    Quiz {
        word: Option<String>,
        /// Answer with an option number (1-3).
        #[arg(long)]
        answer: Option<usize>,
    },
    /// Print this profile's anonymous visitor id, minting one if needed.
    Visitor,
}

/// A category name, or `all` for none.
#[derive(Clone, Debug)]
struct CategoryChoice(Option<Category>);

fn parse_filter(raw: &str) -> Result<CategoryChoice, String> {
    if raw == "all" {
        return Ok(CategoryChoice(None));
    }
    Category::from_str(raw)
        .map(|c| CategoryChoice(Some(c)))
        .map_err(|e| e.to_string())
}

fn print_word(word: &WordEntry) {
    println!("{} {} ({})", word.text, word.pronunciation, word.part_of_speech);
    println!("  [{}] {}", word.category, word.definition);
    println!("  e.g. {}", word.example);
    println!("  origin: {}", word.etymology);
    if let Some(quote) = &word.quote {
        println!("  \"{}\" ({}, {})", quote.text, quote.book_title, quote.author);
    }
}

fn lookup<'a>(catalog: &WordCatalog<'a>, text: &str) -> Result<&'a WordEntry, ApiError> {
    catalog
        .find(text)
        .ok_or_else(|| PortError::NotFound(format!("word '{text}'")).into())
}

fn today<'a>(catalog: &WordCatalog<'a>, filter: &CategoryFilterState) -> &'a WordEntry {
    let allowed = filter.effective_categories(None);
    word_of_day(catalog, Utc::now().date_naive(), allowed.as_deref())
}

fn main() -> Result<(), ApiError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let store = Arc::new(JsonFileStore::open(&cli.store)?);
    debug!(store = %store.path().display(), "Client store opened");

    let catalog = WordCatalog::builtin();
    let mut filter = CategoryFilterState::load(store.clone());

    match cli.command {
        Command::Today { date } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            let allowed = filter.effective_categories(None);
            print_word(word_of_day(&catalog, date, allowed.as_deref()));
        }
        Command::Shuffle { current } => {
            let current = match current {
                Some(text) => lookup(&catalog, &text)?,
                None => today(&catalog, &filter),
            };
            let next = shuffle::next_word(&catalog, current, filter.get(), &mut rand::thread_rng());
            print_word(next);
        }
        Command::Filter {
            category: CategoryChoice(category),
        } => {
            filter.set(category)?;
            match category {
                Some(c) => println!("Showing {c} words"),
                None => println!("Showing all categories"),
            }
        }
        Command::Words { category } => {
            let words: Vec<&WordEntry> = match category {
                Some(c) => catalog.by_category(&[c]),
                None => catalog.all().iter().collect(),
            };
            for word in words {
                println!("{:<16} {}", word.text, word.category);
            }
        }
        Command::Quiz { word, answer } => {
            let entry = match word {
                Some(text) => lookup(&catalog, &text)?,
                None => today(&catalog, &filter),
            };
            let mut attempt = QuizAttempt::new(quiz::generate(entry, &mut rand::thread_rng()));
            println!("Which fact about \"{}\" is true?", entry.text);
            for (i, option) in attempt.options().iter().enumerate() {
                println!("  {}. {}", i + 1, option.text);
            }
            if let Some(choice) = answer {
                match choice.checked_sub(1).and_then(|i| attempt.answer(i)) {
                    Some(true) => println!("Correct!"),
                    Some(false) => println!("Not quite."),
                    None => println!("Pick a number from 1 to {}", attempt.options().len()),
                }
            }
        }
        Command::Visitor => {
            println!("{}", load_or_mint_visitor_id(store.as_ref())?);
        }
    }

    Ok(())
}
