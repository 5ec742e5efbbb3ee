//! Rack search command
//!
//! Loads the dictionary, keeps the words the rack can spell and ranks them
//! by score.

use crate::core::{Rack, ScoreError};
use crate::finder::{ScoredWord, filter_words, rank_words};
use crate::wordlists::{DEFAULT_WORDLIST, Reporter, load_or_empty};
use std::path::PathBuf;

/// Configuration for a rack search
#[derive(Debug, Clone)]
pub struct FindConfig {
    pub rack: Rack,
    pub wordlist: PathBuf,
    /// Keep at most this many words
    pub limit: Option<usize>,
    /// Drop words scoring below this
    pub min_score: u32,
}

impl FindConfig {
    #[must_use]
    pub fn new(rack: Rack) -> Self {
        Self {
            rack,
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            limit: None,
            min_score: 0,
        }
    }
}

/// Result of a rack search
#[derive(Debug, Clone)]
pub struct FindResult {
    pub rack: Rack,
    /// Words in the dictionary
    pub dictionary_size: usize,
    /// Words the rack can spell, before scoring
    pub constructible: usize,
    /// Ranked words, highest score first
    pub words: Vec<ScoredWord>,
    /// Constructible words with letters that have no tile value
    pub rejected: Vec<ScoreError>,
}

impl FindResult {
    /// Highest score found, if any word matched
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.words.first().map(|w| w.score)
    }
}

/// Run a rack search against the configured word list
///
/// A missing word list is reported through `reporter` and yields an empty result.
#[must_use]
pub fn find_words(config: &FindConfig, reporter: &dyn Reporter) -> FindResult {
    let words = load_or_empty(&config.wordlist, reporter);
    find_in_words(config, &words, reporter)
}

/// Run a rack search against words already in memory
#[must_use]
pub fn find_in_words<S: AsRef<str>>(
    config: &FindConfig,
    words: &[S],
    reporter: &dyn Reporter,
) -> FindResult {
    let valid = filter_words(words, &config.rack);
    tracing::debug!(
        rack = %config.rack,
        dictionary = words.len(),
        constructible = valid.len(),
        "Filtered word list"
    );

    let ranking = rank_words(&valid);
    for err in &ranking.rejected {
        reporter.warn(&format!("Skipping word: {err}"));
    }

    let limit = config.limit.unwrap_or(usize::MAX);
    let ranked: Vec<ScoredWord> = ranking
        .scored
        .into_iter()
        .filter(|w| w.score >= config.min_score)
        .take(limit)
        .collect();

    FindResult {
        rack: config.rack.clone(),
        dictionary_size: words.len(),
        constructible: valid.len(),
        words: ranked,
        rejected: ranking.rejected,
    }
}
