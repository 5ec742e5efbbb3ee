//! Rack solving
//!
//! Filters a word list down to the words a rack can spell, then scores and
//! ranks them.

mod filter;
mod ranker;

pub use filter::{filter_words, is_constructible};
pub use ranker::{Ranking, ScoredWord, rank_words};
