//! Rack Words
//!
//! Finds every dictionary word that can be spelled from a Scrabble rack and
//! ranks the results by tile score.
//!
//! # Quick Start
//!
//! ```rust
//! use rack_words::core::Rack;
//! use rack_words::finder::{filter_words, rank_words};
//!
//! let rack = Rack::new("ZAEFIEE");
//! let words = ["feeze", "faze", "za", "fe", "nope"];
//!
//! let ranking = rank_words(&filter_words(&words, &rack));
//! for scored in &ranking.scored {
//!     println!("{scored}");
//! }
//! assert_eq!(ranking.scored[0].score, 17);
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod finder;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
