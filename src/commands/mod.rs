//! Command implementations

pub mod find;

pub use find::{FindConfig, FindResult, find_in_words, find_words};
