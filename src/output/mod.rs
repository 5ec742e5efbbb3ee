//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_results, print_summary, write_results};
pub use formatters::format_scored_word;
