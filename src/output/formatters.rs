//! Formatting utilities for terminal output

use crate::finder::ScoredWord;

/// Format a scored word as `<score> <word>`
#[must_use]
pub fn format_scored_word(scored: &ScoredWord) -> String {
    scored.to_string()
}

/// Create a bar of `width` cells, `value / max` of them filled
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width / max as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
