//! Rack compatibility filter

use crate::core::Rack;
use rustc_hash::FxHashMap;

/// Check whether `word` can be spelled from the tiles in `rack`
///
/// Every letter of the word must appear in the rack at least as many times as
/// it appears in the word. Both sides are compared case-insensitively.
/// Characters with no tile value are not rejected here, they simply need a
/// matching tile in the rack.
///
/// # Examples
/// ```
/// use rack_words::core::Rack;
/// use rack_words::finder::is_constructible;
///
/// let rack = Rack::new("ZAEFIEE");
/// assert!(is_constructible("feeze", &rack));
/// assert!(!is_constructible("fezzes", &rack));
/// ```
#[must_use]
pub fn is_constructible(word: &str, rack: &Rack) -> bool {
    let mut needed: FxHashMap<char, u32> = FxHashMap::default();
    for ch in word.chars().flat_map(char::to_lowercase) {
        *needed.entry(ch).or_insert(0) += 1;
    }

    needed
        .iter()
        .all(|(&letter, &count)| count <= rack.count(letter))
}

/// Keep the words `rack` can spell, preserving their order
#[must_use]
pub fn filter_words<'a, S: AsRef<str>>(words: &'a [S], rack: &Rack) -> Vec<&'a str> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| is_constructible(word, rack))
        .collect()
}
