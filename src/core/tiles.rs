//! Letter values and word scoring
//!
//! Standard Scrabble tile values. Blank tiles are not supported.

use thiserror::Error;

/// Point value of each letter, indexed by `letter - 'a'`
pub const LETTER_SCORES: [u32; 26] = [
    1,  // a
    3,  // b
    3,  // c
    2,  // d
    1,  // e
    4,  // f
    2,  // g
    4,  // h
    1,  // i
    8,  // j
    5,  // k
    1,  // l
    3,  // m
    1,  // n
    1,  // o
    3,  // p
    10, // q
    1,  // r
    1,  // s
    1,  // t
    1,  // u
    4,  // v
    4,  // w
    8,  // x
    4,  // y
    10, // z
];

/// Error type for words that cannot be scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Unknown letter {letter:?} in word {word:?}")]
    UnknownLetter { word: String, letter: char },
}

impl ScoreError {
    /// The word that failed to score
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::UnknownLetter { word, .. } => word,
        }
    }
}

/// Value of a single tile, or `None` if the character has no tile
///
/// # Examples
/// ```
/// use rack_words::core::letter_score;
///
/// assert_eq!(letter_score('q'), Some(10));
/// assert_eq!(letter_score('Q'), Some(10));
/// assert_eq!(letter_score('-'), None);
/// ```
#[inline]
#[must_use]
pub fn letter_score(letter: char) -> Option<u32> {
    if letter.is_ascii_alphabetic() {
        let index = letter.to_ascii_lowercase() as usize - 'a' as usize;
        Some(LETTER_SCORES[index])
    } else {
        None
    }
}

/// Sum of the tile values of every letter in `word`
///
/// # Errors
/// Returns `ScoreError::UnknownLetter` for the first character with no tile value.
///
/// # Examples
/// ```
/// use rack_words::core::score;
///
/// assert_eq!(score("feeze"), Ok(17));
/// assert_eq!(score("FAZE"), Ok(16));
/// assert_eq!(score(""), Ok(0));
/// assert!(score("it's").is_err());
/// ```
pub fn score(word: &str) -> Result<u32, ScoreError> {
    word.chars().try_fold(0, |total, letter| {
        letter_score(letter)
            .map(|value| total + value)
            .ok_or_else(|| ScoreError::UnknownLetter {
                word: word.to_string(),
                letter,
            })
    })
}
