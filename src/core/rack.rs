//! Scrabble rack representation
//!
//! A Rack is the multiset of tiles a player holds. Only letter counts matter,
//! never their order.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of copies of each letter held by [`Rack::full`]
pub const FULL_RACK_COPIES: u32 = 26;

/// Error type for racks given on the command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RackError {
    #[error("Rack may only contain letters a-z, found {letter:?} at position {position}")]
    InvalidLetter { letter: char, position: usize },
}

/// A multiset of tiles, case-insensitive
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rack {
    letters: String,
    counts: FxHashMap<char, u32>,
}

impl Rack {
    /// Create a rack from any string
    ///
    /// Every character is lowercased and counted. No validation is done here;
    /// use [`Rack::parse`] for untrusted input.
    ///
    /// # Examples
    /// ```
    /// use rack_words::core::Rack;
    ///
    /// let rack = Rack::new("ZAEFIEE");
    /// assert_eq!(rack.count('e'), 3);
    /// assert_eq!(rack.count('Z'), 1);
    /// assert_eq!(rack.count('q'), 0);
    /// ```
    #[must_use]
    pub fn new(letters: &str) -> Self {
        let letters = letters.to_lowercase();
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        for ch in letters.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }

        Self { letters, counts }
    }

    /// Parse a rack typed by the user
    ///
    /// # Errors
    /// Returns `RackError::InvalidLetter` if any character is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use rack_words::core::Rack;
    ///
    /// assert!(Rack::parse("retains").is_ok());
    /// assert!(Rack::parse("").unwrap().is_empty());
    /// assert!(Rack::parse("ab?").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, RackError> {
        if let Some((position, letter)) = input
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(RackError::InvalidLetter { letter, position });
        }

        Ok(Self::new(input))
    }

    /// A rack holding [`FULL_RACK_COPIES`] of every letter a-z
    #[must_use]
    pub fn full() -> Self {
        let letters: String = ('a'..='z')
            .flat_map(|c| std::iter::repeat_n(c, FULL_RACK_COPIES as usize))
            .collect();
        Self::new(&letters)
    }

    /// Normalized (lowercase) letters in the order they were given
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// How many tiles of `letter` the rack holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        letter
            .to_lowercase()
            .next()
            .and_then(|c| self.counts.get(&c))
            .copied()
            .unwrap_or(0)
    }

    /// Total number of tiles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromStr for Rack {
    type Err = RackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rack_counts_duplicates() {
        let rack = Rack::new("zaefiee");
        assert_eq!(rack.count('e'), 3);
        assert_eq!(rack.count('z'), 1);
        assert_eq!(rack.count('a'), 1);
        assert_eq!(rack.count('b'), 0);
        assert_eq!(rack.len(), 7);
    }

    #[test]
    fn rack_is_case_insensitive() {
        let upper = Rack::new("ZAEFIEE");
        let lower = Rack::new("zaefiee");
        assert_eq!(upper, lower);
        assert_eq!(upper.count('E'), 3);
        assert_eq!(upper.letters(), "zaefiee");
    }

    #[test]
    fn rack_new_keeps_non_letters() {
        let rack = Rack::new("a'1");
        assert_eq!(rack.count('\''), 1);
        assert_eq!(rack.count('1'), 1);
    }

    #[test]
    fn rack_parse_rejects_non_letters() {
        assert_eq!(
            Rack::parse("ab3"),
            Err(RackError::InvalidLetter {
                letter: '3',
                position: 2
            })
        );
        assert!(Rack::parse("a b").is_err());
        assert!(Rack::parse("é").is_err());
    }

    #[test]
    fn rack_parse_empty_is_valid() {
        let rack = Rack::parse("").unwrap();
        assert!(rack.is_empty());
        assert_eq!(rack.len(), 0);
    }

    #[test]
    fn rack_from_str() {
        let rack: Rack = "Qi".parse().unwrap();
        assert_eq!(rack.count('q'), 1);
        assert_eq!(rack.count('i'), 1);
    }

    #[test]
    fn full_rack_has_every_letter() {
        let rack = Rack::full();
        for c in 'a'..='z' {
            assert_eq!(rack.count(c), FULL_RACK_COPIES);
        }
        assert_eq!(rack.len(), 26 * FULL_RACK_COPIES as usize);
    }

    #[test]
    fn rack_display_uppercase() {
        assert_eq!(format!("{}", Rack::new("zaefiee")), "ZAEFIEE");
    }
}
