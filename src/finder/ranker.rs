//! Word scoring and ranking

use crate::core::{ScoreError, score};
use std::fmt;

/// A word paired with its tile score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.score, self.word)
    }
}

/// Outcome of ranking a word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    /// Scored words, highest score first
    pub scored: Vec<ScoredWord>,
    /// Words that could not be scored, in input order
    pub rejected: Vec<ScoreError>,
}

/// Score every word and sort by descending score
///
/// The sort is stable: words with equal scores keep their input order.
/// Words containing characters with no tile value are moved to
/// [`Ranking::rejected`] instead of being scored.
///
/// # Examples
/// ```
/// use rack_words::finder::rank_words;
///
/// let ranking = rank_words(&["fe", "za", "it's", "faze"]);
/// let order: Vec<&str> = ranking.scored.iter().map(|s| s.word.as_str()).collect();
/// assert_eq!(order, ["faze", "za", "fe"]);
/// assert_eq!(ranking.rejected.len(), 1);
/// ```
#[must_use]
pub fn rank_words<S: AsRef<str>>(words: &[S]) -> Ranking {
    let mut ranking = Ranking::default();

    for word in words.iter().map(AsRef::as_ref) {
        match score(word) {
            Ok(points) => ranking.scored.push(ScoredWord {
                word: word.to_string(),
                score: points,
            }),
            Err(err) => ranking.rejected.push(err),
        }
    }

    // `sort_by` is stable
    ranking.scored.sort_by(|a, b| b.score.cmp(&a.score));
    ranking
}
