//! Core domain types for rack solving
//!
//! Racks, tile values and word scoring. Everything here is pure and stateless.

mod rack;
mod tiles;

pub use rack::{FULL_RACK_COPIES, Rack, RackError};
pub use tiles::{LETTER_SCORES, ScoreError, letter_score, score};
