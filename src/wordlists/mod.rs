//! Word lists for rack solving
//!
//! Loads the dictionary from disk and defines the [`Reporter`] interface the
//! loader reports through.

pub mod loader;
mod reporter;

pub use loader::{DEFAULT_WORDLIST, LoadError, SOWPODS_URL, load_from_file, load_or_empty};
pub use reporter::{Level, MemoryReporter, Reporter, TracingReporter};
