//! Word list loading
//!
//! Reads a plain-text dictionary with one word per line.

use super::reporter::Reporter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default dictionary file, looked up in the working directory
pub const DEFAULT_WORDLIST: &str = "sowpods.txt";

/// Where to download the SOWPODS dictionary from
pub const SOWPODS_URL: &str = "http://courses.cms.caltech.edu/cs11/material/advjava/lab1/sowpods.zip";

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load words from a file
///
/// Only the line terminator (`\n` or `\r\n`) is stripped, so a blank line
/// becomes the empty word. Words are kept in file order and are not
/// otherwise validated.
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the file does not exist, or
/// `LoadError::Io` if it cannot be read.
///
/// # Examples
/// ```no_run
/// use rack_words::wordlists::loader::load_from_file;
///
/// let words = load_from_file("sowpods.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(words_from_str(&content))
}

/// Split dictionary text into words, one per line
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// Load words, falling back to an empty list on failure
///
/// A missing or unreadable file is not fatal: a warning naming the file and
/// the download location goes to `reporter` and no words are returned.
#[must_use]
pub fn load_or_empty<P: AsRef<Path>>(path: P, reporter: &dyn Reporter) -> Vec<String> {
    match load_from_file(path) {
        Ok(words) => {
            reporter.info(&format!("Loaded {} words", words.len()));
            words
        }
        Err(err) => {
            reporter.warn(&format!("{err}. Download a word list from {SOWPODS_URL}"));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::reporter::MemoryReporter;
    use std::io::Write;

    fn write_wordlist(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write word list");
        file
    }

    #[test]
    fn load_from_file_reads_lines_in_order() {
        let file = write_wordlist("feeze\nfaze\nza\nfe\n");
        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["feeze", "faze", "za", "fe"]);
    }

    #[test]
    fn load_from_file_strips_only_line_terminators() {
        let file = write_wordlist("aa\r\nab\r\nad\n");
        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["aa", "ab", "ad"]);
    }

    #[test]
    fn load_from_file_keeps_blank_lines_as_empty_words() {
        let file = write_wordlist("za\n\nfe\r\n\r\n");
        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["za", "", "fe", ""]);
    }

    #[test]
    fn load_from_file_without_trailing_newline() {
        let file = write_wordlist("qi\nza");
        assert_eq!(load_from_file(file.path()).unwrap(), vec!["qi", "za"]);
    }

    #[test]
    fn load_from_file_missing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("sowpods.txt");

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().ends_with("sowpods.txt not found"));
    }

    #[test]
    fn load_from_file_directory_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_from_file(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn load_or_empty_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let reporter = MemoryReporter::new();

        let words = load_or_empty(dir.path().join("missing.txt"), &reporter);

        assert!(words.is_empty());
        let warnings = reporter.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("missing.txt not found"));
        assert!(warnings[0].contains(SOWPODS_URL));
    }

    #[test]
    fn load_or_empty_returns_words() {
        let file = write_wordlist("za\nqi\n");
        let reporter = MemoryReporter::new();

        let words = load_or_empty(file.path(), &reporter);

        assert_eq!(words, vec!["za", "qi"]);
        assert!(reporter.warnings().is_empty());
    }

    #[test]
    fn words_from_str_empty() {
        assert!(words_from_str("").is_empty());
        assert_eq!(words_from_str("\n\n"), vec!["", ""]);
    }
}
