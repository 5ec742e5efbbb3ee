//! Display functions for command results

use super::formatters::{create_progress_bar, format_scored_word};
use crate::commands::FindResult;
use colored::Colorize;
use std::io::{self, Write};

/// Write one `<score> <word>` line per ranked word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_results<W: Write>(out: &mut W, result: &FindResult) -> io::Result<()> {
    for scored in &result.words {
        writeln!(out, "{}", format_scored_word(scored))?;
    }
    Ok(())
}

/// Print the ranked words to stdout
///
/// # Errors
///
/// Returns an error if stdout is closed.
pub fn print_results(result: &FindResult) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, result)?;
    out.flush()
}

/// Print a summary of the search to stderr
pub fn print_summary(result: &FindResult) {
    eprintln!("\n{}", "═".repeat(60).cyan());
    eprintln!(
        " {} {} ",
        "RACK:".bright_cyan().bold(),
        result.rack.to_string().bright_yellow().bold()
    );
    eprintln!("{}", "═".repeat(60).cyan());

    eprintln!("   Dictionary:     {} words", result.dictionary_size);
    eprintln!("   Constructible:  {} words", result.constructible);
    eprintln!(
        "   Shown:          {}",
        format!("{}", result.words.len()).bright_yellow().bold()
    );

    if !result.rejected.is_empty() {
        eprintln!(
            "   Rejected:       {}",
            format!("{}", result.rejected.len()).red()
        );
    }

    if let Some(best) = result.best_score() {
        eprintln!("\n{}", "Top words:".bright_cyan().bold());
        for scored in result.words.iter().take(5) {
            let bar = create_progress_bar(scored.score, best, 20);
            eprintln!("   {:>3} {} {}", scored.score, bar.green(), scored.word);
        }
    } else {
        eprintln!("\n{}", "No playable words".yellow());
    }
}
