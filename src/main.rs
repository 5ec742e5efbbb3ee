//! Rack Words - CLI
//!
//! Prints every word playable from a Scrabble rack, highest score first.

use anyhow::{Context, Result};
use clap::Parser;
use rack_words::{
    commands::{FindConfig, find_words},
    core::Rack,
    output::{print_results, print_summary},
    wordlists::{DEFAULT_WORDLIST, TracingReporter},
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

#[derive(Parser)]
#[command(
    name = "rack_words",
    about = "List the Scrabble words playable from a rack, sorted by score",
    version,
    author
)]
struct Cli {
    /// Letters on the rack, e.g. ZAEFIEE (case-insensitive)
    #[arg(value_parser = Rack::parse)]
    rack: Rack,

    /// Dictionary file, one word per line
    #[arg(short = 'w', long, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Print at most this many words
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Only print words scoring at least this much
    #[arg(short, long, default_value = "0")]
    min_score: u32,

    /// Print a summary on stderr after the word list
    #[arg(short, long)]
    summary: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(cli.verbose).into());

    // Logging lives only as long as this invocation
    tracing::subscriber::with_default(log_subscriber(filter), || run(cli))
}

/// Log filter used when `RUST_LOG` is unset
const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "rack_words=debug"
    } else {
        "rack_words=info"
    }
}

fn log_subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

fn run(cli: Cli) -> Result<()> {
    let config = FindConfig {
        rack: cli.rack,
        wordlist: cli.wordlist,
        limit: cli.limit,
        min_score: cli.min_score,
    };
    tracing::debug!(rack = %config.rack, wordlist = %config.wordlist.display(), "Searching");

    let result = find_words(&config, &TracingReporter);

    print_results(&result).context("failed to write results")?;
    if cli.summary {
        print_summary(&result);
    }
    Ok(())
}
