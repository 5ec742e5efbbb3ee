//! Reporting interface passed into the loader and command layer
//!
//! Library code never reaches for a global logger. Callers hand in a
//! [`Reporter`] and decide where messages go.

use std::cell::RefCell;

/// Severity of a reported message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

/// Sink for diagnostics raised while loading and ranking words
pub trait Reporter {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards messages to `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Keeps every message in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    messages: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages reported so far, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    /// Messages reported at `Level::Warn`
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push((Level::Info, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push((Level::Warn, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_reporter_records_in_order() {
        let reporter = MemoryReporter::new();
        reporter.info("loading");
        reporter.warn("missing");
        reporter.info("done");

        assert_eq!(
            reporter.messages(),
            vec![
                (Level::Info, "loading".to_string()),
                (Level::Warn, "missing".to_string()),
                (Level::Info, "done".to_string()),
            ]
        );
        assert_eq!(reporter.warnings(), vec!["missing".to_string()]);
    }

    #[test]
    fn tracing_reporter_without_subscriber_is_silent() {
        let reporter = TracingReporter;
        reporter.info("no subscriber installed");
        reporter.warn("still fine");
    }
}
