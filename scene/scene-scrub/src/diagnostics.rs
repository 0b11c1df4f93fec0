//! Diagnostic message sinks.
//!
//! The scrub reports what it does through a [`DiagnosticSink`] passed in by
//! the caller. Messages never influence control flow.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Progress information with no issues to report.
    Debug,
    /// Summary information when issues were found and repaired.
    Info,
    /// An individual array, mesh, channel or animation was removed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// Receiver for human-readable scrub diagnostics.
pub trait DiagnosticSink {
    /// Record a message at the given severity.
    fn emit(&mut self, severity: Severity, message: &str);

    /// Record a debug message.
    fn debug(&mut self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    /// Record an info message.
    fn info(&mut self, message: &str) {
        self.emit(Severity::Info, message);
    }

    /// Record an error message.
    fn error(&mut self, message: &str) {
        self.emit(Severity::Error, message);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

/// Forwards diagnostics to `tracing` under the `scene_scrub` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(target: "scene_scrub", "{message}"),
            Severity::Info => tracing::info!(target: "scene_scrub", "{message}"),
            Severity::Error => tracing::error!(target: "scene_scrub", "{message}"),
        }
    }
}

/// Stores every message in order. Useful for tests and for tools that
/// present scrub results to a user.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Recorded messages in emission order.
    pub messages: Vec<(Severity, String)>,
}

impl RecordingSink {
    /// Create an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Messages recorded at `severity`.
    pub fn at(&self, severity: Severity) -> impl Iterator<Item = &str> + '_ {
        self.messages
            .iter()
            .filter(move |(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
    }

    /// Number of messages recorded at `severity`.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.at(severity).count()
    }

    /// Whether any message at `severity` contains `needle`.
    #[must_use]
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.at(severity).any(|m| m.contains(needle))
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&mut self, severity: Severity, message: &str) {
        self.messages.push((severity, message.to_owned()));
    }
}
