//! Human-readable progress output.

use std::io::Write;
use std::sync::Mutex;

/// Sink for progress lines shown to the user.
pub trait Reporter: Send + Sync {
    /// Writes one line of progress output.
    fn line(&self, message: &str);
}

/// Writes progress lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn line(&self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{message}");
    }
}

/// Collects progress lines in memory.
#[derive(Debug, Default)]
pub struct BufferReporter {
    lines: Mutex<Vec<String>>,
}

impl BufferReporter {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Whether any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl Reporter for BufferReporter {
    fn line(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn line(&self, message: &str) {
        (**self).line(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_reporter_records_lines() {
        let reporter = BufferReporter::new();
        reporter.line("Fetching repositories...");
        reporter.line("Processing widgets...");
        assert_eq!(
            reporter.lines(),
            ["Fetching repositories...", "Processing widgets..."]
        );
        assert!(reporter.contains("widgets"));
        assert!(!reporter.contains("gadgets"));
    }

    #[test]
    fn test_reporter_through_reference() {
        fn greet(reporter: impl Reporter) {
            reporter.line("hello");
        }

        let reporter = BufferReporter::new();
        greet(&reporter);
        assert_eq!(reporter.lines(), ["hello"]);
    }
}
