//! Markdown rendering of per-major-version changelog documents.

use crate::classify::ClassifiedRelease;
use crate::issues::IssueGroup;
use chrono::{DateTime, Utc};
use semver::Version;
use std::fmt::Write;

/// Anchor for a version heading: the version string without dots.
#[must_use]
pub fn anchor(version: &Version) -> String {
    version.to_string().replace('.', "")
}

/// Long human-readable date, e.g. `Tuesday, 14 March 2023`.
#[must_use]
pub fn long_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%A, %-d %B %Y").to_string()
}

/// Accumulates one changelog document.
///
/// The header and table of contents are written up front; release sections
/// are appended one at a time as they are rendered.
#[derive(Debug)]
pub struct DocumentBuilder {
    output: String,
}

impl DocumentBuilder {
    /// Starts a document with its header and table of contents.
    #[must_use]
    pub fn new(repository: &str, major: u64, releases: &[ClassifiedRelease]) -> Self {
        let mut output = String::new();
        let _ = writeln!(output, "# {repository} version {major}\n");
        for entry in releases {
            let _ = writeln!(
                output,
                "- [{}](#{}) - {}",
                entry.version,
                anchor(&entry.version),
                long_date(entry.published_at())
            );
        }
        Self { output }
    }

    /// Appends a fully rendered release section.
    pub fn push_section(&mut self, section: &str) {
        self.output.push_str(section);
    }

    /// Returns the finished document.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

/// Renders the section for one release.
///
/// With non-empty `groups` the section lists the milestone issues per label;
/// otherwise it falls back to the verbatim release body.
#[must_use]
pub fn render_section(entry: &ClassifiedRelease, groups: &[IssueGroup]) -> String {
    let mut output = String::new();
    let _ = write!(
        output,
        "\n\n## {}\n\nReleased [**{}**]({})\n",
        entry.version,
        long_date(entry.published_at()),
        entry.release.html_url
    );

    if groups.is_empty() {
        let body = entry.release.body.as_deref().unwrap_or_default();
        let _ = write!(output, "\n{body}\n");
        return output;
    }

    for group in groups {
        let _ = write!(output, "\n\n#### {}\n\n", group.heading());
        for issue in &group.issues {
            let _ = writeln!(
                output,
                "- #{} ({}) {}",
                issue.number,
                issue.html_url,
                html_escape::encode_text(&issue.title)
            );
        }
    }
    output
}
