//! Entities fetched from the hosting platform.
//!
//! Field names follow the GitHub REST API so these types deserialize
//! directly from response bodies. Unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A repository owned by the organization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// Repository name (without the owner prefix).
    pub name: String,
}

/// A published release of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    /// Tag the release points at; candidate version string.
    pub tag_name: String,
    /// When the release was published. Absent for drafts.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Release notes, assumed to be markdown.
    #[serde(default)]
    pub body: Option<String>,
    /// Release page URL.
    pub html_url: String,
    /// Whether the release is flagged as a pre-release.
    #[serde(default)]
    pub prerelease: bool,
    /// Whether the release is an unpublished draft.
    #[serde(default)]
    pub draft: bool,
}

/// A repository milestone in any state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    /// Globally unique identifier.
    pub id: u64,
    /// Per-repository number used for filtering issues.
    pub number: u64,
    /// Milestone title, correlated against version strings.
    pub title: String,
}

/// The milestone reference carried by an issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MilestoneRef {
    /// Identifier of the referenced milestone.
    pub id: u64,
}

/// An issue label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
}

/// An issue (or pull request) belonging to a repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    /// Issue number.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Issue page URL.
    pub html_url: String,
    /// Milestone the issue is attached to.
    #[serde(default)]
    pub milestone: Option<MilestoneRef>,
    /// Labels in the order the platform returns them.
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Issue {
    /// Name of the first label, if any.
    #[must_use]
    pub fn first_label(&self) -> Option<&str> {
        self.labels.first().map(|label| label.name.as_str())
    }
}
