//! Grouping of milestone issues by their first label.

use crate::model::Issue;
use indexmap::IndexMap;

/// Heading used for issues without any label.
pub const UNLABELED_HEADING: &str = "Others";

/// Issues sharing the same first label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueGroup {
    /// First label name, or `None` for unlabeled issues.
    pub label: Option<String>,
    /// Issues in the order they were returned.
    pub issues: Vec<Issue>,
}

impl IssueGroup {
    /// Section heading: the label with an `s` appended, or `Others`.
    #[must_use]
    pub fn heading(&self) -> String {
        self.label
            .as_ref()
            .map_or_else(|| UNLABELED_HEADING.to_string(), |label| format!("{label}s"))
    }
}

/// Keeps the issues attached to `milestone_id` and groups them by first label.
///
/// Groups appear in first-occurrence order of the input sequence.
#[must_use]
pub fn group_issues(issues: Vec<Issue>, milestone_id: u64) -> Vec<IssueGroup> {
    let mut groups: IndexMap<Option<String>, Vec<Issue>> = IndexMap::new();

    for issue in issues {
        if issue.milestone.as_ref().map(|m| m.id) != Some(milestone_id) {
            continue;
        }
        let key = issue.first_label().map(str::to_string);
        groups.entry(key).or_default().push(issue);
    }

    groups
        .into_iter()
        .map(|(label, issues)| IssueGroup { label, issues })
        .collect()
}
