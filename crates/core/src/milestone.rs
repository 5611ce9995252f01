//! Release to milestone correlation.

use crate::model::Milestone;
use semver::Version;

/// Finds the milestone whose title equals the canonical version string.
///
/// The first match wins when several milestones share a title.
#[must_use]
pub fn find_milestone<'a>(milestones: &'a [Milestone], version: &Version) -> Option<&'a Milestone> {
    let title = version.to_string();
    milestones.iter().find(|milestone| milestone.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(id: u64, number: u64, title: &str) -> Milestone {
        Milestone {
            id,
            number,
            title: title.to_string(),
        }
    }

    #[test]
    fn test_exact_title_match() {
        let milestones = vec![milestone(1, 1, "1.1.0"), milestone(2, 2, "1.2.0")];
        let version = Version::parse("1.2.0").unwrap();
        assert_eq!(find_milestone(&milestones, &version).map(|m| m.id), Some(2));
    }

    #[test]
    fn test_no_prefix_or_partial_match() {
        let milestones = vec![
            milestone(1, 1, "v1.2.0"),
            milestone(2, 2, "1.2"),
            milestone(3, 3, "1.2.0 "),
        ];
        let version = Version::parse("1.2.0").unwrap();
        assert!(find_milestone(&milestones, &version).is_none());
    }

    #[test]
    fn test_first_match_on_duplicate_titles() {
        let milestones = vec![milestone(10, 4, "2.0.0"), milestone(11, 5, "2.0.0")];
        let version = Version::parse("2.0.0").unwrap();
        assert_eq!(find_milestone(&milestones, &version).map(|m| m.id), Some(10));
    }

    #[test]
    fn test_empty_milestones() {
        let version = Version::parse("2.0.0").unwrap();
        assert!(find_milestone(&[], &version).is_none());
    }
}
