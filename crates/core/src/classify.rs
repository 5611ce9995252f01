//! Reduction of raw releases to versioned, major-grouped releases.
//!
//! A release takes part in changelog generation only when it is published,
//! not flagged as a pre-release, and its tag parses as a semantic version
//! without a pre-release component. Survivors are ordered newest first and
//! grouped by major version.

use crate::model::Release;
use chrono::{DateTime, Utc};
use semver::Version;
use tracing::debug;

/// A release paired with its parsed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRelease {
    /// The release as returned by the platform.
    pub release: Release,
    /// Version parsed from the release tag.
    pub version: Version,
}

impl ClassifiedRelease {
    /// Publish timestamp. Classification guarantees it is present.
    #[must_use]
    pub fn published_at(&self) -> DateTime<Utc> {
        self.release.published_at.unwrap_or_default()
    }
}

/// All classified releases sharing one major version, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorGroup {
    /// Major version number.
    pub major: u64,
    /// Releases in descending version order.
    pub releases: Vec<ClassifiedRelease>,
}

/// Filters, parses, sorts and groups releases.
///
/// Groups are returned in first-encounter order of the descending sort, so
/// the highest major version comes first.
#[must_use]
pub fn classify(releases: Vec<Release>) -> Vec<MajorGroup> {
    let mut classified: Vec<ClassifiedRelease> = releases
        .into_iter()
        .filter_map(classify_one)
        .collect();

    classified.sort_by(|a, b| b.version.cmp(&a.version));

    let mut groups: Vec<MajorGroup> = Vec::new();
    for entry in classified {
        match groups.last_mut() {
            Some(group) if group.major == entry.version.major => group.releases.push(entry),
            _ => groups.push(MajorGroup {
                major: entry.version.major,
                releases: vec![entry],
            }),
        }
    }
    groups
}

fn classify_one(release: Release) -> Option<ClassifiedRelease> {
    if release.prerelease {
        debug!(tag = %release.tag_name, "Skipping release flagged as prerelease");
        return None;
    }
    if release.draft || release.published_at.is_none() {
        debug!(tag = %release.tag_name, "Skipping unpublished release");
        return None;
    }

    let version = match Version::parse(&release.tag_name) {
        Ok(version) => version,
        Err(e) => {
            debug!(tag = %release.tag_name, error = %e, "Skipping release with non-semver tag");
            return None;
        }
    };

    if !version.pre.is_empty() {
        debug!(tag = %release.tag_name, "Skipping pre-release version");
        return None;
    }

    Some(ClassifiedRelease { release, version })
}
