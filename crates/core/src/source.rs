//! The hosting-platform API as seen by the generator.

use crate::error::Result;
use crate::model::{Issue, Milestone, Release, Repository};
use crate::rate_limit::RateLimit;
use async_trait::async_trait;

/// Read access to repositories, releases, milestones and issues.
///
/// Every list operation returns the complete result set, consuming all pages.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Current quota for the `core` API category.
    async fn rate_limit(&self) -> Result<RateLimit>;

    /// All repositories of an organization, in platform order.
    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>>;

    /// All releases of a repository.
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>>;

    /// All milestones of a repository, open and closed.
    async fn list_milestones(&self, owner: &str, repo: &str) -> Result<Vec<Milestone>>;

    /// All issues of a repository filtered to one milestone number, any state.
    async fn list_milestone_issues(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
    ) -> Result<Vec<Issue>>;
}

#[async_trait]
impl<'a, T: ReleaseSource + ?Sized> ReleaseSource for &'a T {
    async fn rate_limit(&self) -> Result<RateLimit> {
        (**self).rate_limit().await
    }

    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>> {
        (**self).list_repositories(org).await
    }

    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        (**self).list_releases(owner, repo).await
    }

    async fn list_milestones(&self, owner: &str, repo: &str) -> Result<Vec<Milestone>> {
        (**self).list_milestones(owner, repo).await
    }

    async fn list_milestone_issues(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
    ) -> Result<Vec<Issue>> {
        (**self)
            .list_milestone_issues(owner, repo, milestone_number)
            .await
    }
}
