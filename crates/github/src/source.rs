//! GitHub REST API implementation of [`ReleaseSource`].

use async_trait::async_trait;
use changeloggen_core::error::{Error, Result};
use changeloggen_core::{Config, Issue, Milestone, RateLimit, Release, ReleaseSource, Repository};
use octocrab::{Octocrab, Page};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Largest page size the API accepts.
const PER_PAGE: &str = "100";

/// Response of `GET /rate_limit`.
#[derive(Debug, Deserialize)]
struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
struct RateLimitResources {
    core: RateLimit,
}

/// Reads repositories, releases, milestones and issues from GitHub.
///
/// Every list call follows `Link` headers until the last page.
#[derive(Clone)]
pub struct GitHubSource {
    client: Octocrab,
}

impl std::fmt::Debug for GitHubSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubSource").finish_non_exhaustive()
    }
}

impl GitHubSource {
    /// Creates an authenticated source from the run configuration.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Fails if the API URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Octocrab::builder()
            .base_uri(config.api_url.as_str())
            .map_err(|e| Error::invalid_api_url(&config.api_url, e.to_string()))?
            .personal_token(config.token.expose_secret().to_string())
            .build()
            .map_err(|e| Error::source("create GitHub client", e.to_string()))?;
        Ok(Self::from_client(client))
    }

    /// Wraps an already configured client.
    #[must_use]
    pub const fn from_client(client: Octocrab) -> Self {
        Self { client }
    }

    /// Fetches every page of a list endpoint.
    async fn get_all<T: DeserializeOwned>(
        &self,
        operation: &str,
        route: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        debug!(route, "Fetching first page");
        let first: Page<T> = self
            .client
            .get(route, Some(params))
            .await
            .map_err(|e| Error::source(operation, describe(&e)))?;

        let items = self
            .client
            .all_pages(first)
            .await
            .map_err(|e| Error::source(operation, describe(&e)))?;
        debug!(route, count = items.len(), "Fetched all pages");
        Ok(items)
    }
}

/// Extracts the API's own message from GitHub error responses.
fn describe(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => source.message.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl ReleaseSource for GitHubSource {
    async fn rate_limit(&self) -> Result<RateLimit> {
        let response: RateLimitResponse = self
            .client
            .get("/rate_limit", None::<&()>)
            .await
            .map_err(|e| Error::source("get rate limit", describe(&e)))?;
        Ok(response.resources.core)
    }

    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>> {
        self.get_all(
            &format!("list repositories for {org}"),
            &format!("/orgs/{org}/repos"),
            &[("per_page", PER_PAGE)],
        )
        .await
    }

    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        self.get_all(
            &format!("list releases for {repo}"),
            &format!("/repos/{owner}/{repo}/releases"),
            &[("per_page", PER_PAGE)],
        )
        .await
    }

    async fn list_milestones(&self, owner: &str, repo: &str) -> Result<Vec<Milestone>> {
        self.get_all(
            &format!("list milestones for {repo}"),
            &format!("/repos/{owner}/{repo}/milestones"),
            &[("state", "all"), ("per_page", PER_PAGE)],
        )
        .await
    }

    async fn list_milestone_issues(
        &self,
        owner: &str,
        repo: &str,
        milestone_number: u64,
    ) -> Result<Vec<Issue>> {
        let milestone = milestone_number.to_string();
        self.get_all(
            &format!("list issues of milestone {milestone_number} for {repo}"),
            &format!("/repos/{owner}/{repo}/issues"),
            &[
                ("milestone", milestone.as_str()),
                ("state", "all"),
                ("per_page", PER_PAGE),
            ],
        )
        .await
    }
}
