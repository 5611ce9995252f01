//! The changelog generation run.
//!
//! One pass walks organization, repositories, major-version groups and
//! releases strictly in sequence. A release that fails to render is left out
//! of its document; a repository that fails to fetch is reported and the run
//! moves on to the next one.

use crate::classify::{ClassifiedRelease, MajorGroup, classify};
use crate::error::Result;
use crate::issues::group_issues;
use crate::milestone::find_milestone;
use crate::model::{Milestone, Repository};
use crate::output::OutputWriter;
use crate::render::{DocumentBuilder, render_section};
use crate::reporter::Reporter;
use crate::source::ReleaseSource;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every repository was visited.
    Completed,
    /// The API quota was spent before starting; nothing was processed.
    RateLimited,
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Documents written.
    pub written: Vec<PathBuf>,
    /// Documents skipped because they already existed.
    pub skipped: Vec<PathBuf>,
    /// Releases left out of their document after an error.
    pub failed_releases: usize,
    /// Repositories abandoned after an error.
    pub failed_repositories: Vec<String>,
}

impl RunSummary {
    fn new(outcome: RunOutcome) -> Self {
        Self {
            outcome,
            written: Vec::new(),
            skipped: Vec::new(),
            failed_releases: 0,
            failed_repositories: Vec::new(),
        }
    }

    /// Whether any repository had to be abandoned.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed_repositories.is_empty()
    }
}

/// Generates changelog documents for every repository of an organization.
pub struct Generator<S, R> {
    source: S,
    reporter: R,
    writer: OutputWriter,
}

impl<S: ReleaseSource, R: Reporter> Generator<S, R> {
    /// Creates a generator.
    pub fn new(source: S, reporter: R, writer: OutputWriter) -> Self {
        Self {
            source,
            reporter,
            writer,
        }
    }

    /// Runs generation for all repositories of `owner`.
    ///
    /// # Errors
    ///
    /// Fails if the quota or the repository list cannot be fetched. Errors
    /// inside a single repository are reported and recorded in the summary.
    #[instrument(skip(self))]
    pub async fn run(&self, owner: &str) -> Result<RunSummary> {
        let limit = self.source.rate_limit().await?;
        debug!(remaining = limit.remaining, limit = limit.limit, "Rate limit");
        if limit.is_exhausted() {
            self.reporter.line(&limit.exhausted_message(Utc::now()));
            return Ok(RunSummary::new(RunOutcome::RateLimited));
        }

        self.reporter.line("Fetching repositories...");
        let repositories = self.source.list_repositories(owner).await?;
        info!(count = repositories.len(), "Fetched repositories");

        let mut summary = RunSummary::new(RunOutcome::Completed);
        for repository in &repositories {
            self.reporter
                .line(&format!("Processing {}...", repository.name));
            if let Err(e) = self
                .process_repository(owner, repository, &mut summary)
                .await
            {
                warn!(repo = %repository.name, error = %e, "Repository failed");
                self.reporter
                    .line(&format!("Failed to process {}: {e}", repository.name));
                summary.failed_repositories.push(repository.name.clone());
            }
        }

        info!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            failed_releases = summary.failed_releases,
            failed_repositories = summary.failed_repositories.len(),
            "Run complete"
        );
        Ok(summary)
    }

    async fn process_repository(
        &self,
        owner: &str,
        repository: &Repository,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let releases = self.source.list_releases(owner, &repository.name).await?;
        let groups = classify(releases);
        debug!(repo = %repository.name, groups = groups.len(), "Classified releases");

        // Fetched on first use so fully generated repositories cost no call.
        let mut milestones: Option<Vec<Milestone>> = None;

        for group in &groups {
            let file_name = OutputWriter::file_name(&repository.name, group.major);
            if self.writer.exists(&repository.name, group.major) {
                self.reporter
                    .line(&format!("Skipping, file {file_name} already exists"));
                summary
                    .skipped
                    .push(self.writer.path(&repository.name, group.major));
                continue;
            }

            if milestones.is_none() {
                self.reporter.line("Fetching milestones...");
                milestones = Some(
                    self.source
                        .list_milestones(owner, &repository.name)
                        .await?,
                );
            }
            let known = milestones.as_deref().unwrap_or_default();

            let document = self
                .render_group(owner, &repository.name, group, known, summary)
                .await;

            self.reporter.line(&format!("Writing {file_name}..."));
            let path = self
                .writer
                .write(&repository.name, group.major, &document)?;
            summary.written.push(path);
        }
        Ok(())
    }

    async fn render_group(
        &self,
        owner: &str,
        repo: &str,
        group: &MajorGroup,
        milestones: &[Milestone],
        summary: &mut RunSummary,
    ) -> String {
        let mut document = DocumentBuilder::new(repo, group.major, &group.releases);

        for entry in &group.releases {
            self.reporter
                .line(&format!("Processing version {}...", entry.version));
            match self.render_release(owner, repo, entry, milestones).await {
                Ok(section) => document.push_section(&section),
                Err(e) => {
                    warn!(repo, version = %entry.version, error = %e, "Release failed");
                    self.reporter.line(&format!("\tFailed! {e}"));
                    summary.failed_releases += 1;
                }
            }
        }
        document.finish()
    }

    async fn render_release(
        &self,
        owner: &str,
        repo: &str,
        entry: &ClassifiedRelease,
        milestones: &[Milestone],
    ) -> Result<String> {
        let Some(milestone) = find_milestone(milestones, &entry.version) else {
            debug!(repo, version = %entry.version, "No matching milestone");
            return Ok(render_section(entry, &[]));
        };

        self.reporter.line("Fetching issues...");
        let issues = self
            .source
            .list_milestone_issues(owner, repo, milestone.number)
            .await?;
        let groups = group_issues(issues, milestone.id);
        Ok(render_section(entry, &groups))
    }
}
