//! Core of changeloggen.
//!
//! Builds one markdown changelog per repository and major version from an
//! organization's releases. Each release is correlated with the milestone
//! titled after its version, and the milestone's issues are listed grouped by
//! their first label. Releases without a matching milestone fall back to
//! their release notes.
//!
//! The hosting platform is reached through [`ReleaseSource`]; progress goes
//! to an injected [`Reporter`].

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod error;
pub mod issues;
pub mod milestone;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod rate_limit;
pub mod render;
pub mod reporter;
pub mod source;

pub use classify::{ClassifiedRelease, MajorGroup, classify};
pub use config::Config;
pub use error::{Error, Result};
pub use issues::{IssueGroup, group_issues};
pub use milestone::find_milestone;
pub use model::{Issue, Label, Milestone, MilestoneRef, Release, Repository};
pub use output::OutputWriter;
pub use pipeline::{Generator, RunOutcome, RunSummary};
pub use rate_limit::RateLimit;
pub use reporter::{BufferReporter, Reporter, StdoutReporter};
pub use source::ReleaseSource;
