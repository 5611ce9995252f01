//! GitHub provider for changeloggen.
//!
//! This crate provides [`GitHubSource`], the [`changeloggen_core::ReleaseSource`]
//! backed by the GitHub REST API through `octocrab`.

#![warn(missing_docs)]

pub mod source;

pub use source::GitHubSource;
