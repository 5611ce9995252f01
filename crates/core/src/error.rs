//! Error types for changelog generation.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for changeloggen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating changelogs.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A required environment variable is absent or empty.
    #[error("Missing {name} envvar")]
    #[diagnostic(
        code(changeloggen::config::missing_env),
        help("Export {name} before running changeloggen")
    )]
    MissingEnv {
        /// Name of the missing variable
        name: String,
    },

    /// The configured API base URL could not be used.
    #[error("Invalid GitHub API URL '{url}': {message}")]
    #[diagnostic(
        code(changeloggen::config::api_url),
        help("GITHUB_API_URL must be an absolute URL such as https://api.github.com")
    )]
    InvalidApiUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        message: String,
    },

    /// A request to the hosting platform failed.
    #[error("Failed to {operation}: {message}")]
    #[diagnostic(code(changeloggen::source))]
    Source {
        /// What was being fetched
        operation: String,
        /// The underlying error message
        message: String,
    },

    /// Writing an output document failed.
    #[error("Failed to write {}: {source}", path.display())]
    #[diagnostic(
        code(changeloggen::io),
        help("Check that the working directory is writable")
    )]
    Io {
        /// The file being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a missing environment variable error.
    #[must_use]
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnv { name: name.into() }
    }

    /// Create an invalid API URL error.
    #[must_use]
    pub fn invalid_api_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidApiUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a source (API) error for the given operation.
    #[must_use]
    pub fn source(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
