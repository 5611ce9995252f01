//! Process configuration read from the environment.

use crate::error::{Error, Result};
use secrecy::SecretString;

/// Organization whose repositories are processed.
pub const OWNER_VAR: &str = "CHANGELOGGEN_OWNER";
/// Access token for the GitHub API.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Optional API base URL override.
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// Base URL of the public GitHub API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Runtime configuration for a changelog run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Organization that owns the repositories.
    pub owner: String,
    /// API token. Redacted in `Debug` output.
    pub token: SecretString,
    /// API base URL.
    pub api_url: String,
}

impl Config {
    /// Creates a configuration against the public GitHub API.
    #[must_use]
    pub fn new(owner: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            token: SecretString::from(token.into()),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEnv`] naming the first required variable that
    /// is unset or empty.
    pub fn from_env() -> Result<Self> {
        let owner = required(OWNER_VAR)?;
        let token = required(TOKEN_VAR)?;

        let mut config = Self::new(owner, token);
        if let Some(api_url) = optional(API_URL_VAR) {
            config = config.with_api_url(api_url);
        }
        Ok(config)
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn required(name: &str) -> Result<String> {
    optional(name).ok_or_else(|| Error::missing_env(name))
}
