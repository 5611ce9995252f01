//! Up-front API quota check.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

/// Quota counters for the `core` API category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateLimit {
    /// Maximum calls per window.
    pub limit: u64,
    /// Calls left in the current window.
    pub remaining: u64,
    /// Window reset time, in seconds since the Unix epoch.
    pub reset: i64,
}

impl RateLimit {
    /// Whether no calls remain in the current window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Time left until the quota resets, never negative.
    #[must_use]
    pub fn resets_in(&self, now: DateTime<Utc>) -> TimeDelta {
        let reset = DateTime::from_timestamp(self.reset, 0).unwrap_or(now);
        (reset - now).max(TimeDelta::zero())
    }

    /// Message shown when the run stops because the quota is spent.
    #[must_use]
    pub fn exhausted_message(&self, now: DateTime<Utc>) -> String {
        format!(
            "Rate limit exceeded, resets in {}",
            format_delta(self.resets_in(now))
        )
    }
}

/// Formats a duration as `hh:mm:ss`.
#[must_use]
pub fn format_delta(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
