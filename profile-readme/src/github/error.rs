//! Metadata fetch error types.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching repository metadata.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The identifier is not of the form "owner/name".
    #[error("Invalid repository identifier '{full_name}'")]
    InvalidIdentifier { full_name: String },

    /// GitHub API error on the final attempt.
    #[error("GitHub API error for {full_name} after {attempts} attempt(s): {source}")]
    GitHubError {
        full_name: String,
        attempts: u32,
        #[source]
        source: octocrab::Error,
    },

    /// The final attempt did not complete in time.
    #[error("Request for {full_name} timed out after {timeout:?} ({attempts} attempt(s))")]
    TimedOut {
        full_name: String,
        attempts: u32,
        timeout: Duration,
    },
}
