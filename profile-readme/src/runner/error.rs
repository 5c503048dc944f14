//! Runner error types.

/// Errors that abort a README generation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Repository metadata could not be fetched.
    #[error(transparent)]
    Fetch(#[from] crate::github::FetchError),

    /// Fragment rendering errors.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// Reading the template or writing an output failed.
    #[error("Failed to {action} '{path}': {source}")]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}
