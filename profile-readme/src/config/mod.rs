//! Configuration loading.
//!
//! The configuration is a TOML file read once at startup. It is parsed into
//! a [`ConfigFile`], validated, and turned into an immutable [`Config`] that
//! is passed explicitly to the runner.

mod error;
mod file;

pub use error::ConfigError;
pub use file::{ClientSection, ConfigFile, ProjectsSection};

use crate::github::{split_full_name, ClientOptions};
use chrono_tz::Tz;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Validated, immutable configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Candidate repositories in "owner/name" form, in configured order.
    pub repos: Vec<String>,

    /// Maximum number of repositories shown.
    pub limit: usize,

    /// Whether to shuffle the candidates before truncating.
    pub random: bool,

    /// Markup inserted in place of the motto marker.
    pub motto: String,

    /// Time zone used to render timestamps.
    pub time_zone: Tz,

    /// Retry policy for API requests.
    pub client: ClientOptions,
}

impl Config {
    /// Loads and validates the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, not valid
    /// TOML, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading configuration");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML or fails validation.
    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: origin.to_string(),
            source: e,
        })?;

        let config = Self::try_from_file(file, origin)?;
        debug!(
            repos = config.repos.len(),
            limit = config.limit,
            random = config.random,
            time_zone = %config.time_zone,
            "Configuration validated"
        );
        Ok(config)
    }

    fn try_from_file(file: ConfigFile, origin: &str) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: origin.to_string(),
            message,
        };

        if file.projects.repos.is_empty() {
            return Err(invalid("projects.repos must not be empty".to_string()));
        }

        if file.projects.limit == 0 {
            return Err(invalid("projects.limit must be at least 1".to_string()));
        }

        let mut seen = HashSet::new();
        for repo in &file.projects.repos {
            if split_full_name(repo).is_none() {
                return Err(invalid(format!(
                    "'{repo}' is not a repository identifier of the form owner/name"
                )));
            }
            if !seen.insert(repo.as_str()) {
                return Err(invalid(format!("'{repo}' is listed more than once")));
            }
        }

        let time_zone: Tz = file
            .time_zone
            .parse()
            .map_err(|_| invalid(format!("unknown time zone '{}'", file.time_zone)))?;

        if file.client.max_attempts == 0 {
            return Err(invalid("client.max-attempts must be at least 1".to_string()));
        }

        Ok(Self {
            repos: file.projects.repos,
            limit: file.projects.limit,
            random: file.projects.random,
            motto: file.motto,
            time_zone,
            client: ClientOptions {
                max_attempts: file.client.max_attempts,
                retry_delay: Duration::from_millis(file.client.retry_delay_ms),
                timeout: Duration::from_millis(file.client.timeout_ms),
            },
        })
    }
}
