//! Runner configuration.

use crate::github::DEFAULT_API_URL;
use std::path::{Path, PathBuf};

/// Paths and API settings for a README generation run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the TOML configuration file.
    config_path: PathBuf,
    /// Path to the README template.
    template_path: PathBuf,
    /// Path the rendered README is written to.
    output_path: PathBuf,
    /// Path the HTML rendering of the README is written to.
    html_output_path: PathBuf,
    /// GitHub REST API base URL.
    api_url: String,
    /// Optional GitHub token used to authenticate API calls.
    token: Option<String>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run against the public GitHub API.
    pub fn new(
        config_path: PathBuf,
        template_path: PathBuf,
        output_path: PathBuf,
        html_output_path: PathBuf,
    ) -> Self {
        Self {
            config_path,
            template_path,
            output_path,
            html_output_path,
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }

    /// Sets a custom API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the GitHub token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns the configuration file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the template path.
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Returns the README output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the HTML output path.
    pub fn html_output_path(&self) -> &Path {
        &self.html_output_path
    }

    /// Returns the API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
