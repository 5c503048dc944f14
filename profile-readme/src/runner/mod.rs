//! Orchestrates a README generation run.
//!
//! A run is linear: load the template, select repositories, fetch their
//! metadata, substitute the generated fragments, then write the README and
//! its HTML rendering. Any failure aborts the run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::Config;
use crate::github::{build_client, fetch_repositories};
use crate::markdown::render_html;
use crate::selection::select_repositories;
use crate::summary::RunSummary;
use crate::templates::{substitute, TemplateRenderer, Token};
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Generates the README from a template.
pub struct Runner {
    config: RunnerConfig,
    settings: Config,
    octocrab: Octocrab,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner, loading the configuration file named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the GitHub client
    /// cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let settings = Config::load(config.config_path())?;
        Self::with_settings(config, settings)
    }

    /// Builds a runner from already loaded settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the GitHub client cannot be built.
    pub fn with_settings(config: RunnerConfig, settings: Config) -> Result<Self, RunnerError> {
        let octocrab = build_client(config.api_url(), config.token())?;
        Ok(Self {
            config,
            settings,
            octocrab,
            renderer: TemplateRenderer::new(),
        })
    }

    /// Executes a run stamped with the current time.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        self.run_at(Utc::now()).await
    }

    /// Executes a run, rendering the footer as if generated at `now`.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RunSummary, RunnerError> {
        let template_path = self.config.template_path();
        info!(path = %template_path.display(), "Loading template");
        let template = tokio::fs::read_to_string(template_path)
            .await
            .map_err(|e| io_error("read", template_path, e))?;

        let selected = select_repositories(
            &self.settings.repos,
            self.settings.limit,
            self.settings.random,
        );
        info!(repos = ?selected, "Selected repositories");

        let repositories =
            fetch_repositories(&self.octocrab, &selected, &self.settings.client).await?;

        let time_zone = self.settings.time_zone;
        let projects = self
            .renderer
            .render_projects_table(&repositories, time_zone)?;
        let footer = self.renderer.render_footer(now, time_zone)?;

        let document = substitute(
            &template,
            &[
                (Token::OpensourceProjects, projects.as_str()),
                (Token::Footer, footer.as_str()),
                (Token::Motto, self.settings.motto.as_str()),
            ],
        );

        let output_path = self.config.output_path();
        remove_stale(output_path).await?;
        tokio::fs::write(output_path, &document)
            .await
            .map_err(|e| io_error("write", output_path, e))?;
        info!(path = %output_path.display(), "Wrote README");

        let html_output_path = self.config.html_output_path();
        tokio::fs::write(html_output_path, render_html(&document))
            .await
            .map_err(|e| io_error("write", html_output_path, e))?;
        info!(path = %html_output_path.display(), "Wrote HTML rendering");

        Ok(RunSummary {
            repositories: selected,
            output_path: output_path.to_path_buf(),
            html_output_path: html_output_path.to_path_buf(),
        })
    }
}

/// Deletes a previously generated file, if there is one.
async fn remove_stale(path: &Path) -> Result<(), RunnerError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            debug!(path = %path.display(), "Removed previous output");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error("remove", path, e)),
    }
}

fn io_error(action: &'static str, path: &Path, source: std::io::Error) -> RunnerError {
    RunnerError::Io {
        action,
        path: path.display().to_string(),
        source,
    }
}
