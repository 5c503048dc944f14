//! CLI for the profile README generator.
//!
//! Fetches repository metadata from GitHub and regenerates the README and
//! its HTML rendering from a template.

use clap::Parser;
use profile_readme::{RunSummary, Runner, RunnerConfig, RunnerError, DEFAULT_API_URL};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Profile README generator - Render a README from a template and GitHub metadata.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = "readme.toml")]
    config: PathBuf,

    /// Path to the README template.
    #[arg(long, default_value = "readme.template.md")]
    template: PathBuf,

    /// Path the rendered README is written to.
    #[arg(long, default_value = "readme.md")]
    output: PathBuf,

    /// Path the HTML rendering is written to.
    #[arg(long, default_value = "index.html")]
    html_output: PathBuf,

    /// GitHub REST API base URL.
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// GitHub Personal Access Token, raises the API rate limit.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Both ring and aws-lc-rs may be compiled in; pick one before any TLS use
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Log level filtering comes from the `RUST_LOG` env var and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut config = RunnerConfig::new(args.config, args.template, args.output, args.html_output)
        .with_api_url(args.api_url);
    if let Some(token) = args.token.filter(|t| !t.is_empty()) {
        config = config.with_token(token);
    }
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Repositories shown: {}", summary.repositories.len());
    for repo in &summary.repositories {
        println!("    - {repo}");
    }
    println!("  README: {}", summary.output_path.display());
    println!("  HTML: {}", summary.html_output_path.display());
}
