#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod github;
pub mod markdown;
pub mod runner;
pub mod selection;
pub mod summary;
pub mod templates;

pub use config::{Config, ConfigError};
pub use github::{
    build_client, fetch_repositories, fetch_repository, split_full_name, ClientOptions,
    FetchError, RepositoryMetadata, DEFAULT_API_URL,
};
pub use markdown::render_html;
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use selection::{select_repositories, select_repositories_with};
pub use summary::RunSummary;
pub use templates::{
    collapse_markup, create_handlebars_registry, substitute, TemplateError, TemplateRenderer,
    Token,
};
