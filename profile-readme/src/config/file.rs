//! Raw configuration file deserialization.

use serde::Deserialize;

/// Parsed contents of the configuration file, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Repository selection settings.
    pub projects: ProjectsSection,

    /// Markup inserted in place of the motto marker.
    pub motto: String,

    /// IANA time zone used for footer timestamps (defaults to "UTC").
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// HTTP client retry policy.
    #[serde(default)]
    pub client: ClientSection,
}

/// The `[projects]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectsSection {
    /// Maximum number of repositories shown.
    pub limit: usize,

    /// Whether to shuffle the candidates before truncating.
    #[serde(default)]
    pub random: bool,

    /// Candidate repositories in "owner/name" form.
    pub repos: Vec<String>,
}

/// The optional `[client]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ClientSection {
    /// Total attempts per request, including the first one.
    pub max_attempts: u32,

    /// Delay between two attempts, in milliseconds.
    pub retry_delay_ms: u64,

    /// Per-attempt timeout, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            retry_delay_ms: 4000,
            timeout_ms: 4000,
        }
    }
}

pub(crate) fn default_time_zone() -> String {
    "UTC".to_string()
}
