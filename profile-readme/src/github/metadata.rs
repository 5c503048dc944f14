//! Repository metadata returned by `GET /repos/{owner}/{name}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

/// The subset of repository fields shown in the README.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Repository page on GitHub.
    pub html_url: String,

    /// Project homepage, if one is set.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Creation time.
    pub created_at: DateTime<Utc>,

    /// Last push. GitHub reports `null` for repositories never pushed to.
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,

    /// Number of stargazers.
    #[serde(default)]
    pub stargazers_count: u64,
}

impl RepositoryMetadata {
    /// Cleans up fields GitHub returns in loose form.
    pub(crate) fn normalized(mut self) -> Self {
        self.homepage = self
            .homepage
            .take()
            .and_then(|homepage| normalize_homepage(&self.full_name, &homepage));
        self
    }
}

/// Turns a homepage value into an absolute URL.
///
/// Empty values are treated as absent and values without a scheme are
/// resolved against `https://`.
fn normalize_homepage(full_name: &str, homepage: &str) -> Option<String> {
    let homepage = homepage.trim();
    if homepage.is_empty() {
        return None;
    }

    let parsed = Url::parse(homepage).or_else(|_| Url::parse(&format!("https://{homepage}")));
    match parsed {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url.to_string()),
        _ => {
            warn!(repo = %full_name, homepage, "Ignoring unusable homepage");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(homepage: Option<&str>) -> RepositoryMetadata {
        RepositoryMetadata {
            full_name: "a/x".to_string(),
            html_url: "https://github.com/a/x".to_string(),
            homepage: homepage.map(str::to_string),
            created_at: "2021-03-04T05:06:07Z".parse().unwrap(),
            pushed_at: None,
            stargazers_count: 0,
        }
    }

    #[test]
    fn deserialize_api_payload() {
        let json = r#"{
            "id": 1,
            "full_name": "a/x",
            "html_url": "https://github.com/a/x",
            "homepage": null,
            "created_at": "2021-03-04T05:06:07Z",
            "pushed_at": "2024-01-02T03:04:05Z",
            "stargazers_count": 12
        }"#;

        let metadata: RepositoryMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.full_name, "a/x");
        assert_eq!(metadata.homepage, None);
        assert_eq!(metadata.stargazers_count, 12);
        assert!(metadata.pushed_at.is_some());
    }

    #[test]
    fn empty_homepage_is_absent() {
        assert_eq!(sample(Some("  ")).normalized().homepage, None);
    }

    #[test]
    fn homepage_without_scheme_gets_https() {
        let metadata = sample(Some("example.com/docs")).normalized();
        assert_eq!(
            metadata.homepage.as_deref(),
            Some("https://example.com/docs")
        );
    }

    #[test]
    fn absolute_homepage_is_kept() {
        let metadata = sample(Some("http://example.org/")).normalized();
        assert_eq!(metadata.homepage.as_deref(), Some("http://example.org/"));
    }
}
