//! Repository metadata retrieval from the GitHub REST API.
//!
//! Each repository is fetched with its own request. Requests for the whole
//! selection run concurrently and are joined in selection order; the first
//! request that exhausts its retry budget fails the whole batch.

mod error;
mod metadata;
mod options;

pub use error::FetchError;
pub use metadata::RepositoryMetadata;
pub use options::ClientOptions;

use futures::future::try_join_all;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Builds the GitHub client used for a run.
///
/// Octocrab's own retry layer is disabled so [`ClientOptions`] is the only
/// retry policy in effect.
///
/// # Errors
///
/// Returns an error if `api_url` is not a valid URI or the client cannot be built.
pub fn build_client(api_url: &str, token: Option<&str>) -> Result<Octocrab, octocrab::Error> {
    let mut builder = Octocrab::builder()
        .base_uri(api_url)?
        .add_retry_config(RetryConfig::None);

    if let Some(token) = token {
        builder = builder.personal_token(token.to_string());
    }

    builder.build()
}

/// Splits an "owner/name" identifier into its halves.
///
/// Returns `None` unless there is exactly one `/` with non-empty,
/// whitespace-free text on both sides.
#[must_use]
pub fn split_full_name(full_name: &str) -> Option<(&str, &str)> {
    let (owner, name) = full_name.split_once('/')?;
    let valid = |part: &str| !part.is_empty() && !part.contains(['/', ' ', '\t', '\n']);
    (valid(owner) && valid(name)).then_some((owner, name))
}

/// Fetches metadata for every repository in `full_names`.
///
/// Results are returned in the order of `full_names`, whatever order the
/// requests complete in.
///
/// # Errors
///
/// Returns the first [`FetchError`] produced once any request runs out of attempts.
pub async fn fetch_repositories(
    octocrab: &Octocrab,
    full_names: &[String],
    options: &ClientOptions,
) -> Result<Vec<RepositoryMetadata>, FetchError> {
    info!(count = full_names.len(), "Fetching repository metadata");

    let repositories = try_join_all(
        full_names
            .iter()
            .map(|full_name| fetch_repository(octocrab, full_name, options)),
    )
    .await?;

    info!(count = repositories.len(), "Fetched repository metadata");
    Ok(repositories)
}

/// Fetches metadata for a single repository, retrying per `options`.
///
/// # Errors
///
/// Returns [`FetchError::InvalidIdentifier`] for a malformed identifier, or
/// the error of the final attempt once the attempt budget is spent.
pub async fn fetch_repository(
    octocrab: &Octocrab,
    full_name: &str,
    options: &ClientOptions,
) -> Result<RepositoryMetadata, FetchError> {
    let (owner, name) = split_full_name(full_name).ok_or_else(|| FetchError::InvalidIdentifier {
        full_name: full_name.to_string(),
    })?;
    let route = format!("/repos/{owner}/{name}");
    let max_attempts = options.max_attempts.max(1);

    let span = info_span!("fetch", repo = %full_name);

    async {
        let mut attempt = 0;
        loop {
            attempt += 1;
            debug!(attempt, route = %route, "Requesting repository");

            let request = octocrab.get::<RepositoryMetadata, _, ()>(&route, None::<&()>);
            let failure = match tokio::time::timeout(options.timeout, request).await {
                Ok(Ok(metadata)) => return Ok(metadata.normalized()),
                Ok(Err(source)) => FetchError::GitHubError {
                    full_name: full_name.to_string(),
                    attempts: attempt,
                    source,
                },
                Err(_) => FetchError::TimedOut {
                    full_name: full_name.to_string(),
                    attempts: attempt,
                    timeout: options.timeout,
                },
            };

            if attempt >= max_attempts {
                error!(error = %failure, "Giving up on repository");
                return Err(failure);
            }

            warn!(
                attempt,
                max_attempts,
                error = %failure,
                "Request failed, retrying"
            );
            tokio::time::sleep(options.retry_delay).await;
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_valid_identifier() {
        assert_eq!(split_full_name("dud9/parfait"), Some(("dud9", "parfait")));
    }

    #[test]
    fn split_rejects_malformed_identifiers() {
        for id in ["", "parfait", "/parfait", "dud9/", "a/b/c", "a b/c"] {
            assert_eq!(split_full_name(id), None, "{id}");
        }
    }
}
