//! HTTP client retry policy.

use std::time::Duration;

/// Retry policy applied to every metadata request.
///
/// Failures are retried identically whatever their cause: transport errors,
/// non-success statuses, undecodable bodies and timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Total attempts per request, including the first one.
    pub max_attempts: u32,

    /// Fixed delay between two attempts.
    pub retry_delay: Duration,

    /// Upper bound for a single attempt.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            retry_delay: Duration::from_secs(4),
            timeout: Duration::from_secs(4),
        }
    }
}
