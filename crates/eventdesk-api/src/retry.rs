//! Bounded retry with exponential backoff for idempotent requests.
//!
//! Only GETs go through [`send_with_retry`]. Mutating verbs are sent once:
//! replaying a POST after a dropped response could create a duplicate record.
//!
//! Retryable outcomes are connection failures, timeouts, HTTP 429 and
//! HTTP 5xx. Any other 4xx is permanent and returned immediately.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::warn;

/// How many times, and how patiently, a GET is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt. `0` disables retrying.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(4),
        }
    }
}

impl RetryPolicy {
    /// A policy that sends every request exactly once.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Same backoff shape with a different retry budget.
    pub fn with_max_retries(self, max_retries: u32) -> Self {
        Self {
            max_retries,
            ..self
        }
    }

    /// Delay before retry number `attempt` (0-based): `base * 2^attempt`, capped.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Whether a response status is worth another attempt.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Send a request built fresh by `build_request` on each attempt.
///
/// Returns the last response once it is non-retryable or the retry budget is
/// spent; callers still inspect the status. Transport errors surface only
/// after the budget is exhausted.
pub(crate) async fn send_with_retry<F>(
    policy: &RetryPolicy,
    build_request: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> reqwest::RequestBuilder,
{
    let mut attempt = 0;
    loop {
        let exhausted = attempt >= policy.max_retries;
        match build_request().send().await {
            Ok(resp) if !exhausted && is_retryable_status(resp.status()) => {
                let delay = policy.delay_for(attempt);
                warn!(
                    url = %resp.url(),
                    status = resp.status().as_u16(),
                    retry = attempt + 1,
                    max_retries = policy.max_retries,
                    "transient HTTP status, retrying in {delay:?}"
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) if !exhausted && (e.is_timeout() || e.is_connect()) => {
                let delay = policy.delay_for(attempt);
                warn!(
                    error = %e,
                    retry = attempt + 1,
                    max_retries = policy.max_retries,
                    "transport error, retrying in {delay:?}"
                );
                tokio::time::sleep(delay).await;
            }
            other => return other,
        }
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_doubles_until_capped() {
        let policy = RetryPolicy {
            max_retries: 5,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(500),
        };
        assert_eq!(policy.delay_for(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for(2), Duration::from_millis(400));
        assert_eq!(policy.delay_for(3), Duration::from_millis(500));
        assert_eq!(policy.delay_for(40), Duration::from_millis(500));
    }

    #[test]
    fn only_throttling_and_server_errors_retry() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::UNPROCESSABLE_ENTITY));
        assert!(!is_retryable_status(StatusCode::OK));
    }

    #[test]
    fn none_disables_retries() {
        assert_eq!(RetryPolicy::none().max_retries, 0);
        assert_eq!(RetryPolicy::default().with_max_retries(7).max_retries, 7);
    }
}
