//! Retry policy for session backend calls.
//!
//! The hosted auth and REST services sit behind a gateway that answers
//! `429`, `502`, `503` or `504` while it is overloaded or restarting. Those
//! statuses and transport failures are retried with doubling delays. Every
//! other response, `401` and `500` included, goes back to the caller on the
//! first attempt.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;

/// How often and how patiently a request is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt. `0` disables retrying.
    pub max_retries: u32,
    /// Delay before the first retry. Doubles for each further retry.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(250),
        }
    }
}

impl RetryPolicy {
    /// Send every request exactly once.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    /// Delay before retry number `retry` (zero-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry))
    }

    /// Run `send` until it yields a final outcome or the retries run out.
    ///
    /// The last outcome is returned as-is, so a gateway status that is
    /// still failing after the final retry reaches the caller as a response.
    pub(crate) async fn send<F, Fut>(
        &self,
        endpoint: &str,
        send: F,
    ) -> Result<reqwest::Response, reqwest::Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let mut retry = 0;
        loop {
            let outcome = send().await;
            let reason = match &outcome {
                Ok(resp) if is_transient(resp.status()) => resp.status().to_string(),
                Ok(_) => return outcome,
                Err(e) => e.to_string(),
            };
            if retry >= self.max_retries {
                return outcome;
            }
            let delay = self.delay_for(retry);
            retry += 1;
            tracing::warn!(
                endpoint,
                retry,
                max_retries = self.max_retries,
                "backend unavailable ({reason}), retrying in {delay:?}"
            );
            tokio::time::sleep(delay).await;
        }
    }
}

/// Statuses the gateway uses for conditions that clear on their own.
fn is_transient(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn delays_double_from_base() {
        let policy = RetryPolicy {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
        };
        assert_eq!(policy.delay_for(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for(2), Duration::from_millis(400));
        assert_eq!(policy.delay_for(40), policy.delay_for(50));
    }

    #[test]
    fn only_gateway_statuses_are_transient() {
        assert!(is_transient(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_transient(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_transient(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!is_transient(StatusCode::UNAUTHORIZED));
        assert!(!is_transient(StatusCode::OK));
    }

    #[tokio::test]
    async fn transport_failures_use_every_retry() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy {
            max_retries: 2,
            base_delay: Duration::from_millis(10),
        };
        let client = reqwest::Client::new();

        let result = policy
            .send("GET /closed", || {
                calls.fetch_add(1, Ordering::SeqCst);
                // Nothing listens on port 1.
                client.get("http://127.0.0.1:1/").send()
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn disabled_policy_tries_once() {
        let calls = AtomicU32::new(0);
        let client = reqwest::Client::new();

        let result = RetryPolicy::none()
            .send("GET /closed", || {
                calls.fetch_add(1, Ordering::SeqCst);
                client.get("http://127.0.0.1:1/").send()
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
