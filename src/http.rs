//! Outbound HTTP plumbing shared by the provider client and the peer clients

use reqwest::{header, Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::warn;

use crate::error::Result;

pub const USER_AGENT: &str = concat!("sportsync/", env!("CARGO_PKG_VERSION"));

/// Retry rules for outbound calls.
///
/// Only transport failures (connect errors and timeouts) are retried. A
/// response with a non-2xx status is returned to the caller as an error on the
/// first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            initial_backoff: Duration::from_millis(200),
        }
    }

    /// Single attempt, used for non-idempotent calls.
    pub fn none() -> Self {
        Self::new(0)
    }

    /// Delay before retry number `attempt` (0-based), doubling each time.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.initial_backoff * 2u32.saturating_pow(attempt)
    }

    fn should_retry(&self, err: &reqwest::Error, attempt: u32) -> bool {
        attempt < self.max_retries && (err.is_connect() || err.is_timeout())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Build the process-wide client with an explicit per-request timeout.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Send a request, retrying transport failures per `policy`, and reject non-2xx statuses.
pub async fn send_with_retry(request: RequestBuilder, policy: &RetryPolicy) -> Result<Response> {
    let mut attempt = 0;
    loop {
        // Bodies here are always buffered JSON, so cloning only fails for streams
        let Some(current) = request.try_clone() else {
            return Ok(request.send().await?.error_for_status()?);
        };

        match current.send().await {
            Ok(response) => return Ok(response.error_for_status()?),
            Err(err) if policy.should_retry(&err, attempt) => {
                let delay = policy.backoff(attempt);
                warn!(
                    error = %err,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "outbound request failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy::new(3);
        assert_eq!(policy.backoff(0), Duration::from_millis(200));
        assert_eq!(policy.backoff(1), Duration::from_millis(400));
        assert_eq!(policy.backoff(2), Duration::from_millis(800));
    }

    #[test]
    fn test_none_policy_has_no_retries() {
        assert_eq!(RetryPolicy::none().max_retries, 0);
        assert_eq!(RetryPolicy::default().max_retries, 2);
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_string("fine"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = build_client(Duration::from_secs(5)).unwrap();
        let response = send_with_retry(
            client.get(format!("{}/ok", mock_server.uri())),
            &RetryPolicy::default(),
        )
        .await
        .unwrap();

        assert_eq!(response.text().await.unwrap(), "fine");
    }

    #[tokio::test]
    async fn test_error_status_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = build_client(Duration::from_secs(5)).unwrap();
        let result = send_with_retry(
            client.get(format!("{}/broken", mock_server.uri())),
            &RetryPolicy::default(),
        )
        .await;

        assert!(result.unwrap_err().is_upstream());
    }

    #[tokio::test]
    async fn test_timeouts_are_retried_then_surface() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = build_client(Duration::from_millis(50)).unwrap();
        let policy = RetryPolicy {
            max_retries: 1,
            initial_backoff: Duration::from_millis(1),
        };
        let result =
            send_with_retry(client.get(format!("{}/slow", mock_server.uri())), &policy).await;

        assert!(result.is_err());
    }
}
