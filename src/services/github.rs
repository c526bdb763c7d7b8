use std::time::Duration;

use anyhow::Result;
use log::debug;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;

const GITHUB_API_BASE: &str = "https://api.github.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure modes of the single fetch. None of these are fatal to the
/// process: the caller reports them and carries on with an empty body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API rate limit exceeded. Consider using an API token.")]
    RateLimited,
    #[error("HTTP error: {0}")]
    UnexpectedStatus(StatusCode),
}

pub struct ActivityClient {
    client: reqwest::Client,
    base_url: String,
}

impl ActivityClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Builds a client against an arbitrary API root. Used by tests to point
    /// at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("github-activity-cli"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches the raw public-events feed for `username`.
    ///
    /// Returns the full response body on HTTP 200. Redirects are followed by
    /// the underlying client; the body is collected entirely in memory.
    pub async fn fetch_public_events(&self, username: &str) -> Result<String, FetchError> {
        let url = format!("{}/users/{}/events/public", self.base_url, username);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.text().await?),
            StatusCode::FORBIDDEN => Err(FetchError::RateLimited),
            status => Err(FetchError::UnexpectedStatus(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_body_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/octocat/events/public")
            .match_header("user-agent", "github-activity-cli")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"type":"PushEvent"}]"#)
            .create_async()
            .await;

        let client = ActivityClient::with_base_url(server.url()).unwrap();
        let body = client.fetch_public_events("octocat").await.unwrap();

        assert_eq!(body, r#"[{"type":"PushEvent"}]"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn maps_403_to_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/octocat/events/public")
            .with_status(403)
            .with_body(r#"{"message":"API rate limit exceeded"}"#)
            .create_async()
            .await;

        let client = ActivityClient::with_base_url(server.url()).unwrap();
        let err = client.fetch_public_events("octocat").await.unwrap_err();

        assert!(matches!(err, FetchError::RateLimited));
        assert!(err.to_string().contains("rate limit"));
    }

    #[tokio::test]
    async fn maps_other_statuses_to_unexpected_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/ghost/events/public")
            .with_status(404)
            .create_async()
            .await;

        let client = ActivityClient::with_base_url(server.url()).unwrap();
        let err = client.fetch_public_events("ghost").await.unwrap_err();

        match err {
            FetchError::UnexpectedStatus(status) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn reports_transport_failures() {
        // Nothing listens on this port.
        let client = ActivityClient::with_base_url("http://127.0.0.1:1").unwrap();
        let err = client.fetch_public_events("octocat").await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }
}
