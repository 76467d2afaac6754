//! HTTP transport for the earthquake feed.

mod basic;

pub use basic::BasicClient;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Request, Response};
use tracing::debug;

/// Executes a prepared request. [`UsgsFeed`](crate::source::UsgsFeed) is
/// generic over this so the transport can be swapped.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

/// GETs `url` and returns the response body. Non-2xx statuses are errors.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(
        reqwest::Method::GET,
        url.parse().with_context(|| format!("invalid feed url '{url}'"))?,
    );

    let resp = client.execute(req).await?.error_for_status()?;
    let bytes = resp.bytes().await?.to_vec();
    debug!(url, bytes = bytes.len(), "Feed response received");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Answers every request with a fixed status and body.
    struct CannedClient {
        status: u16,
        body: &'static [u8],
    }

    #[async_trait]
    impl HttpClient for CannedClient {
        async fn execute(&self, _req: Request) -> reqwest::Result<Response> {
            let resp = http::Response::builder()
                .status(self.status)
                .body(self.body.to_vec())
                .unwrap();
            Ok(Response::from(resp))
        }
    }

    #[tokio::test]
    async fn test_fetch_bytes_returns_body() {
        let client = CannedClient { status: 200, body: b"{\"features\": []}" };
        let bytes = fetch_bytes(&client, "https://example.com/feed").await.unwrap();
        assert_eq!(bytes, b"{\"features\": []}");
    }

    #[tokio::test]
    async fn test_fetch_bytes_fails_on_server_error() {
        let client = CannedClient { status: 500, body: b"internal error" };
        assert!(fetch_bytes(&client, "https://example.com/feed").await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_bytes_fails_on_client_error() {
        let client = CannedClient { status: 400, body: b"Bad request" };
        assert!(fetch_bytes(&client, "https://example.com/feed").await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_bytes_rejects_bad_url() {
        let client = CannedClient { status: 200, body: b"" };
        assert!(fetch_bytes(&client, "not a url").await.is_err());
    }
}
