//! reqwest-backed page fetcher for the live timetable site.

use async_trait::async_trait;

use super::{FetchError, PageFetcher};

/// Production [`PageFetcher`] over a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxies, timeouts, user agent).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        // No status check: a non-2xx page with a body flows through like
        // any other page; only an empty body counts as "no data" downstream.
        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}
