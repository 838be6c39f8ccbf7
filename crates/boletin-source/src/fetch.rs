//! HTTP fetcher with browser-like headers

use crate::SourceError;
use async_trait::async_trait;
use boletin_domain::traits::PageFetcher;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT};
use std::time::Duration;
use tracing::debug;

/// Timeout for index page fetches (seconds).
pub const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 30;

/// Timeout for document downloads (seconds).
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 60;

// The index host serves different markup to non-browser clients, so the
// fetcher presents ordinary desktop-browser headers.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "es-ES,es;q=0.9,en;q=0.8";

/// HTTP implementation of the `PageFetcher` seam.
///
/// One client serves both index pages and document downloads; downloads get
/// a longer per-request timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
    download_timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeouts.
    pub fn new() -> Result<Self, SourceError> {
        Self::with_timeouts(
            Duration::from_secs(DEFAULT_PAGE_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_DOWNLOAD_TIMEOUT_SECS),
        )
    }

    /// Create a fetcher with explicit page and download timeouts.
    pub fn with_timeouts(
        page_timeout: Duration,
        download_timeout: Duration,
    ) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
        );
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(page_timeout)
            .build()?;

        Ok(Self {
            client,
            download_timeout,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    type Error = SourceError;

    async fn fetch_text(&self, url: &str) -> Result<String, Self::Error> {
        debug!("fetching page {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, Self::Error> {
        debug!("downloading {}", url);
        let response = self
            .client
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
