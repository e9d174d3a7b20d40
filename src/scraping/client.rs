//! HTTP client for the external lottery page.

use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use crate::config::ScraperConfig;
use crate::error::{LottoscopeError, Result};

/// Downloads the lottery page with a bounded timeout
///
/// One attempt per call; there are no retries at this layer.
#[derive(Clone)]
pub struct PageClient {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl std::fmt::Debug for PageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageClient")
            .field("url", &self.url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PageClient {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        Self::with_timeout(config, config.timeout())
    }

    /// Same page, different timeout
    pub fn with_timeout(config: &ScraperConfig, timeout: Duration) -> Result<Self> {
        let url = Url::parse(&config.url).map_err(|e| {
            LottoscopeError::config_error(format!("Invalid scraper URL '{}': {}", config.url, e))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("lottoscope/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                LottoscopeError::config_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Fetch the page body; non-2xx responses are errors
    pub async fn fetch_page(&self) -> Result<String> {
        debug!(url = %self.url, timeout_ms = self.timeout.as_millis() as u64, "Fetching lottery page");

        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LottoscopeError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!(url = %self.url, bytes = body.len(), "Lottery page fetched");
        Ok(body)
    }
}
