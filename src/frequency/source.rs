//! Frequency sources.
//!
//! A source never fails: every error is logged and collapsed into an empty
//! [`FrequencyTable`], which the rest of the pipeline reads as "no data".

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use super::FrequencyTable;
use crate::error::Result;
use crate::scraping::{parse_frequency_table, PageClient, PageSelectors};

/// Produces a fresh frequency table on every call
#[async_trait]
pub trait FrequencySource: Send + Sync + std::fmt::Debug {
    async fn fetch_draw_frequencies(&self) -> FrequencyTable;
}

/// Scrapes the frequency table from the external lottery page
#[derive(Debug, Clone)]
pub struct HttpFrequencySource {
    client: PageClient,
    selectors: Arc<PageSelectors>,
}

impl HttpFrequencySource {
    pub fn new(client: PageClient, selectors: Arc<PageSelectors>) -> Self {
        Self { client, selectors }
    }

    async fn try_fetch(&self) -> Result<FrequencyTable> {
        let html = self.client.fetch_page().await?;
        parse_frequency_table(&html, &self.selectors)
    }
}

#[async_trait]
impl FrequencySource for HttpFrequencySource {
    async fn fetch_draw_frequencies(&self) -> FrequencyTable {
        info!(url = %self.client.url(), "Fetching lotto draw frequencies from the website...");

        match self.try_fetch().await {
            Ok(table) => {
                info!(entries = table.len(), "Successfully fetched draw frequencies");
                table
            }
            Err(e) if e.is_fetch_failure() => {
                error!(url = %self.client.url(), error = %e, "Error fetching lotto draw frequencies");
                FrequencyTable::default()
            }
            Err(e) => {
                error!(url = %self.client.url(), error = %e, "Failed to parse lotto draw frequencies");
                FrequencyTable::default()
            }
        }
    }
}
