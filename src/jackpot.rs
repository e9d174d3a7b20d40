//! # Jackpot Fetcher
//!
//! Scrapes the current jackpot display string. Independent of number
//! generation: a missing jackpot is simply left out of the response.
//!
//! A found jackpot is kept for the cache TTL so that `/generate` does not go
//! back to the external page on every request. Misses are not remembered.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::scraping::{parse_jackpot, PageClient, PageSelectors};

#[async_trait]
pub trait JackpotSource: Send + Sync + std::fmt::Debug {
    /// `None` when the page has no jackpot element or cannot be fetched
    async fn get_jackpot(&self) -> Option<String>;
}

#[derive(Debug)]
struct CachedJackpot {
    text: String,
    stored_at: Instant,
}

/// Reads the jackpot span from the external lottery page
#[derive(Debug)]
pub struct HttpJackpotSource {
    client: PageClient,
    selectors: Arc<PageSelectors>,
    ttl: Duration,
    last_seen: RwLock<Option<CachedJackpot>>,
}

impl HttpJackpotSource {
    pub fn new(client: PageClient, selectors: Arc<PageSelectors>, ttl: Duration) -> Self {
        Self {
            client,
            selectors,
            ttl,
            last_seen: RwLock::new(None),
        }
    }

    fn cached(&self) -> Option<String> {
        self.last_seen
            .read()
            .as_ref()
            .filter(|cached| cached.stored_at.elapsed() < self.ttl)
            .map(|cached| cached.text.clone())
    }

    async fn fetch(&self) -> Option<String> {
        let html = match self.client.fetch_page().await {
            Ok(html) => html,
            Err(e) => {
                warn!(url = %self.client.url(), error = %e, "Error fetching jackpot");
                return None;
            }
        };

        let jackpot = parse_jackpot(&html, &self.selectors);
        match &jackpot {
            Some(text) => debug!(jackpot = %text, "Jackpot found"),
            None => warn!("Jackpot element not found; page structure may have changed"),
        }
        jackpot
    }
}

#[async_trait]
impl JackpotSource for HttpJackpotSource {
    async fn get_jackpot(&self) -> Option<String> {
        if let Some(text) = self.cached() {
            return Some(text);
        }

        let jackpot = self.fetch().await?;
        *self.last_seen.write() = Some(CachedJackpot {
            text: jackpot.clone(),
            stored_at: Instant::now(),
        });
        Some(jackpot)
    }
}
