//! Shared fixtures for integration tests: scripted sources and a test server
//! bound to an ephemeral port.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lottoscope::config::LottoscopeConfig;
use lottoscope::{FrequencySource, FrequencyTable, JackpotSource, ServiceBootstrap, ServiceHandle};

/// Returns the same table on every fetch and counts calls
#[derive(Debug)]
pub struct StaticFrequencySource {
    table: FrequencyTable,
    calls: AtomicUsize,
}

impl StaticFrequencySource {
    pub fn new(table: FrequencyTable) -> Self {
        Self {
            table,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(FrequencyTable::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FrequencySource for StaticFrequencySource {
    async fn fetch_draw_frequencies(&self) -> FrequencyTable {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.table.clone()
    }
}

#[derive(Debug)]
pub struct PanickingFrequencySource;

#[async_trait]
impl FrequencySource for PanickingFrequencySource {
    async fn fetch_draw_frequencies(&self) -> FrequencyTable {
        panic!("source exploded");
    }
}

#[derive(Debug)]
pub struct StaticJackpotSource(pub Option<String>);

#[async_trait]
impl JackpotSource for StaticJackpotSource {
    async fn get_jackpot(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Five numbers with strictly decreasing counts
pub fn small_table() -> FrequencyTable {
    FrequencyTable::from([(1, 100), (2, 80), (3, 60), (4, 40), (5, 20)])
}

/// All 49 numbers, number `n` drawn `n` times
pub fn full_table() -> FrequencyTable {
    (1..=49u8).map(|n| (n, u32::from(n))).collect()
}

/// Ephemeral port, no background refresh, seeded RNG
pub fn test_config() -> LottoscopeConfig {
    let mut config = LottoscopeConfig::default();
    config.web.bind_address = "127.0.0.1:0".to_string();
    config.cache.refresh_enabled = false;
    config.cache.prime_on_startup = false;
    config.generator.rng_seed = Some(42);
    config
}

/// Running service plus an HTTP client pointed at it
pub struct TestServer {
    pub handle: ServiceHandle,
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestServer {
    pub async fn start(
        source: Arc<dyn FrequencySource>,
        jackpot: Option<Arc<dyn JackpotSource>>,
    ) -> lottoscope::Result<Self> {
        Self::start_with_config(test_config(), source, jackpot).await
    }

    pub async fn start_with_config(
        config: LottoscopeConfig,
        source: Arc<dyn FrequencySource>,
        jackpot: Option<Arc<dyn JackpotSource>>,
    ) -> lottoscope::Result<Self> {
        let handle = ServiceBootstrap::bootstrap_with_sources(config, source, jackpot).await?;
        let base_url = format!("http://{}", handle.local_addr);
        Ok(Self {
            handle,
            client: reqwest::Client::new(),
            base_url,
        })
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
    }

    /// GET a path and decode the body as JSON
    pub async fn get_json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let response = self.get(path).await.expect("request failed");
        let status = response.status();
        let body = response.text().await.expect("failed to read body");
        let json = serde_json::from_str(&body).expect("body is not JSON");
        (status, json)
    }

    pub async fn shutdown(self) -> lottoscope::Result<()> {
        self.handle.stop().await
    }
}
