//! Web Application State
//!
//! Shared state handed to every handler: the generator (which owns the path to
//! the frequency cache) and the web configuration.

use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::config::WebConfig;
use crate::frequency::FrequencyCache;
use crate::generator::LottoGenerator;

#[derive(Debug)]
pub struct AppState {
    pub config: WebConfig,
    pub generator: Arc<LottoGenerator>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: WebConfig, generator: Arc<LottoGenerator>) -> Self {
        info!(bind_address = %config.bind_address, "Web API state created");
        Self {
            config,
            generator,
            started_at: Instant::now(),
        }
    }

    pub fn cache(&self) -> &Arc<FrequencyCache> {
        self.generator.cache()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
