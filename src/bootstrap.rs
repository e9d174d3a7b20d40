//! # Service Bootstrap
//!
//! Builds the pipeline from configuration, starts the web server and the cache
//! refresh task, and returns a [`ServiceHandle`] that stops both.
//!
//! ```text
//! PageClient ─┬─▶ HttpFrequencySource ─▶ FrequencyCache ─┬─▶ LottoGenerator ─▶ AppState ─▶ axum
//!             └─▶ HttpJackpotSource ─────────────────────┘
//!                                       CacheRefreshTask ◀┘
//! ```

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::LottoscopeConfig;
use crate::error::{LottoscopeError, Result};
use crate::frequency::{FrequencyCache, FrequencySource, HttpFrequencySource};
use crate::generator::LottoGenerator;
use crate::jackpot::{HttpJackpotSource, JackpotSource};
use crate::refresh::{CacheRefreshTask, RefreshTaskHandle};
use crate::scraping::{PageClient, PageSelectors};
use crate::web::{create_app, AppState};

#[derive(Debug)]
pub struct ServiceBootstrap;

impl ServiceBootstrap {
    /// Bootstrap against the external lottery page named in the configuration
    pub async fn bootstrap(config: LottoscopeConfig) -> Result<ServiceHandle> {
        let client = PageClient::new(&config.scraper)?;
        let selectors = Arc::new(PageSelectors::from_config(&config.scraper)?);

        let source: Arc<dyn FrequencySource> =
            Arc::new(HttpFrequencySource::new(client, selectors.clone()));
        let jackpot: Option<Arc<dyn JackpotSource>> = if config.generator.jackpot_enabled {
            let jackpot_client =
                PageClient::with_timeout(&config.scraper, config.scraper.jackpot_timeout())?;
            Some(Arc::new(HttpJackpotSource::new(
                jackpot_client,
                selectors,
                config.cache.ttl(),
            )))
        } else {
            info!("BOOTSTRAP: Jackpot lookup disabled in configuration");
            None
        };

        Self::bootstrap_with_sources(config, source, jackpot).await
    }

    /// Bootstrap with caller-supplied sources
    pub async fn bootstrap_with_sources(
        config: LottoscopeConfig,
        source: Arc<dyn FrequencySource>,
        jackpot: Option<Arc<dyn JackpotSource>>,
    ) -> Result<ServiceHandle> {
        let cache = Arc::new(FrequencyCache::new(source, config.cache.ttl()));

        if config.cache.prime_on_startup {
            let table = cache.get().await;
            if table.is_empty() {
                warn!("BOOTSTRAP: Could not prime frequency cache; requests will retry on demand");
            } else {
                info!(entries = table.len(), "BOOTSTRAP: Frequency cache primed");
            }
        }

        let generator = Arc::new(LottoGenerator::new(
            cache.clone(),
            jackpot,
            config.generator.clone(),
        ));
        let state = Arc::new(AppState::new(config.web.clone(), generator));
        let app = create_app(state.clone());

        let bind_address = config.web.bind_address.clone();
        let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
            LottoscopeError::config_error(format!("Failed to bind to {}: {}", bind_address, e))
        })?;
        let local_addr = listener.local_addr()?;

        let (shutdown_sender, shutdown_receiver) = oneshot::channel::<()>();
        let server_handle = tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                shutdown_receiver.await.ok();
            });
            if let Err(e) = server.await {
                error!(error = %e, "Web server error");
            }
        });
        info!(address = %local_addr, "BOOTSTRAP: Web server started");

        let refresh_task = if config.cache.refresh_enabled {
            Some(CacheRefreshTask::new(cache, config.cache.refresh_interval()).start())
        } else {
            info!("BOOTSTRAP: Scheduled cache refresh disabled in configuration");
            None
        };

        info!("BOOTSTRAP: Lottoscope service bootstrap completed successfully");
        Ok(ServiceHandle {
            state,
            local_addr,
            server_shutdown: Some(shutdown_sender),
            server_handle,
            refresh_task,
        })
    }
}

/// Running service; dropping it leaves the tasks running, call [`stop`](Self::stop)
#[derive(Debug)]
pub struct ServiceHandle {
    pub state: Arc<AppState>,
    pub local_addr: SocketAddr,
    server_shutdown: Option<oneshot::Sender<()>>,
    server_handle: JoinHandle<()>,
    refresh_task: Option<RefreshTaskHandle>,
}

impl ServiceHandle {
    pub fn refresh_task_running(&self) -> bool {
        self.refresh_task
            .as_ref()
            .map(RefreshTaskHandle::is_running)
            .unwrap_or(false)
    }

    /// Stop the refresh task, then drain the web server
    pub async fn stop(mut self) -> Result<()> {
        if let Some(refresh_task) = self.refresh_task.take() {
            refresh_task.stop().await;
        }

        if let Some(sender) = self.server_shutdown.take() {
            let _ = sender.send(());
        }
        self.server_handle
            .await
            .map_err(|e| LottoscopeError::Internal(format!("Web server task failed: {}", e)))?;

        info!("Lottoscope service stopped");
        Ok(())
    }
}
