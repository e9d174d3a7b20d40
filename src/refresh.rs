//! # Cache Refresh Task
//!
//! Periodically invalidates and repopulates the frequency cache. The task is
//! owned by the service lifecycle: started after the core is built, stopped on
//! shutdown. The cache itself knows nothing about timers.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::frequency::FrequencyCache;

/// Periodic invalidate-and-refetch loop over the frequency cache
#[derive(Debug)]
pub struct CacheRefreshTask {
    cache: Arc<FrequencyCache>,
    interval: Duration,
}

/// Handle to a running refresh loop
#[derive(Debug)]
pub struct RefreshTaskHandle {
    shutdown_sender: Option<oneshot::Sender<()>>,
    join_handle: JoinHandle<()>,
}

impl CacheRefreshTask {
    pub fn new(cache: Arc<FrequencyCache>, interval: Duration) -> Self {
        Self { cache, interval }
    }

    /// Spawn the loop; the first refresh happens one full interval from now
    pub fn start(self) -> RefreshTaskHandle {
        let (shutdown_sender, mut shutdown_receiver) = oneshot::channel::<()>();
        let Self { cache, interval } = self;

        info!(interval_seconds = interval.as_secs(), "Starting frequency cache refresh task");

        let join_handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let table = cache.refresh().await;
                        if table.is_empty() {
                            warn!("Scheduled refresh returned no data; next request will retry");
                        } else {
                            info!(entries = table.len(), "Scheduled frequency cache refresh complete");
                        }
                    }
                    _ = &mut shutdown_receiver => {
                        debug!("Refresh task received shutdown signal");
                        break;
                    }
                }
            }

            info!("Frequency cache refresh task stopped");
        });

        RefreshTaskHandle {
            shutdown_sender: Some(shutdown_sender),
            join_handle,
        }
    }
}

impl RefreshTaskHandle {
    pub fn is_running(&self) -> bool {
        !self.join_handle.is_finished()
    }

    /// Signal the loop to stop and wait for it to exit
    ///
    /// A refresh already in flight is allowed to finish first.
    pub async fn stop(mut self) {
        if let Some(sender) = self.shutdown_sender.take() {
            let _ = sender.send(());
        }
        if let Err(e) = self.join_handle.await {
            warn!(error = %e, "Refresh task ended abnormally");
        }
    }
}
