//! Single-slot frequency cache.
//!
//! There is exactly one cached value because the source takes no arguments. The
//! slot holds the whole table behind an `Arc`, so readers always see either the
//! previous table or the new one, never a half-built mix.
//!
//! Concurrent misses may fetch redundantly; the last writer wins.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::{FrequencySource, FrequencyTable};

#[derive(Debug, Clone)]
struct CachedFrequencies {
    table: Arc<FrequencyTable>,
    refreshed_at: DateTime<Utc>,
    stored_at: Instant,
}

/// Snapshot of the cache slot for health reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStatus {
    pub cached: bool,
    pub entries: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Memoizes a [`FrequencySource`] in one slot
pub struct FrequencyCache {
    source: Arc<dyn FrequencySource>,
    slot: RwLock<Option<CachedFrequencies>>,
    ttl: Duration,
}

impl std::fmt::Debug for FrequencyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrequencyCache")
            .field("source", &self.source)
            .field("ttl", &self.ttl)
            .field("status", &self.status())
            .finish()
    }
}

impl FrequencyCache {
    pub fn new(source: Arc<dyn FrequencySource>, ttl: Duration) -> Self {
        Self {
            source,
            slot: RwLock::new(None),
            ttl,
        }
    }

    /// Return the cached table, fetching it on a miss
    ///
    /// An empty result is handed back but not stored, so the next call tries
    /// the source again.
    pub async fn get(&self) -> Arc<FrequencyTable> {
        if let Some(table) = self.cached() {
            debug!(entries = table.len(), "Frequency cache HIT");
            return table;
        }

        debug!("Frequency cache MISS");
        let table = Arc::new(self.source.fetch_draw_frequencies().await);

        if table.is_empty() {
            warn!("Frequency source returned no data; leaving cache slot empty");
            return table;
        }

        *self.slot.write() = Some(CachedFrequencies {
            table: Arc::clone(&table),
            refreshed_at: Utc::now(),
            stored_at: Instant::now(),
        });
        debug!(entries = table.len(), "Frequency cache SET");

        table
    }

    /// Clear the slot unconditionally
    pub fn invalidate(&self) {
        *self.slot.write() = None;
        info!("Frequency cache invalidated");
    }

    /// Invalidate, then repopulate from the source
    pub async fn refresh(&self) -> Arc<FrequencyTable> {
        info!("Refreshing frequency cache...");
        self.invalidate();
        self.get().await
    }

    /// Expired entries report as not cached, matching what `get` would do
    pub fn status(&self) -> CacheStatus {
        match self.slot.read().as_ref().filter(|cached| self.is_fresh(cached)) {
            Some(cached) => CacheStatus {
                cached: true,
                entries: cached.table.len(),
                refreshed_at: Some(cached.refreshed_at),
            },
            None => CacheStatus {
                cached: false,
                entries: 0,
                refreshed_at: None,
            },
        }
    }

    fn cached(&self) -> Option<Arc<FrequencyTable>> {
        self.slot
            .read()
            .as_ref()
            .filter(|cached| self.is_fresh(cached))
            .map(|cached| Arc::clone(&cached.table))
    }

    fn is_fresh(&self, cached: &CachedFrequencies) -> bool {
        cached.stored_at.elapsed() < self.ttl
    }
}
