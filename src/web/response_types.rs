//! Response bodies for the web endpoints that are not a
//! [`GenerationResult`](crate::generator::GenerationResult).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::frequency::CacheStatus;

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub title: String,
    pub description: String,
    pub fun_fact: String,
    pub disclaimer: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
    pub cache: CacheStatus,
}
