//! # Health Check Handler

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use std::sync::Arc;

use crate::web::response_types::HealthResponse;
use crate::web::state::AppState;

/// Basic health check endpoint: GET /health
///
/// Reports the process as healthy whenever it can answer. An empty cache slot
/// is informational only; the next `/generate` call fetches on demand.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now(),
        cache: state.cache().status(),
    })
}
