//! Route definitions grouped by functionality.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::web::{handlers, state::AppState};

/// Public lotto routes
pub fn lotto_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::home::home))
        .route("/generate", get(handlers::generate::generate))
}

/// Health check routes for monitoring
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(handlers::health::health_check))
}
