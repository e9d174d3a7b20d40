//! # Web API
//!
//! axum router for the lottoscope HTTP surface:
//!
//! - `GET /` - service description plus a fun fact
//! - `GET /generate` - a freshly generated set of numbers
//! - `GET /health` - liveness and frequency cache status

use axum::Router;
use std::sync::Arc;
use tracing::info;

pub mod handlers;
pub mod middleware;
pub mod response_types;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Create the web application with all routes and middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let request_timeout = state.config.request_timeout();

    let router = Router::new()
        .merge(routes::lotto_routes())
        .merge(routes::health_routes());

    let app = middleware::apply_middleware_stack(router, request_timeout).with_state(state);

    info!("Web application created with all routes and middleware");
    app
}
