//! # Web API Middleware
//!
//! Request ID generation, request tracing, CORS and request timeout.

pub mod request_id;

use axum::http::StatusCode;
use axum::middleware;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Apply the middleware stack
///
/// Layers listed last wrap everything above them, so tracing sees every
/// request, including ones that time out.
pub fn apply_middleware_stack(
    router: Router<Arc<AppState>>,
    request_timeout: Duration,
) -> Router<Arc<AppState>> {
    router
        .layer(middleware::from_fn(request_id::add_request_id))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Read-only public API: any origin may call it
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
