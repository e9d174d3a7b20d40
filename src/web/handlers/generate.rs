//! # Generation Handler

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::generator::GenerationResult;
use crate::web::state::AppState;

/// Generate lotto numbers: GET /generate
///
/// Always 200. Clients tell the outcomes apart by the body: a draw carries
/// `numbers`, a failure carries only `error`.
pub async fn generate(State(state): State<Arc<AppState>>) -> Json<GenerationResult> {
    Json(state.generator.generate().await)
}
