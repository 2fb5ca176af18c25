pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

/// Upper bound for resume uploads. Scanned PDFs routinely exceed axum's
/// 2 MB default body limit.
const MAX_RESUME_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/match", post(handlers::handle_match))
        .layer(DefaultBodyLimit::max(MAX_RESUME_BYTES))
        .with_state(state)
}
