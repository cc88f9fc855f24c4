pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        // No upload size cap: the whole file is buffered in memory for the
        // duration of the request, same as the extraction step needs anyway.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
