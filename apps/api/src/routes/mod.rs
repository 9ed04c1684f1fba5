pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::extract::handlers as extract_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/ai", post(handlers::handle_analyze_ai))
        // Document upload
        .route(
            "/api/v1/resumes/parse",
            post(extract_handlers::handle_parse_resume),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
