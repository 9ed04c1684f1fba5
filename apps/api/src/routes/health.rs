use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and which strategies are available.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-ats",
        "strategies": {
            "ruleBased": true,
            "ai": state.ai.is_some()
        },
        "lexicon": {
            "sections": state.lexicon.section_names().collect::<Vec<_>>(),
            "keywords": state.lexicon.keywords().len()
        }
    }))
}
