//! Axum route handlers for the Analysis API.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::strategy::{AnalysisError, ResumeAnalyzer};
use crate::analysis::text::word_count;
use crate::errors::AppError;
use crate::state::AppState;

pub const STRATEGY_HEADER: &str = "x-analysis-strategy";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalyzeRequest {
    #[serde(default)]
    pub text: String,
    /// Answer with the rule-based result when the AI strategy fails.
    #[serde(default)]
    pub fallback_to_rules: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Deterministic rule-based analysis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Response, AppError> {
    require_text(&request.text)?;
    run(state.rule_based.as_ref(), &request.text).await
}

/// POST /api/v1/analyze/ai
///
/// Hosted-model analysis. Falls back to the rule-based strategy only when the
/// caller asks for it.
pub async fn handle_analyze_ai(
    State(state): State<AppState>,
    Json(request): Json<AiAnalyzeRequest>,
) -> Result<Response, AppError> {
    require_text(&request.text)?;

    let outcome = match state.ai.as_deref() {
        Some(ai) => run(ai, &request.text).await,
        None => Err(AnalysisError::MissingCredentials.into()),
    };

    match outcome {
        Err(AppError::Analysis(e)) if request.fallback_to_rules => {
            warn!(error = %e, "AI analysis failed, falling back to rule-based analysis");
            run(state.rule_based.as_ref(), &request.text).await
        }
        other => other,
    }
}

fn require_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("No resume text provided".to_string()));
    }
    Ok(())
}

async fn run(analyzer: &dyn ResumeAnalyzer, text: &str) -> Result<Response, AppError> {
    let analysis_id = Uuid::new_v4();
    let strategy = analyzer.strategy();
    info!(
        %analysis_id,
        strategy = strategy.as_str(),
        words = word_count(text),
        "analysis started"
    );

    let result = analyzer.analyze(text).await?;

    info!(
        %analysis_id,
        strategy = strategy.as_str(),
        score = result.score,
        "analysis finished"
    );
    Ok(([(STRATEGY_HEADER, strategy.as_str())], Json(result)).into_response())
}
