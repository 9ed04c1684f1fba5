use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::strategy::{AnalysisError, ErrorKind};
use crate::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Analysis error: {0}")]
    Analysis(AnalysisError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err.kind() {
            ErrorKind::Internal => AppError::Internal(anyhow::Error::new(err)),
            _ => AppError::Analysis(err),
        }
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::PdfParse(detail) => {
                tracing::error!("PDF parse error: {detail}");
                AppError::UnprocessableEntity("Failed to parse PDF resume.".to_string())
            }
            ExtractError::DocxParse(detail) => {
                tracing::error!("DOCX parse error: {detail}");
                AppError::UnprocessableEntity("Failed to parse DOCX resume.".to_string())
            }
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Analysis(e) => {
                let (status, code) = analysis_status(e);
                if status.is_server_error() {
                    tracing::error!("Analysis error: {e}");
                } else {
                    tracing::warn!("Analysis error: {e}");
                }
                (status, code, e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

fn analysis_status(err: &AnalysisError) -> (StatusCode, &'static str) {
    match (err, err.kind()) {
        (_, ErrorKind::Input) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        (AnalysisError::MissingCredentials, _) => {
            (StatusCode::SERVICE_UNAVAILABLE, "AI_UNAVAILABLE")
        }
        (_, ErrorKind::Credential) => (StatusCode::BAD_GATEWAY, "AI_CREDENTIALS_REJECTED"),
        (_, ErrorKind::Quota) => (StatusCode::TOO_MANY_REQUESTS, "AI_QUOTA_EXCEEDED"),
        (_, ErrorKind::UpstreamFormat) => (StatusCode::BAD_GATEWAY, "AI_INVALID_RESPONSE"),
        (_, ErrorKind::Generic) => (StatusCode::BAD_GATEWAY, "AI_ERROR"),
        (_, ErrorKind::Internal) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}
