//! Axum route handlers for document upload.

use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_text;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeResponse {
    pub text: String,
    pub file_name: String,
}

/// POST /api/v1/resumes/parse
///
/// Accepts a multipart upload with a `file` field and returns its cleaned text.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        let text = extract_text(&file_name, content_type.as_deref(), data).await?;
        info!(file_name = %file_name, chars = text.len(), "resume text extracted");

        return Ok(Json(ParseResumeResponse { text, file_name }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
