//! The strategy seam. `AppState` holds each strategy as `Arc<dyn ResumeAnalyzer>`
//! so handlers never depend on a concrete backend.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::analysis::models::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    RuleBased,
    Ai,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::RuleBased => "rule-based",
            Strategy::Ai => "ai",
        }
    }
}

/// Every failure an analysis strategy may surface. The rule-based strategy
/// never produces one for non-empty input.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No resume text provided")]
    EmptyInput,

    #[error("AI analysis is unavailable: no API key is configured")]
    MissingCredentials,

    #[error("Invalid API key. Check the configured key for the AI service.")]
    InvalidCredentials,

    #[error("API limit reached. Please wait a moment before trying again.")]
    QuotaExceeded,

    #[error("AI returned an empty response")]
    EmptyResponse,

    #[error("AI returned an invalid format. Please try again.")]
    InvalidFormat(String),

    #[error("AI analysis error: {0}")]
    Failed(String),

    /// The analysis could not run at all (e.g. its worker task panicked).
    #[error("Analysis task failed: {0}")]
    Internal(String),
}

/// Coarse grouping used for logging and HTTP mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Credential,
    Quota,
    UpstreamFormat,
    Generic,
    Internal,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::EmptyInput => ErrorKind::Input,
            AnalysisError::MissingCredentials | AnalysisError::InvalidCredentials => {
                ErrorKind::Credential
            }
            AnalysisError::QuotaExceeded => ErrorKind::Quota,
            AnalysisError::EmptyResponse | AnalysisError::InvalidFormat(_) => {
                ErrorKind::UpstreamFormat
            }
            AnalysisError::Failed(_) => ErrorKind::Generic,
            AnalysisError::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError>;

    fn strategy(&self) -> Strategy;
}
