//! AI strategy: asks a hosted model for an `AnalysisResult`.
//!
//! Candidate models are tried strictly in order. Any failure of a call advances
//! to the next candidate; only the last candidate's failure reaches the caller,
//! classified into an `AnalysisError`. A reply that arrives but cannot be turned
//! into a valid result fails immediately without trying further candidates.
//!
//! The whole cascade runs under one deadline. When it elapses the in-flight call
//! is dropped and no further candidates are attempted.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{error, info, warn};

use crate::analysis::lexicon::Lexicon;
use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::strategy::{AnalysisError, ResumeAnalyzer, Strategy};
use crate::llm_client::{sanitize_json_reply, LlmError, ModelBackend};

/// Cheapest / highest-quota first.
pub const DEFAULT_MODELS: &[&str] = &[
    "gemini-2.5-flash-lite",
    "gemini-2.5-flash",
    "gemini-3-flash",
    "gemini-2.0-flash",
    "gemini-1.5-flash",
];

pub struct AiAnalyzer {
    backend: Arc<dyn ModelBackend>,
    models: Vec<String>,
    lexicon: Arc<Lexicon>,
    deadline: Duration,
}

impl AiAnalyzer {
    pub fn new(
        backend: Arc<dyn ModelBackend>,
        models: Vec<String>,
        lexicon: Arc<Lexicon>,
        deadline: Duration,
    ) -> Self {
        Self {
            backend,
            models,
            lexicon,
            deadline,
        }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Runs the prompt against each candidate in order until one answers.
    async fn run_cascade(&self, prompt: &str) -> Result<String, AnalysisError> {
        let mut last_error: Option<LlmError> = None;

        for (attempt, model) in self.models.iter().enumerate() {
            match self.backend.generate(model, prompt).await {
                Ok(reply) => {
                    info!(model = %model, attempt = attempt + 1, "AI analysis answered");
                    return Ok(reply);
                }
                Err(e) => {
                    warn!(
                        model = %model,
                        attempt = attempt + 1,
                        error = %e,
                        "AI model call failed, trying next candidate"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(match last_error {
            Some(e) => classify_llm_error(e),
            None => AnalysisError::Failed("no candidate models configured".to_string()),
        })
    }
}

#[async_trait]
impl ResumeAnalyzer for AiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let prompt = build_analysis_prompt(text, &self.lexicon);

        let reply = match tokio::time::timeout(self.deadline, self.run_cascade(&prompt)).await {
            Ok(outcome) => outcome?,
            Err(_) => {
                warn!(deadline_secs = self.deadline.as_secs(), "AI analysis deadline elapsed");
                return Err(AnalysisError::Failed(format!(
                    "timed out after {}s",
                    self.deadline.as_secs()
                )));
            }
        };

        parse_model_reply(&reply, &self.lexicon)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Ai
    }
}

/// Maps the last candidate's failure onto the caller-facing taxonomy.
pub fn classify_llm_error(err: LlmError) -> AnalysisError {
    match err {
        LlmError::Api { status, .. }
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN =>
        {
            AnalysisError::InvalidCredentials
        }
        LlmError::Api { status, .. } if status == StatusCode::TOO_MANY_REQUESTS => {
            AnalysisError::QuotaExceeded
        }
        other => AnalysisError::Failed(other.to_string()),
    }
}

/// Turns a raw model reply into a contract-valid result, or a format error.
pub fn parse_model_reply(reply: &str, lexicon: &Lexicon) -> Result<AnalysisResult, AnalysisError> {
    if reply.trim().is_empty() {
        return Err(AnalysisError::EmptyResponse);
    }

    let Some(json_text) = sanitize_json_reply(reply) else {
        error!(raw = %reply, "AI reply contains no JSON object");
        return Err(AnalysisError::InvalidFormat(
            "no JSON object found in reply".to_string(),
        ));
    };

    let result: AnalysisResult = serde_json::from_str(&json_text).map_err(|e| {
        error!(raw = %json_text, error = %e, "AI reply is not a valid analysis result");
        AnalysisError::InvalidFormat(e.to_string())
    })?;

    result.validate(lexicon).map_err(|violation| {
        error!(violation = %violation, "AI reply violates the result contract");
        AnalysisError::InvalidFormat(violation)
    })?;

    Ok(result)
}
