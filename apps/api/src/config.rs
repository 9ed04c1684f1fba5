use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::analysis::ai_analyzer::DEFAULT_MODELS;
use crate::llm_client::DEFAULT_API_BASE;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Only malformed values are fatal; everything has a default except the API key,
/// whose absence disables the AI strategy.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub gemini_models: Vec<String>,
    /// Per HTTP attempt.
    pub ai_request_timeout: Duration,
    /// Whole cascade, across all candidates.
    pub ai_analysis_timeout: Duration,
    pub lexicon_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY")
                .or_else(|| optional_env("GOOGLE_GENERATIVE_AI_API_KEY")),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            gemini_models: parse_model_list(optional_env("GEMINI_MODELS").as_deref()),
            ai_request_timeout: Duration::from_secs(parse_env("AI_REQUEST_TIMEOUT_SECS", 60)?),
            ai_analysis_timeout: Duration::from_secs(parse_env("AI_ANALYSIS_TIMEOUT_SECS", 120)?),
            lexicon_path: optional_env("LEXICON_PATH").map(PathBuf::from),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Trimmed value of `key`, treating blank as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}

/// Comma-separated cascade order. Blank entries are dropped; an empty list
/// falls back to the default cascade.
fn parse_model_list(raw: Option<&str>) -> Vec<String> {
    let models: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect();
    if models.is_empty() {
        DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
    } else {
        models
    }
}
