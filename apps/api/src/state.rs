use std::sync::Arc;

use crate::analysis::{Lexicon, ResumeAnalyzer};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only reference data, loaded once at startup.
    pub lexicon: Arc<Lexicon>,
    pub rule_based: Arc<dyn ResumeAnalyzer>,
    /// `None` when no API key is configured.
    pub ai: Option<Arc<dyn ResumeAnalyzer>>,
}
