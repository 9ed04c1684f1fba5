//! Rule-based scorer: composes the section, keyword, formatting and
//! readability checks into one `AnalysisResult`.
//!
//! Pure and total: any string in, a valid result out. Short or empty input
//! degrades the score instead of failing.
//!
//! Weights:
//! - section presence: present / canonical × 30
//! - keyword matching: min(40, matches / saturation × 40)
//! - formatting: 0 – 20 (see `formatting`)
//! - readability: 0, 5 or 10 (see `readability`)

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::analysis::formatting::check_formatting;
use crate::analysis::keywords::match_keywords;
use crate::analysis::lexicon::Lexicon;
use crate::analysis::models::{
    AnalysisResult, Breakdown, Details, Feedback, KEYWORD_MATCHING_CAP, MAX_MISSING_KEYWORDS,
    MAX_SCORE, SECTION_PRESENCE_CAP,
};
use crate::analysis::readability::check_readability;
use crate::analysis::sections::detect_sections;
use crate::analysis::strategy::{AnalysisError, ResumeAnalyzer, Strategy};
use crate::analysis::text::normalize_text;

pub fn analyze_rule_based(text: &str, lexicon: &Lexicon) -> AnalysisResult {
    let normalized = normalize_text(text);

    let sections = detect_sections(&normalized, lexicon);
    let present = sections.iter().filter(|s| s.present).count();
    let section_score = present as f64 / lexicon.section_count() as f64 * SECTION_PRESENCE_CAP;

    let keyword_match = match_keywords(&normalized, lexicon);
    let keyword_score = (keyword_match.matches.len() as f64
        / lexicon.keyword_saturation() as f64
        * KEYWORD_MATCHING_CAP)
        .min(KEYWORD_MATCHING_CAP);

    let formatting = check_formatting(text);
    let readability = check_readability(text);

    let total = (section_score
        + keyword_score
        + f64::from(formatting.score)
        + f64::from(readability.score))
    .round();
    let score = (total.max(0.0) as u32).min(MAX_SCORE);

    let missing_sections: Vec<String> = sections
        .iter()
        .filter(|s| !s.present)
        .map(|s| s.name.clone())
        .collect();

    let missing_keywords = keyword_match
        .missing(lexicon, MAX_MISSING_KEYWORDS)
        .into_iter()
        .map(String::from)
        .collect();

    let section_order_suggestions = if missing_sections.is_empty() {
        vec![]
    } else {
        vec![format!("Add missing sections: {}", missing_sections.join(", "))]
    };

    let mut formatting_issues = formatting.issues;
    formatting_issues.extend(readability.issues);

    debug!(
        score,
        sections_present = present,
        keyword_matches = keyword_match.matches.len(),
        keyword_ratio = keyword_match.ratio,
        "rule-based analysis complete"
    );

    AnalysisResult {
        score,
        breakdown: Breakdown {
            section_presence: section_score,
            keyword_matching: keyword_score,
            formatting: f64::from(formatting.score),
            readability: f64::from(readability.score),
        },
        details: Details {
            sections,
            feedback: Feedback {
                missing_keywords,
                formatting_issues,
                section_order_suggestions,
                missing_sections,
            },
        },
    }
}

/// Deterministic strategy over a shared lexicon.
pub struct RuleBasedAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl RuleBasedAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

#[async_trait]
impl ResumeAnalyzer for RuleBasedAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        // CPU-bound scan; keep it off the async executor.
        let text = text.to_owned();
        let lexicon = Arc::clone(&self.lexicon);
        tokio::task::spawn_blocking(move || analyze_rule_based(&text, &lexicon))
            .await
            .map_err(|e| AnalysisError::Internal(format!("rule-based analysis: {e}")))
    }

    fn strategy(&self) -> Strategy {
        Strategy::RuleBased
    }
}
