// ATS compatibility analysis.
// Two strategies share one result contract: a deterministic rule-based scorer
// and a hosted-model orchestrator. Both are exposed through `ResumeAnalyzer`.

pub mod ai_analyzer;
pub mod formatting;
pub mod handlers;
pub mod keywords;
pub mod lexicon;
pub mod models;
pub mod prompts;
pub mod readability;
pub mod scorer;
pub mod sections;
pub mod strategy;
pub mod text;

pub use ai_analyzer::AiAnalyzer;
pub use lexicon::Lexicon;
pub use models::AnalysisResult;
pub use scorer::RuleBasedAnalyzer;
pub use strategy::{AnalysisError, ResumeAnalyzer, Strategy};

/// Issues found by one heuristic check plus the points it awards.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub issues: Vec<String>,
    pub score: u32,
}
