//! The result contract shared by both analysis strategies.
//!
//! Field names are the wire format: the AI strategy decodes the model's reply
//! straight into these types, so a renamed field breaks that path.

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::Lexicon;

pub const SECTION_PRESENCE_CAP: f64 = 30.0;
pub const KEYWORD_MATCHING_CAP: f64 = 40.0;
pub const FORMATTING_CAP: f64 = 20.0;
pub const READABILITY_CAP: f64 = 10.0;
pub const MAX_SCORE: u32 = 100;
pub const MAX_MISSING_KEYWORDS: usize = 5;

/// Presence of one canonical section. `content` is reserved and stays empty
/// on the rule-based path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub present: bool,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub section_presence: f64, // max 30
    pub keyword_matching: f64, // max 40
    pub formatting: f64,       // max 20
    pub readability: f64,      // max 10
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub missing_keywords: Vec<String>,
    pub formatting_issues: Vec<String>,
    /// Only ever reports missing sections; no ordering analysis is done.
    pub section_order_suggestions: Vec<String>,
    pub missing_sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub sections: Vec<Section>,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u32, // 0 – 100
    pub breakdown: Breakdown,
    pub details: Details,
}

impl AnalysisResult {
    /// Checks the contract invariants against the canonical section list.
    /// Returns a description of the first violation found.
    pub fn validate(&self, lexicon: &Lexicon) -> Result<(), String> {
        if self.score > MAX_SCORE {
            return Err(format!("score {} exceeds {MAX_SCORE}", self.score));
        }

        let caps = [
            ("sectionPresence", self.breakdown.section_presence, SECTION_PRESENCE_CAP),
            ("keywordMatching", self.breakdown.keyword_matching, KEYWORD_MATCHING_CAP),
            ("formatting", self.breakdown.formatting, FORMATTING_CAP),
            ("readability", self.breakdown.readability, READABILITY_CAP),
        ];
        for (field, value, cap) in caps {
            if !value.is_finite() || value < 0.0 || value > cap {
                return Err(format!("breakdown.{field} = {value} is outside [0, {cap}]"));
            }
        }

        let expected: Vec<&str> = lexicon.section_names().collect();
        let actual: Vec<&str> = self.details.sections.iter().map(|s| s.name.as_str()).collect();
        if expected != actual {
            return Err(format!(
                "sections {actual:?} do not match the canonical order {expected:?}"
            ));
        }

        let missing = self.details.feedback.missing_keywords.len();
        if missing > MAX_MISSING_KEYWORDS {
            return Err(format!(
                "{missing} missing keywords reported, at most {MAX_MISSING_KEYWORDS} allowed"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_result() -> AnalysisResult {
        let sections = Lexicon::builtin()
            .section_names()
            .map(|name| Section {
                name: name.to_string(),
                present: true,
                content: String::new(),
            })
            .collect();
        AnalysisResult {
            score: 88,
            breakdown: Breakdown {
                section_presence: 30.0,
                keyword_matching: 28.0,
                formatting: 20.0,
                readability: 10.0,
            },
            details: Details {
                sections,
                feedback: Feedback::default(),
            },
        }
    }

    #[test]
    fn test_serializes_with_camel_case_wire_names() {
        let value = serde_json::to_value(valid_result()).unwrap();
        assert!(value["breakdown"].get("sectionPresence").is_some());
        assert!(value["breakdown"].get("keywordMatching").is_some());
        let feedback = &value["details"]["feedback"];
        for key in [
            "missingKeywords",
            "formattingIssues",
            "sectionOrderSuggestions",
            "missingSections",
        ] {
            assert!(feedback.get(key).is_some(), "missing wire field {key}");
        }
        assert_eq!(value["details"]["sections"][0]["name"], "Skills");
    }

    #[test]
    fn test_rejects_snake_case_payload() {
        let payload = json!({
            "score": 50,
            "breakdown": {
                "section_presence": 10, "keyword_matching": 10,
                "formatting": 20, "readability": 10
            },
            "details": { "sections": [], "feedback": {
                "missingKeywords": [], "formattingIssues": [],
                "sectionOrderSuggestions": [], "missingSections": []
            }}
        });
        assert!(serde_json::from_value::<AnalysisResult>(payload).is_err());
    }

    #[test]
    fn test_valid_result_passes() {
        assert!(valid_result().validate(&Lexicon::builtin()).is_ok());
    }

    #[test]
    fn test_score_over_100_fails() {
        let mut result = valid_result();
        result.score = 101;
        assert!(result.validate(&Lexicon::builtin()).is_err());
    }

    #[test]
    fn test_breakdown_over_cap_fails() {
        let mut result = valid_result();
        result.breakdown.keyword_matching = 41.0;
        let err = result.validate(&Lexicon::builtin()).unwrap_err();
        assert!(err.contains("keywordMatching"), "{err}");
    }

    #[test]
    fn test_negative_breakdown_fails() {
        let mut result = valid_result();
        result.breakdown.readability = -1.0;
        assert!(result.validate(&Lexicon::builtin()).is_err());
    }

    #[test]
    fn test_wrong_section_order_fails() {
        let mut result = valid_result();
        result.details.sections.swap(0, 1);
        assert!(result.validate(&Lexicon::builtin()).is_err());
    }

    #[test]
    fn test_missing_section_entry_fails() {
        let mut result = valid_result();
        result.details.sections.pop();
        assert!(result.validate(&Lexicon::builtin()).is_err());
    }

    #[test]
    fn test_too_many_missing_keywords_fails() {
        let mut result = valid_result();
        result.details.feedback.missing_keywords =
            (0..6).map(|i| format!("kw{i}")).collect();
        assert!(result.validate(&Lexicon::builtin()).is_err());
    }
}
