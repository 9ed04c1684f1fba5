// Prompt construction for the AI analysis strategy.

use crate::analysis::lexicon::Lexicon;
use crate::analysis::models::{
    Section, FORMATTING_CAP, KEYWORD_MATCHING_CAP, MAX_MISSING_KEYWORDS, READABILITY_CAP,
    SECTION_PRESENCE_CAP,
};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// ATS analysis prompt template.
/// Replace: {sections_json}, {resume_text}, {caps...}, {max_missing_keywords}, {json_only}
pub const ATS_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert ATS (Applicant Tracking System) and HR professional.
Analyze the following resume text and provide a detailed ATS compatibility report in JSON format.

The JSON structure must match this exactly (same field names, same nesting):
{
  "score": 0,
  "breakdown": {
    "sectionPresence": 0,
    "keywordMatching": 0,
    "formatting": 0,
    "readability": 0
  },
  "details": {
    "sections": {sections_json},
    "feedback": {
      "missingKeywords": [],
      "formattingIssues": [],
      "sectionOrderSuggestions": [],
      "missingSections": []
    }
  }
}

Field rules:
- "score": integer from 0 to 100.
- "sectionPresence": number from 0 to {section_cap}.
- "keywordMatching": number from 0 to {keyword_cap}.
- "formatting": number from 0 to {formatting_cap}.
- "readability": number from 0 to {readability_cap}.
- "sections": exactly the entries shown above, in that order; set "present" and fill "content".
- "missingKeywords": at most {max_missing_keywords} entries.

Resume Text:
"""
{resume_text}
"""

Rules:
- Score according to standard ATS best practices.
- Be critical but fair.
- If a section is missing, explain why it's important in the feedback.
- {json_only}"#;

/// Builds the analysis prompt, listing the lexicon's canonical sections in order.
pub fn build_analysis_prompt(resume_text: &str, lexicon: &Lexicon) -> String {
    let sections: Vec<Section> = lexicon
        .section_names()
        .map(|name| Section {
            name: name.to_string(),
            present: false,
            content: String::new(),
        })
        .collect();
    let sections_json = serde_json::to_string(&sections).unwrap_or_else(|_| "[]".to_string());

    ATS_ANALYSIS_PROMPT_TEMPLATE
        .replace("{sections_json}", &sections_json)
        .replace("{section_cap}", &SECTION_PRESENCE_CAP.to_string())
        .replace("{keyword_cap}", &KEYWORD_MATCHING_CAP.to_string())
        .replace("{formatting_cap}", &FORMATTING_CAP.to_string())
        .replace("{readability_cap}", &READABILITY_CAP.to_string())
        .replace("{max_missing_keywords}", &MAX_MISSING_KEYWORDS.to_string())
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        // Last, so placeholders inside the resume itself are left untouched.
        .replace("{resume_text}", resume_text)
}
