use crate::analysis::text::word_count;
use crate::analysis::CheckOutcome;

pub const TOO_SHORT_ISSUE: &str = "Resume is too short to evaluate readability properly.";
pub const TOO_LONG_ISSUE: &str =
    "Resume seems very long. Aim for 400-800 words for standard resumes.";

const MIN_WORDS: usize = 100;
const MAX_WORDS: usize = 2000;

/// Word-count bands: under 100 scores 0, over 2000 scores 5, anything else 10.
pub fn check_readability(text: &str) -> CheckOutcome {
    let words = word_count(text);

    if words < MIN_WORDS {
        return CheckOutcome {
            issues: vec![TOO_SHORT_ISSUE.to_string()],
            score: 0,
        };
    }
    if words > MAX_WORDS {
        return CheckOutcome {
            issues: vec![TOO_LONG_ISSUE.to_string()],
            score: 5,
        };
    }

    CheckOutcome {
        issues: vec![],
        score: 10,
    }
}
