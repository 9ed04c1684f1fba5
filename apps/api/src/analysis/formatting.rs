//! Structural formatting heuristics. Runs on the raw text: case and symbols matter here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::CheckOutcome;

pub const FEW_BULLETS_ISSUE: &str =
    "Few or no bullet points detected. Use bullet points to list achievements.";
pub const SPECIAL_CHARS_ISSUE: &str = "Excessive use of special characters or symbols detected.";
pub const LONG_LINES_ISSUE: &str =
    "Several lines are very long. Consider wrapping text or using shorter sentences.";

const FORMATTING_CEILING: u32 = 20;
const MIN_BULLETS: usize = 5;
const BULLET_PENALTY: u32 = 10;
const SPECIAL_CHAR_RATIO: f64 = 0.05;
const SPECIAL_CHAR_PENALTY: u32 = 5;
const LONG_LINE_CHARS: usize = 200;
const MAX_LONG_LINES: usize = 3;
const LONG_LINE_PENALTY: u32 = 5;

// • ‣ ◦ ⁃ ∙ * - followed by a space
static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{2022}\x{2023}\x{25E6}\x{2043}\x{2219}*\-] ").unwrap());

pub fn count_bullets(text: &str) -> usize {
    BULLET_MARKER.find_iter(text).count()
}

/// Characters outside letters, digits, whitespace and `.,;:-()`.
pub fn count_special_chars(text: &str) -> usize {
    text.chars()
        .filter(|c| !(c.is_ascii_alphanumeric() || c.is_whitespace() || ".,;:-()".contains(*c)))
        .count()
}

pub fn count_long_lines(text: &str) -> usize {
    text.split('\n')
        .filter(|line| line.chars().count() > LONG_LINE_CHARS)
        .count()
}

/// Starts at 20 and subtracts each penalty that fires, floored at 0.
pub fn check_formatting(text: &str) -> CheckOutcome {
    let mut issues = Vec::new();
    let mut penalty = 0;

    if count_bullets(text) < MIN_BULLETS {
        issues.push(FEW_BULLETS_ISSUE.to_string());
        penalty += BULLET_PENALTY;
    }

    let total_chars = text.chars().count() as f64;
    if count_special_chars(text) as f64 > total_chars * SPECIAL_CHAR_RATIO {
        issues.push(SPECIAL_CHARS_ISSUE.to_string());
        penalty += SPECIAL_CHAR_PENALTY;
    }

    if count_long_lines(text) > MAX_LONG_LINES {
        issues.push(LONG_LINES_ISSUE.to_string());
        penalty += LONG_LINE_PENALTY;
    }

    CheckOutcome {
        issues,
        score: FORMATTING_CEILING.saturating_sub(penalty),
    }
}
