/// Lower-cases and trims. All section and keyword matching runs on this form;
/// no stemming or punctuation stripping happens here.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
