use crate::analysis::lexicon::Lexicon;

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatch {
    /// Matched keywords in lexicon order.
    pub matches: Vec<String>,
    /// `matches / lexicon keywords`, in [0, 1].
    pub ratio: f64,
}

impl KeywordMatch {
    /// The first `limit` lexicon keywords that were not matched, in lexicon order.
    pub fn missing<'a>(&self, lexicon: &'a Lexicon, limit: usize) -> Vec<&'a str> {
        lexicon
            .keywords()
            .iter()
            .filter(|k| !self.matches.contains(k))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

/// Every lexicon keyword occurring as a substring of `normalized`.
pub fn match_keywords(normalized: &str, lexicon: &Lexicon) -> KeywordMatch {
    let matches: Vec<String> = lexicon
        .keywords()
        .iter()
        .filter(|k| normalized.contains(k.as_str()))
        .cloned()
        .collect();
    let ratio = matches.len() as f64 / lexicon.keywords().len() as f64;
    KeywordMatch { matches, ratio }
}
