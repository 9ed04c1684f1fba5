use crate::analysis::lexicon::Lexicon;
use crate::analysis::models::Section;

/// One `Section` per canonical name, in lexicon order. A section is present
/// when any of its aliases occurs anywhere in `normalized` (plain substring
/// containment, not word-boundary aware).
pub fn detect_sections(normalized: &str, lexicon: &Lexicon) -> Vec<Section> {
    lexicon
        .sections()
        .iter()
        .map(|section| Section {
            name: section.name.clone(),
            present: section
                .aliases
                .iter()
                .any(|alias| normalized.contains(alias.as_str())),
            content: String::new(),
        })
        .collect()
}
