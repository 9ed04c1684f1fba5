//! Lexicon: the read-only reference data the rule-based analyzers match against.
//!
//! Built once in `main` (builtin or from `LEXICON_PATH`) and shared as
//! `Arc<Lexicon>`. There is no mutation API after construction.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct keyword matches that earns full keyword marks.
pub const DEFAULT_KEYWORD_SATURATION: usize = 10;

const BUILTIN_KEYWORDS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "react",
    "node.js",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
    "machine learning",
    "data analysis",
    "api",
    "rest",
    "graphql",
    "ci/cd",
    "testing",
    "cloud",
    "linux",
    "html",
    "css",
    "microservices",
];

const BUILTIN_SECTIONS: &[(&str, &[&str])] = &[
    (
        "Skills",
        &[
            "skills",
            "technical skills",
            "core competencies",
            "technologies",
            "expertise",
        ],
    ),
    (
        "Experience",
        &[
            "experience",
            "work history",
            "employment",
            "professional background",
        ],
    ),
    (
        "Education",
        &["education", "academic", "university", "degree", "qualifications"],
    ),
    ("Projects", &["projects", "portfolio", "personal projects"]),
];

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Lexicon file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Lexicon must define at least one keyword")]
    NoKeywords,

    #[error("Lexicon must define at least one section")]
    NoSections,

    #[error("Section '{0}' has no aliases")]
    EmptySection(String),

    #[error("Section '{0}' is defined more than once")]
    DuplicateSection(String),

    #[error("keywordSaturation must be greater than zero")]
    ZeroSaturation,
}

/// A canonical section name and the lower-case phrases that indicate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAliases {
    pub name: String,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lexicon {
    keywords: Vec<String>,
    sections: Vec<SectionAliases>,
    #[serde(default = "default_keyword_saturation")]
    keyword_saturation: usize,
}

fn default_keyword_saturation() -> usize {
    DEFAULT_KEYWORD_SATURATION
}

impl Lexicon {
    /// Validates and normalizes raw lexicon data.
    ///
    /// Keywords and aliases are trimmed and lower-cased, blanks dropped, and
    /// duplicate keywords removed keeping the first occurrence so iteration
    /// order stays deterministic.
    pub fn new(
        keywords: Vec<String>,
        sections: Vec<SectionAliases>,
        keyword_saturation: usize,
    ) -> Result<Self, LexiconError> {
        if keyword_saturation == 0 {
            return Err(LexiconError::ZeroSaturation);
        }

        let mut seen = HashSet::new();
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty() && seen.insert(k.clone()))
            .collect();
        if keywords.is_empty() {
            return Err(LexiconError::NoKeywords);
        }

        if sections.is_empty() {
            return Err(LexiconError::NoSections);
        }
        let mut names = HashSet::new();
        let mut normalized = Vec::with_capacity(sections.len());
        for section in sections {
            let name = section.name.trim().to_string();
            if !names.insert(name.clone()) {
                return Err(LexiconError::DuplicateSection(name));
            }
            let aliases: Vec<String> = section
                .aliases
                .iter()
                .map(|a| a.trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect();
            if aliases.is_empty() {
                return Err(LexiconError::EmptySection(name));
            }
            normalized.push(SectionAliases { name, aliases });
        }

        Ok(Self {
            keywords,
            sections: normalized,
            keyword_saturation,
        })
    }

    /// The default calibration data.
    pub fn builtin() -> Self {
        Self {
            keywords: BUILTIN_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            sections: BUILTIN_SECTIONS
                .iter()
                .map(|(name, aliases)| SectionAliases {
                    name: name.to_string(),
                    aliases: aliases.iter().map(|a| a.to_string()).collect(),
                })
                .collect(),
            keyword_saturation: DEFAULT_KEYWORD_SATURATION,
        }
    }

    /// Loads a JSON lexicon and runs it through the same validation as `new`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path)?;
        let parsed: Lexicon = serde_json::from_str(&raw)?;
        Self::new(parsed.keywords, parsed.sections, parsed.keyword_saturation)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn sections(&self) -> &[SectionAliases] {
        &self.sections
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn keyword_saturation(&self) -> usize {
        self.keyword_saturation
    }
}
