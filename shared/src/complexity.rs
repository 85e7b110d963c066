//! Heuristic split of the backend's complexity analysis into labelled blocks.
//!
//! The backend writes free text such as `Time: O(n). Space: O(1).`, sometimes
//! with every label on one line. Lines are forced apart at each label, then
//! classified by the first keyword in [`RULES`] they contain.

use lazy_static::lazy_static;
use regex::Regex;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ComplexityCategory {
    Time,
    Space,
    Warning,
    Info,
}

impl ComplexityCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            ComplexityCategory::Time => "⏱️",
            ComplexityCategory::Space => "💾",
            ComplexityCategory::Warning => "⚠️",
            ComplexityCategory::Info => "ℹ️",
        }
    }

    /// Warnings take a whole row; the others share one.
    pub fn is_full_width(&self) -> bool {
        matches!(self, ComplexityCategory::Warning)
    }
}

/// Checked in order; the first keyword found decides the category.
pub const RULES: &[(&str, ComplexityCategory)] = &[
    ("warning", ComplexityCategory::Warning),
    ("time", ComplexityCategory::Time),
    ("space", ComplexityCategory::Space),
];

const MIN_LINE_CHARS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexityBlock {
    pub category: ComplexityCategory,
    pub text: String,
}

impl ComplexityBlock {
    pub fn icon(&self) -> &'static str {
        self.category.icon()
    }
}

lazy_static! {
    static ref SENTENCE_BEFORE_KEYWORD: Regex =
        Regex::new(r"(?i)([.!?])\s*(time|space|warning)").unwrap();
    static ref LABEL: Regex = Regex::new(r"(?i)(time:|space:|warning:)").unwrap();
    static ref LEADING_LABEL: Regex = Regex::new(r"(?i)^(time:|space:|warning:)").unwrap();
}

pub fn classify_complexity(raw: &str) -> Vec<ComplexityBlock> {
    let normalized = SENTENCE_BEFORE_KEYWORD.replace_all(raw, "$1\n$2");
    let normalized = LABEL.replace_all(&normalized, "\n$1");

    normalized
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_LINE_CHARS)
        .map(|line| ComplexityBlock {
            category: categorize(line),
            text: display_text(line),
        })
        .collect()
}

pub fn categorize(line: &str) -> ComplexityCategory {
    let lower = line.to_lowercase();
    RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(ComplexityCategory::Info)
}

fn display_text(line: &str) -> String {
    let without_label = LEADING_LABEL.replace(line, "");
    let trimmed = without_label.trim();
    let cleaned = trimmed
        .strip_suffix(['.', ','])
        .unwrap_or(trimmed);

    if cleaned.is_empty() {
        line.to_string()
    } else {
        cleaned.to_string()
    }
}
