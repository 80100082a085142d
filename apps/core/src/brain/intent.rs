//! Intent classification using keyword cascades.
//!
//! One keyword table, two strategies: `classify` looks only at the raw
//! question; `classify_informed` checks the matched FAQ prompt first and
//! falls back to the question. Keeping a single table prevents the two
//! paths from drifting apart.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse topical category assigned to a question for display and analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Fees, costs, payments, scholarships
    Fees,
    /// Dates, deadlines, exams, results
    Dates,
    /// Eligibility criteria and requirements
    Eligibility,
    /// Courses, programs, degrees
    Courses,
    /// Admission process and application forms
    Admission,
    /// Hostel and accommodation
    Hostel,
    /// Placements, jobs, careers
    Placement,
    /// Default when nothing else matches
    General,
}

impl Intent {
    /// Returns a human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Fees => "fees",
            Intent::Dates => "dates",
            Intent::Eligibility => "eligibility",
            Intent::Courses => "courses",
            Intent::Admission => "admission",
            Intent::Hostel => "hostel",
            Intent::Placement => "placement",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Keyword families in fixed priority order; the first family with a hit wins.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Fees,
        &["fee", "cost", "payment", "money", "scholarship"],
    ),
    (
        Intent::Dates,
        &["date", "deadline", "when", "time", "exam", "result"],
    ),
    (
        Intent::Eligibility,
        &["eligibility", "criteria", "requirement", "qualify"],
    ),
    (
        Intent::Courses,
        &["course", "program", "degree", "branch", "subject"],
    ),
    (Intent::Admission, &["admission", "apply", "process", "form"]),
    (Intent::Hostel, &["hostel", "accommodation", "room"]),
    (Intent::Placement, &["placement", "job", "career", "company"]),
];

/// Keyword-rule intent classifier. Stateless and independent of the corpus.
#[derive(Debug, Clone, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    fn cascade(text: &str) -> Option<Intent> {
        let lower = text.to_lowercase();
        INTENT_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
            .map(|(intent, _)| *intent)
    }

    /// Lexical-only strategy: keyword cascade over the raw question.
    pub fn classify(&self, question: &str) -> Intent {
        Self::cascade(question).unwrap_or(Intent::General)
    }

    /// FAQ-informed strategy: classify from the matched record's prompt
    /// first, then from the question itself.
    pub fn classify_informed(&self, matched_prompt: &str, question: &str) -> Intent {
        Self::cascade(matched_prompt).unwrap_or_else(|| self.classify(question))
    }
}
