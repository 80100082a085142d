//! FAQ corpus loading and validation.
//!
//! The corpus is a flat list of prompt/response records loaded once at
//! startup and immutable afterwards. Load failures are never fatal: a
//! missing or malformed file degrades to an empty corpus and the resolver
//! falls back to canned answers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use crate::brain::cache::normalize_question;
use crate::error::AppError;

/// One FAQ entry. Identity is the exact prompt text; prompts are not
/// guaranteed unique and exact lookups are first-match-wins.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FaqRecord {
    /// The canonical question this record answers.
    #[validate(length(min = 1))]
    pub prompt: String,
    /// The answer body, before any personalization.
    #[validate(length(min = 1))]
    pub response: String,
}

/// Immutable, insertion-ordered collection of FAQ records.
#[derive(Debug, Clone, Default)]
pub struct FaqCorpus {
    records: Vec<FaqRecord>,
}

impl FaqCorpus {
    /// Builds a corpus from raw records, rejecting malformed entries
    /// (empty prompt or response) at load time rather than at lookup.
    pub fn new(records: Vec<FaqRecord>) -> Self {
        let total = records.len();
        let records: Vec<FaqRecord> = records
            .into_iter()
            .filter(|record| match record.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Skipping malformed FAQ record");
                    false
                }
            })
            .collect();

        if records.len() < total {
            warn!(
                kept = records.len(),
                dropped = total - records.len(),
                "Corpus loaded with malformed records dropped"
            );
        }

        Self { records }
    }

    /// An empty corpus. Resolution over it is valid and always falls back.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the corpus from a JSON file.
    ///
    /// Any failure (missing file, bad JSON) yields an empty corpus with a
    /// warning; the chatbot keeps running in fallback-only mode.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(corpus) => {
                info!(records = corpus.len(), path = %path.display(), "FAQ corpus loaded");
                corpus
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to load FAQ corpus, starting empty");
                Self::empty()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<FaqRecord> = serde_json::from_str(&raw)?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose prompt equals the question modulo case and
    /// whitespace. `normalized` must already be in cache-key form.
    pub fn exact_match(&self, normalized: &str) -> Option<&FaqRecord> {
        self.records
            .iter()
            .find(|record| normalize_question(&record.prompt) == normalized)
    }
}
