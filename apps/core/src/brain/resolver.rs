//! Answer resolution orchestrator.
//!
//! Ties scorer, context tracker, classifier, personalizer and cache
//! together. `resolve` is total: every question yields an answer, an
//! intent and a confidence in [0, 1], even over an empty corpus.
//!
//! Cache hits return the answer exactly as personalized when it was first
//! asked; current context is not re-applied. That staleness is inherited
//! behavior and covered by tests rather than silently fixed.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use crate::brain::cache::{normalize_question, CachedAnswer};
use crate::brain::context::ConversationContext;
use crate::brain::intent::{Intent, IntentClassifier};
use crate::brain::personalizer::Personalizer;
use crate::brain::scorer::RelevanceScorer;
use crate::corpus::{FaqCorpus, FaqRecord};
use crate::session::Session;

/// Canned answer for unmatched questions that mention scholarships.
pub const SCHOLARSHIP_FALLBACK: &str = "Scholarships are available for meritorious and economically weaker students. Please check the scholarship section on our website for detailed information and application procedures.";
/// Canned answer for fully generic misses.
pub const GENERIC_FALLBACK: &str = "I'm sorry, I don't have specific information about that. Please contact our admissions office at admissions@college.edu or call +91-1234567890 for detailed assistance.";

/// A recognized-but-unmatched scholarship question is rated more confident
/// than a generic miss; both values are fixed by design.
pub const SCHOLARSHIP_FALLBACK_CONFIDENCE: f32 = 0.7;
pub const GENERIC_FALLBACK_CONFIDENCE: f32 = 0.3;

/// The outcome of resolving one question.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Personalized answer text, never empty.
    pub answer: String,
    pub intent: Intent,
    /// Heuristic match strength in [0, 1].
    pub confidence: f32,
    /// Wall-clock resolution time in seconds.
    pub response_time: f64,
    /// Whether this came from the session cache.
    pub cached: bool,
}

/// Context-aware answer resolver over an immutable corpus.
#[derive(Debug, Clone)]
pub struct AnswerResolver {
    corpus: FaqCorpus,
    scorer: RelevanceScorer,
    classifier: IntentClassifier,
    personalizer: Personalizer,
}

impl AnswerResolver {
    pub fn new(corpus: FaqCorpus) -> Self {
        Self {
            corpus,
            scorer: RelevanceScorer::new(),
            classifier: IntentClassifier::new(),
            personalizer: Personalizer::new(),
        }
    }

    pub fn corpus(&self) -> &FaqCorpus {
        &self.corpus
    }

    /// Resolves one question for the session. Cannot fail; appends one
    /// turn to the session history.
    pub fn resolve(&self, session: &mut Session, question: &str) -> Resolution {
        let start = Instant::now();
        let key = normalize_question(question);

        if let Some(hit) = session.cache_mut().get(&key) {
            let hit = hit.clone();
            debug!(key = %key, "cache hit");
            let resolution = Resolution {
                answer: hit.answer,
                intent: hit.intent,
                confidence: hit.confidence,
                response_time: start.elapsed().as_secs_f64(),
                cached: true,
            };
            session.record_resolution(question, &resolution);
            return resolution;
        }

        let context = ConversationContext::analyze(session.history());

        let (answer, intent, confidence) = match self.best_match(question, &key, &context) {
            Some((record, score)) => {
                debug!(prompt = %record.prompt, score, "matched FAQ record");
                let intent = self.classifier.classify_informed(&record.prompt, question);
                let answer = self.personalizer.personalize(&record.response, &context);
                (answer, intent, score)
            }
            None => {
                let intent = self.classifier.classify(question);
                if question.to_lowercase().contains("scholarship") {
                    debug!("no match, scholarship fallback");
                    (
                        SCHOLARSHIP_FALLBACK.to_string(),
                        intent,
                        SCHOLARSHIP_FALLBACK_CONFIDENCE,
                    )
                } else {
                    debug!("no match, generic fallback");
                    (
                        GENERIC_FALLBACK.to_string(),
                        intent,
                        GENERIC_FALLBACK_CONFIDENCE,
                    )
                }
            }
        };

        session.cache_mut().put(
            key,
            CachedAnswer {
                answer: answer.clone(),
                intent,
                confidence,
                timestamp: Utc::now(),
            },
        );

        let resolution = Resolution {
            answer,
            intent,
            confidence,
            response_time: start.elapsed().as_secs_f64(),
            cached: false,
        };
        session.record_resolution(question, &resolution);
        resolution
    }

    /// Best-scoring record, or `None` when nothing scores above zero.
    ///
    /// An exact prompt match (modulo case/whitespace) short-circuits at
    /// score 1.0, which is what full scoring would produce for it anyway.
    /// Ties go to the first record in corpus order.
    fn best_match(
        &self,
        question: &str,
        normalized: &str,
        context: &ConversationContext,
    ) -> Option<(&FaqRecord, f32)> {
        if let Some(record) = self.corpus.exact_match(normalized) {
            return Some((record, 1.0));
        }

        let mut best: Option<(&FaqRecord, f32)> = None;
        for record in self.corpus.records() {
            let score = self.scorer.score(question, record, context);
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((record, score));
            }
        }
        best
    }
}
