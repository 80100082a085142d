//! Response personalization.
//!
//! Deterministic text transformation applied to a matched answer: a course
//! prefix when the conversation has named one, a stage-specific suggestion
//! block, and up to three related questions drawn from static tables. The
//! core answer body is never rewritten, only wrapped.

use crate::brain::context::{ConversationContext, Stage, Topic};

/// Starter questions surfaced by the presentation layer.
pub const QUICK_QUESTIONS: [&str; 5] = [
    "What is the eligibility for B.Tech?",
    "What are the fees for MBA?",
    "What is the last date to apply?",
    "How much is the hostel fee?",
    "What is the counseling process?",
];

const INITIAL_SUGGESTION: &str =
    "\n\n💡 You might also want to know about eligibility criteria, fees, or application deadlines.";
const EXPLORING_SUGGESTION: &str =
    "\n\n🎯 Based on your questions, you might be interested in our placement statistics or campus facilities.";

const FEES_RELATED: [&str; 3] = [
    "Are there any scholarships available?",
    "What is the fee payment schedule?",
    "Are there any additional charges?",
];
const ELIGIBILITY_RELATED: [&str; 3] = [
    "What is the admission process?",
    "When is the entrance exam?",
    "What documents are required?",
];

/// Candidates collected before truncation for display.
const MAX_RELATED_CANDIDATES: usize = 5;
/// Related questions actually appended.
const MAX_RELATED_SHOWN: usize = 3;

/// Context-driven answer decorator. Stateless.
#[derive(Debug, Clone, Default)]
pub struct Personalizer;

impl Personalizer {
    pub fn new() -> Self {
        Self
    }

    /// Rewrites `answer` for the given context.
    ///
    /// The course prefix is applied only when the upper-cased course code
    /// is not already present in the answer body.
    pub fn personalize(&self, answer: &str, context: &ConversationContext) -> String {
        let mut out = answer.to_string();

        if let Some(course) = context.last_course() {
            let course_upper = course.to_uppercase();
            if !out.contains(&course_upper) {
                out = format!("For {}: {}", course_upper, out);
            }
        }

        match context.stage {
            Stage::Initial => out.push_str(INITIAL_SUGGESTION),
            Stage::Exploring => out.push_str(EXPLORING_SUGGESTION),
            Stage::Detailed => {}
        }

        let related = self.related_questions(context);
        if !related.is_empty() {
            out.push_str("\n\n❓ Related questions you might have:");
            for question in related.iter().take(MAX_RELATED_SHOWN) {
                out.push_str("\n• ");
                out.push_str(question);
            }
        }

        out
    }

    /// Static related-question candidates for the topics in context,
    /// fees first, capped at [`MAX_RELATED_CANDIDATES`].
    fn related_questions(&self, context: &ConversationContext) -> Vec<&'static str> {
        let mut related = Vec::new();

        if context.mentioned_topics.contains(&Topic::Fees) {
            related.extend_from_slice(&FEES_RELATED);
        }
        if context.mentioned_topics.contains(&Topic::Eligibility) {
            related.extend_from_slice(&ELIGIBILITY_RELATED);
        }

        related.truncate(MAX_RELATED_CANDIDATES);
        related
    }
}
