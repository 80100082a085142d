//! Relevance scoring between a question and an FAQ record.
//!
//! Base score is Jaccard similarity over unique word sets, boosted by
//! conversational context and clamped to 1.0. Pure function of its inputs.

use std::collections::HashSet;

use crate::brain::context::{ConversationContext, Stage};
use crate::corpus::FaqRecord;

/// Boost per previously mentioned topic found in the prompt.
pub const TOPIC_BOOST: f32 = 0.2;
/// Boost per previously mentioned course code found in the prompt.
pub const COURSE_BOOST: f32 = 0.3;
/// Boost for long prompts once the conversation is in the detailed stage.
pub const DETAILED_STAGE_BOOST: f32 = 0.1;
/// Prompt length (in characters) above which the stage boost applies.
pub const LONG_PROMPT_CHARS: usize = 50;

/// Context-aware relevance scorer. Stateless.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer;

impl RelevanceScorer {
    pub fn new() -> Self {
        Self
    }

    fn word_set(text: &str) -> HashSet<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    /// Scores `question` against `record` under `context`.
    ///
    /// Returns a value in [0, 1]: Jaccard base plus context boosts, clamped.
    /// Either side tokenizing to an empty set scores 0.
    pub fn score(
        &self,
        question: &str,
        record: &FaqRecord,
        context: &ConversationContext,
    ) -> f32 {
        let question_lower = question.to_lowercase();
        let prompt_lower = record.prompt.to_lowercase();

        let question_words = Self::word_set(&question_lower);
        let prompt_words = Self::word_set(&prompt_lower);

        if question_words.is_empty() || prompt_words.is_empty() {
            return 0.0;
        }

        let intersection = question_words.intersection(&prompt_words).count();
        let union = question_words.union(&prompt_words).count();
        let base = intersection as f32 / union as f32;

        let mut boost = 0.0;

        for topic in &context.mentioned_topics {
            if prompt_lower.contains(topic.as_str()) {
                boost += TOPIC_BOOST;
            }
        }

        for course in &context.mentioned_courses {
            if prompt_lower.contains(course.as_str()) {
                boost += COURSE_BOOST;
            }
        }

        if context.stage == Stage::Detailed && prompt_lower.chars().count() > LONG_PROMPT_CHARS {
            boost += DETAILED_STAGE_BOOST;
        }

        (base + boost).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::context::Topic;

    fn record(prompt: &str) -> FaqRecord {
        FaqRecord {
            prompt: prompt.to_string(),
            response: "a response".to_string(),
        }
    }

    fn ctx() -> ConversationContext {
        ConversationContext::default()
    }

    #[test]
    fn test_identical_text_scores_one() {
        let scorer = RelevanceScorer::new();
        let score = scorer.score(
            "what are the fees",
            &record("What are the fees"),
            &ctx(),
        );
        assert!((score - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_disjoint_text_scores_zero() {
        let scorer = RelevanceScorer::new();
        let score = scorer.score("hostel rooms", &record("placement statistics"), &ctx());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_question_scores_zero() {
        let scorer = RelevanceScorer::new();
        assert_eq!(scorer.score("", &record("What are the fees"), &ctx()), 0.0);
        assert_eq!(scorer.score("   ", &record("What are the fees"), &ctx()), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let scorer = RelevanceScorer::new();
        // {eligibility, for, btech} vs {what, is, the, eligibility, for, b.tech?}
        // intersection 2, union 7.
        let score = scorer.score(
            "eligibility for btech",
            &record("What is the eligibility for B.Tech?"),
            &ctx(),
        );
        assert!(score > 0.2 && score < 0.5, "score was {}", score);
    }

    #[test]
    fn test_topic_boost_is_additive() {
        let scorer = RelevanceScorer::new();
        let faq = record("Details about fees structure");

        let base = scorer.score("fees", &faq, &ctx());

        let mut context = ctx();
        context.mentioned_topics.push(Topic::Fees);
        let boosted = scorer.score("fees", &faq, &context);
        assert!((boosted - base - TOPIC_BOOST).abs() < 1e-6);

        // Duplicate topic mentions boost again.
        context.mentioned_topics.push(Topic::Fees);
        let double = scorer.score("fees", &faq, &context);
        assert!((double - base - 2.0 * TOPIC_BOOST).abs() < 1e-6);
    }

    #[test]
    fn test_course_boost() {
        let scorer = RelevanceScorer::new();
        let faq = record("What are the mba fees?");

        let mut context = ctx();
        context.mentioned_courses.push("mba".to_string());

        let plain = scorer.score("fees", &faq, &ctx());
        let boosted = scorer.score("fees", &faq, &context);
        assert!((boosted - plain - COURSE_BOOST).abs() < 1e-6);
    }

    #[test]
    fn test_detailed_stage_boost_requires_long_prompt() {
        let scorer = RelevanceScorer::new();
        let mut context = ctx();
        context.stage = Stage::Detailed;

        let short = record("Short fees prompt");
        let long = record(
            "What is the complete fee structure for all the engineering programs offered?",
        );

        let short_base = scorer.score("fees prompt", &short, &ctx());
        assert_eq!(scorer.score("fees prompt", &short, &context), short_base);

        let long_base = scorer.score("fee structure", &long, &ctx());
        let long_boosted = scorer.score("fee structure", &long, &context);
        assert!((long_boosted - long_base - DETAILED_STAGE_BOOST).abs() < 1e-6);
    }

    #[test]
    fn test_score_clamped_at_one() {
        let scorer = RelevanceScorer::new();
        let faq = record("mba fees eligibility dates");

        let mut context = ctx();
        context.stage = Stage::Detailed;
        context.mentioned_courses.push("mba".to_string());
        context.mentioned_topics.push(Topic::Fees);
        context.mentioned_topics.push(Topic::Eligibility);
        context.mentioned_topics.push(Topic::Dates);

        let score = scorer.score("mba fees eligibility dates", &faq, &context);
        assert!((score - 1.0).abs() < f32::EPSILON);
    }
}
