//! Conversation context tracking.
//!
//! Derives a summary of the recent conversation from the session history:
//! which course codes and topics came up, and how deep into the
//! conversation the user is. Only the 5 most recent turns are examined (a
//! sliding window, not true memory); the stage thresholds use the full
//! history length.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::ConversationTurn;

/// Number of most recent turns examined for courses and topics.
pub const RECENT_WINDOW: usize = 5;

/// Canonical course-code pattern: b.tech/mba/bca/mca/b.com/m.com,
/// case-insensitive, optional dot.
static COURSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(b\.?tech|mba|bca|mca|b\.?com|m\.?com)\b")
        .expect("Invalid regex: course code pattern")
});

/// How far the conversation has progressed, by total history length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Two or fewer turns so far.
    Initial,
    /// Three to five turns.
    Exploring,
    /// More than five turns.
    Detailed,
}

impl Stage {
    fn from_history_len(len: usize) -> Self {
        if len > 5 {
            Stage::Detailed
        } else if len > 2 {
            Stage::Exploring
        } else {
            Stage::Initial
        }
    }
}

/// Topic labels tracked across the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Fees,
    Eligibility,
    Dates,
}

impl Topic {
    /// Label used for substring checks against FAQ prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Fees => "fees",
            Topic::Eligibility => "eligibility",
            Topic::Dates => "dates",
        }
    }
}

/// Derived view of the recent conversation. Recomputed on every resolution
/// call and never persisted.
///
/// Courses and topics keep duplicates in order of appearance; consumers
/// that need one value take the most recent (see [`Self::last_course`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Course codes found in recent questions, lowercased, duplicates retained.
    pub mentioned_courses: Vec<String>,
    /// Topics flagged in recent questions, duplicates retained.
    pub mentioned_topics: Vec<Topic>,
    /// Conversation stage from total history length.
    pub stage: Stage,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self {
            mentioned_courses: Vec::new(),
            mentioned_topics: Vec::new(),
            stage: Stage::Initial,
        }
    }
}

impl ConversationContext {
    /// Analyzes the turn history into a context summary.
    ///
    /// Empty history yields the zero-value context.
    pub fn analyze(history: &[ConversationTurn]) -> Self {
        let mut context = Self {
            stage: Stage::from_history_len(history.len()),
            ..Self::default()
        };

        let recent_start = history.len().saturating_sub(RECENT_WINDOW);
        for turn in &history[recent_start..] {
            let question = turn.question.to_lowercase();

            for cap in COURSE_RE.captures_iter(&question) {
                context.mentioned_courses.push(cap[1].to_string());
            }

            if question.contains("fee") || question.contains("cost") {
                context.mentioned_topics.push(Topic::Fees);
            }
            if question.contains("eligibility") || question.contains("criteria") {
                context.mentioned_topics.push(Topic::Eligibility);
            }
            if question.contains("date") || question.contains("deadline") {
                context.mentioned_topics.push(Topic::Dates);
            }
        }

        context
    }

    /// Most recently mentioned course code, if any.
    pub fn last_course(&self) -> Option<&str> {
        self.mentioned_courses.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::brain::intent::Intent;

    fn turn(question: &str) -> ConversationTurn {
        ConversationTurn {
            question: question.to_string(),
            answer: "answer".to_string(),
            intent: Intent::General,
            confidence: 0.5,
            response_time: 0.0,
            rating: 0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_empty_history_zero_context() {
        let context = ConversationContext::analyze(&[]);
        assert!(context.mentioned_courses.is_empty());
        assert!(context.mentioned_topics.is_empty());
        assert_eq!(context.stage, Stage::Initial);
    }

    #[test]
    fn test_stage_thresholds() {
        let history: Vec<_> = (0..6).map(|i| turn(&format!("question {}", i))).collect();

        assert_eq!(ConversationContext::analyze(&history[..1]).stage, Stage::Initial);
        assert_eq!(ConversationContext::analyze(&history[..2]).stage, Stage::Initial);
        assert_eq!(ConversationContext::analyze(&history[..3]).stage, Stage::Exploring);
        assert_eq!(ConversationContext::analyze(&history[..5]).stage, Stage::Exploring);
        assert_eq!(ConversationContext::analyze(&history[..6]).stage, Stage::Detailed);
    }

    #[test]
    fn test_course_extraction_with_optional_dot() {
        let history = vec![turn("Is B.Tech good?"), turn("what about btech fees")];
        let context = ConversationContext::analyze(&history);

        assert_eq!(context.mentioned_courses, vec!["b.tech", "btech"]);
        assert_eq!(context.last_course(), Some("btech"));
    }

    #[test]
    fn test_topic_extraction_multiple_per_question() {
        let history = vec![turn("What are the fees and the eligibility criteria?")];
        let context = ConversationContext::analyze(&history);

        assert_eq!(
            context.mentioned_topics,
            vec![Topic::Fees, Topic::Eligibility]
        );
    }

    #[test]
    fn test_window_ignores_old_turns() {
        let mut history = vec![turn("tell me about MBA")];
        for i in 0..RECENT_WINDOW {
            history.push(turn(&format!("neutral question {}", i)));
        }

        let context = ConversationContext::analyze(&history);
        // The MBA mention fell out of the 5-turn window.
        assert!(context.mentioned_courses.is_empty());
        // But stage still counts the full history.
        assert_eq!(context.stage, Stage::Detailed);
    }

    #[test]
    fn test_duplicates_retained() {
        let history = vec![turn("mba fees?"), turn("mba fee structure?")];
        let context = ConversationContext::analyze(&history);

        assert_eq!(context.mentioned_courses, vec!["mba", "mba"]);
        assert_eq!(context.mentioned_topics, vec![Topic::Fees, Topic::Fees]);
    }
}
