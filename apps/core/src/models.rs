use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::brain::intent::Intent;

/// Interface language selected by the user.
///
/// Carried on the session and forwarded to analytics; the core performs no
/// translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Tamil,
}

impl Language {
    /// Returns the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

/// A single resolved question/answer exchange within a session.
///
/// `rating` starts at 0 (unrated) and is mutated in place by a later user
/// action; it is never a new turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// The user's question as typed.
    pub question: String,
    /// The resolved (already personalized) answer.
    pub answer: String,
    /// Intent label attached to the exchange.
    pub intent: Intent,
    /// Heuristic match strength in [0, 1].
    pub confidence: f32,
    /// Wall-clock resolution time in seconds.
    pub response_time: f64,
    /// User rating, 0 = unrated, 1..=5 once rated.
    pub rating: u8,
    /// When the turn was resolved.
    pub timestamp: DateTime<Utc>,
}

/// A persisted conversation row as stored in SQLite.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct ConversationRow {
    /// Auto-increment row id.
    pub id: i64,
    /// The session this exchange belongs to (UUID).
    pub session_id: String,
    /// RFC 3339 timestamp of the exchange.
    pub timestamp: String,
    pub question: String,
    pub answer: String,
    /// Intent label (snake_case string form of [`Intent`]).
    pub intent: String,
    pub confidence: f32,
    pub response_time: f64,
    /// Language code ("en", "hi", "ta").
    pub language: String,
    pub rating: i64,
}

/// Per-intent conversation count.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct IntentCount {
    pub intent: String,
    pub count: i64,
}

/// Per-language conversation count.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct LanguageCount {
    pub language: String,
    pub count: i64,
}

/// Conversations per calendar day.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct DailyCount {
    /// Day in `YYYY-MM-DD` form.
    pub date: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::Tamil.code(), "ta");
    }

    #[test]
    fn test_language_default() {
        assert_eq!(Language::default(), Language::English);
    }
}
