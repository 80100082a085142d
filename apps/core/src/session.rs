//! Per-user conversation state.
//!
//! A [`Session`] is the unit of state: it owns the turn history, the
//! response cache and the running analytics counters. The core never holds
//! global state; callers own sessions and pass them into each resolution
//! call. Questions within one session are resolved strictly one at a time.

use chrono::Utc;
use uuid::Uuid;

use crate::analytics::SessionAnalytics;
use crate::brain::cache::ResponseCache;
use crate::brain::resolver::Resolution;
use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::models::{ConversationTurn, Language};

/// Maximum accepted rating value.
pub const MAX_RATING: u8 = 5;

/// One user's conversation: history, cache and counters.
#[derive(Debug)]
pub struct Session {
    id: String,
    /// Interface language, forwarded to analytics.
    pub language: Language,
    history: Vec<ConversationTurn>,
    cache: ResponseCache,
    analytics: SessionAnalytics,
}

impl Session {
    /// Creates a session with the default cache capacity.
    pub fn new(language: Language) -> Self {
        Self::with_cache_capacity(language, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a session with an explicit response-cache bound.
    pub fn with_cache_capacity(language: Language, cache_capacity: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            language,
            history: Vec::new(),
            cache: ResponseCache::new(cache_capacity),
            analytics: SessionAnalytics::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    pub fn last_turn(&self) -> Option<&ConversationTurn> {
        self.history.last()
    }

    pub fn analytics(&self) -> &SessionAnalytics {
        &self.analytics
    }

    pub(crate) fn cache_mut(&mut self) -> &mut ResponseCache {
        &mut self.cache
    }

    /// Appends one turn for a resolved question and updates the counters.
    pub(crate) fn record_resolution(&mut self, question: &str, resolution: &Resolution) {
        self.analytics.record_resolution(
            resolution.intent,
            self.language,
            resolution.response_time,
        );
        self.history.push(ConversationTurn {
            question: question.to_string(),
            answer: resolution.answer.clone(),
            intent: resolution.intent,
            confidence: resolution.confidence,
            response_time: resolution.response_time,
            rating: 0,
            timestamp: Utc::now(),
        });
    }

    /// Sets the rating on an existing turn, identified by its
    /// question+answer pair (most recent match wins). Returns `false` when
    /// the rating is out of range or no turn matches.
    pub fn rate_turn(&mut self, question: &str, answer: &str, rating: u8) -> bool {
        if rating == 0 || rating > MAX_RATING {
            return false;
        }
        let turn = self
            .history
            .iter_mut()
            .rev()
            .find(|turn| turn.question == question && turn.answer == answer);
        match turn {
            Some(turn) => {
                turn.rating = rating;
                self.analytics.record_rating(rating);
                true
            }
            None => false,
        }
    }
}
