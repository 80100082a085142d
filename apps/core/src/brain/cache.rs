//! Per-session response cache.
//!
//! Keyed by the normalized question text only, so a hit returns the answer
//! as personalized at first-ask time: current context is deliberately NOT
//! re-applied (see the resolver docs). Bounded LRU, replacing the
//! unbounded map the original carried.

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use lru::LruCache;
use serde::{Deserialize, Serialize};

use crate::brain::intent::Intent;
use crate::config::DEFAULT_CACHE_CAPACITY;

/// Normalizes a question into cache-key form: lowercased, with runs of
/// whitespace collapsed to single spaces.
pub fn normalize_question(question: &str) -> String {
    question
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A memoized resolution, stored post-personalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedAnswer {
    pub answer: String,
    pub intent: Intent,
    pub confidence: f32,
    pub timestamp: DateTime<Utc>,
}

/// Bounded LRU cache of resolved answers, session lifetime.
#[derive(Debug)]
pub struct ResponseCache {
    entries: LruCache<String, CachedAnswer>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl ResponseCache {
    /// Creates a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity clamped to >= 1");
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Looks up a normalized key, marking the entry most-recently used.
    pub fn get(&mut self, key: &str) -> Option<&CachedAnswer> {
        self.entries.get(key)
    }

    /// Stores an entry, evicting the least-recently-used one at capacity.
    pub fn put(&mut self, key: String, value: CachedAnswer) {
        self.entries.put(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
