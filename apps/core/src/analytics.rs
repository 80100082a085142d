//! Telemetry for resolved questions.
//!
//! Two layers: a fire-and-forget [`AnalyticsSink`] for external reporting
//! (the core expects no response), and a per-session [`SessionAnalytics`]
//! summary of counters the presentation layer displays.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::brain::intent::Intent;
use crate::models::Language;

/// One resolved question, as reported to the analytics sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionEvent {
    pub intent: Intent,
    pub confidence: f32,
    /// Resolution latency in seconds.
    pub response_time: f64,
    pub language: Language,
}

/// Fire-and-forget sink for resolution events.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn record(&self, event: ResolutionEvent);
}

/// Sink that only emits a structured log line.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

#[async_trait]
impl AnalyticsSink for TracingSink {
    async fn record(&self, event: ResolutionEvent) {
        info!(
            intent = event.intent.label(),
            confidence = event.confidence,
            response_time = event.response_time,
            language = event.language.code(),
            "question resolved"
        );
    }
}

/// Sink that appends events to the SQLite log. Failures are logged and
/// swallowed; the resolution path never depends on the sink.
#[derive(Debug, Clone)]
pub struct SqliteSink {
    pool: SqlitePool,
}

impl SqliteSink {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsSink for SqliteSink {
    async fn record(&self, event: ResolutionEvent) {
        if let Err(e) = crate::database::save_event(&self.pool, &event).await {
            warn!(error = %e, "Failed to record analytics event");
        }
    }
}

/// Running per-session counters, owned by the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionAnalytics {
    pub session_start: DateTime<Utc>,
    pub questions_asked: usize,
    pub intents_detected: HashMap<Intent, usize>,
    pub languages_used: HashMap<Language, usize>,
    pub response_times: Vec<f64>,
    pub user_ratings: Vec<u8>,
}

impl Default for SessionAnalytics {
    fn default() -> Self {
        Self {
            session_start: Utc::now(),
            questions_asked: 0,
            intents_detected: HashMap::new(),
            languages_used: HashMap::new(),
            response_times: Vec::new(),
            user_ratings: Vec::new(),
        }
    }
}

impl SessionAnalytics {
    pub fn record_resolution(&mut self, intent: Intent, language: Language, response_time: f64) {
        self.questions_asked += 1;
        *self.intents_detected.entry(intent).or_insert(0) += 1;
        *self.languages_used.entry(language).or_insert(0) += 1;
        self.response_times.push(response_time);
    }

    pub fn record_rating(&mut self, rating: u8) {
        self.user_ratings.push(rating);
    }

    /// Average of submitted ratings; 0.0 when nothing has been rated.
    pub fn avg_rating(&self) -> f32 {
        if self.user_ratings.is_empty() {
            return 0.0;
        }
        self.user_ratings.iter().map(|&r| r as f32).sum::<f32>() / self.user_ratings.len() as f32
    }

    /// Average resolution latency in seconds; 0.0 before the first question.
    pub fn avg_response_time(&self) -> f64 {
        if self.response_times.is_empty() {
            return 0.0;
        }
        self.response_times.iter().sum::<f64>() / self.response_times.len() as f64
    }
}
