//! SQLite conversation log and aggregate analytics.
//!
//! Simple append-only persistence for resolved turns plus the aggregate
//! queries the analytics dashboard reads. The core library never calls
//! into here on the resolution path; callers persist turns after the fact.

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::analytics::ResolutionEvent;
use crate::error::AppError;
use crate::models::{ConversationRow, ConversationTurn, DailyCount, IntentCount, Language, LanguageCount};

/// Aggregate view over the conversation log.
#[derive(Debug)]
pub struct AnalyticsReport {
    pub total_conversations: i64,
    pub intent_counts: Vec<IntentCount>,
    pub language_counts: Vec<LanguageCount>,
    /// Conversations per day, most recent first, last 30 days present in the log.
    pub daily_counts: Vec<DailyCount>,
}

pub async fn init_db(db_path: &Path) -> Result<SqlitePool, AppError> {
    let db_url = format!("sqlite://{}", db_path.to_string_lossy());

    info!("Initializing database at: {}", db_url);

    let options = SqliteConnectOptions::from_str(&db_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;

    info!("Database initialized and migrations applied.");

    Ok(pool)
}

/// In-memory database for tests and throwaway runs.
pub async fn init_db_in_memory() -> Result<SqlitePool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    migrate(&pool).await?;
    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS conversations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id TEXT NOT NULL,
            timestamp TEXT NOT NULL,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            intent TEXT NOT NULL,
            confidence REAL NOT NULL,
            response_time REAL NOT NULL,
            language TEXT NOT NULL,
            rating INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE IF NOT EXISTS analytics_events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            intent TEXT NOT NULL,
            confidence REAL NOT NULL,
            response_time REAL NOT NULL,
            language TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Appends one resolved turn to the log.
pub async fn save_conversation(
    pool: &SqlitePool,
    session_id: &str,
    turn: &ConversationTurn,
    language: Language,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO conversations
            (session_id, timestamp, question, answer, intent, confidence, response_time, language, rating)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(session_id)
    .bind(turn.timestamp.to_rfc3339())
    .bind(&turn.question)
    .bind(&turn.answer)
    .bind(turn.intent.label())
    .bind(turn.confidence)
    .bind(turn.response_time)
    .bind(language.code())
    .bind(turn.rating as i64)
    .execute(pool)
    .await?;
    Ok(())
}

/// Sets the rating on persisted rows by turn identity (question+answer
/// within the session). Returns the number of rows updated.
pub async fn update_rating(
    pool: &SqlitePool,
    session_id: &str,
    question: &str,
    answer: &str,
    rating: u8,
) -> Result<u64, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE conversations
        SET rating = ?
        WHERE session_id = ? AND question = ? AND answer = ?
        "#,
    )
    .bind(rating as i64)
    .bind(session_id)
    .bind(question)
    .bind(answer)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn get_session_conversations(
    pool: &SqlitePool,
    session_id: &str,
) -> Result<Vec<ConversationRow>, AppError> {
    let rows = sqlx::query_as::<_, ConversationRow>(
        r#"
        SELECT id, session_id, timestamp, question, answer, intent, confidence, response_time, language, rating
        FROM conversations
        WHERE session_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn save_event(pool: &SqlitePool, event: &ResolutionEvent) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO analytics_events (timestamp, intent, confidence, response_time, language)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(chrono::Utc::now().to_rfc3339())
    .bind(event.intent.label())
    .bind(event.confidence)
    .bind(event.response_time)
    .bind(event.language.code())
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get_analytics(pool: &SqlitePool) -> Result<AnalyticsReport, AppError> {
    let total_conversations: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM conversations")
            .fetch_one(pool)
            .await?;

    let intent_counts = sqlx::query_as::<_, IntentCount>(
        "SELECT intent, COUNT(*) as count FROM conversations GROUP BY intent",
    )
    .fetch_all(pool)
    .await?;

    let language_counts = sqlx::query_as::<_, LanguageCount>(
        "SELECT language, COUNT(*) as count FROM conversations GROUP BY language",
    )
    .fetch_all(pool)
    .await?;

    let daily_counts = sqlx::query_as::<_, DailyCount>(
        r#"
        SELECT DATE(timestamp) as date, COUNT(*) as count
        FROM conversations
        GROUP BY DATE(timestamp)
        ORDER BY date DESC
        LIMIT 30
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(AnalyticsReport {
        total_conversations: total_conversations.0,
        intent_counts,
        language_counts,
        daily_counts,
    })
}
