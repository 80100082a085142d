//! Integration Tests
//!
//! Full workflows: corpus from disk, a session asking questions through
//! the resolver, ratings, persistence and the analytics sink together.

use std::sync::Arc;

use tempfile::tempdir;

use crate::analytics::{AnalyticsSink, ResolutionEvent, SqliteSink};
use crate::brain::Intent;
use crate::corpus::FaqCorpus;
use crate::database;
use crate::models::Language;
use crate::session::Session;
use crate::AnswerResolver;

const CORPUS_JSON: &str = r#"[
    {"prompt": "What is the eligibility for B.Tech?", "response": "50% in PCM."},
    {"prompt": "What are the fees for MBA?", "response": "2L per year."},
    {"prompt": "What is the last date to apply?", "response": "June 30th."},
    {"prompt": "", "response": "malformed, should be dropped"}
]"#;

#[tokio::test]
async fn test_full_session_flow() {
    let dir = tempdir().expect("tempdir");
    let corpus_path = dir.path().join("college_faq.json");
    std::fs::write(&corpus_path, CORPUS_JSON).expect("write corpus");

    let corpus = FaqCorpus::load(&corpus_path);
    assert_eq!(corpus.len(), 3, "malformed record dropped at load");

    let pool = database::init_db_in_memory().await.expect("pool");
    let resolver = AnswerResolver::new(corpus);
    let mut session = Session::new(Language::English);

    // Ask a few questions, persisting each resolved turn like a caller would.
    for question in [
        "What is the eligibility for B.Tech?",
        "what are the fees for mba?",
        "is there a scholarship for sports quota",
    ] {
        let resolution = resolver.resolve(&mut session, question);
        assert!(!resolution.answer.is_empty());

        let turn = session.last_turn().expect("turn appended");
        database::save_conversation(&pool, session.id(), turn, session.language)
            .await
            .expect("persist turn");
    }

    assert_eq!(session.history().len(), 3);
    assert_eq!(session.analytics().questions_asked, 3);

    // Rate the first exchange in memory and in the log.
    let (question, answer) = {
        let turn = &session.history()[0];
        (turn.question.clone(), turn.answer.clone())
    };
    assert!(session.rate_turn(&question, &answer, 5));
    let updated = database::update_rating(&pool, session.id(), &question, &answer, 5)
        .await
        .expect("persist rating");
    assert_eq!(updated, 1);
    assert_eq!(session.analytics().avg_rating(), 5.0);

    let rows = database::get_session_conversations(&pool, session.id())
        .await
        .expect("rows");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].rating, 5);

    let report = database::get_analytics(&pool).await.expect("report");
    assert_eq!(report.total_conversations, 3);
    assert!(report
        .intent_counts
        .iter()
        .any(|c| c.intent == Intent::Eligibility.label()));
}

#[tokio::test]
async fn test_sqlite_sink_records_events() {
    let pool = database::init_db_in_memory().await.expect("pool");
    let sink: Arc<dyn AnalyticsSink> = Arc::new(SqliteSink::new(pool.clone()));

    sink.record(ResolutionEvent {
        intent: Intent::Admission,
        confidence: 0.6,
        response_time: 0.004,
        language: Language::English,
    })
    .await;

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM analytics_events")
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(count.0, 1);
}

#[test]
fn test_conversation_drifts_toward_context() {
    let corpus = FaqCorpus::new(vec![
        crate::corpus::FaqRecord {
            prompt: "What is the eligibility for B.Tech?".to_string(),
            response: "50% in PCM.".to_string(),
        },
        crate::corpus::FaqRecord {
            prompt: "What are the application requirements?".to_string(),
            response: "Transcripts and an entrance score.".to_string(),
        },
    ]);
    let resolver = AnswerResolver::new(corpus);
    let mut session = Session::new(Language::English);

    resolver.resolve(&mut session, "thinking about b.tech");
    let resolution = resolver.resolve(&mut session, "what is the eligibility");

    // The remembered course shows up both in ranking (course boost) and
    // in the personalized prefix, in the spelling the user typed.
    assert!(resolution.answer.contains("50% in PCM."));
    assert!(resolution.answer.starts_with("For B.TECH: "));
}
