// Admitchat entry point: a thin terminal front over the answering core.
// The real presentation layer lives elsewhere; this binary only wires the
// library together for local use.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use admitchat_core::analytics::{AnalyticsSink, ResolutionEvent, SqliteSink, TracingSink};
use admitchat_core::brain::personalizer::QUICK_QUESTIONS;
use admitchat_core::config::Config;
use admitchat_core::corpus::FaqCorpus;
use admitchat_core::database;
use admitchat_core::models::Language;
use admitchat_core::session::Session;
use admitchat_core::AnswerResolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    let corpus = FaqCorpus::load(&config.corpus_path);
    if corpus.is_empty() {
        warn!("Running with an empty corpus; all answers will be fallbacks");
    }

    // Persistence is optional: without it the chatbot still answers,
    // nothing is logged.
    let pool = match database::init_db(&config.db_path).await {
        Ok(pool) => Some(pool),
        Err(e) => {
            warn!(error = %e, "Database unavailable, conversations will not be persisted");
            None
        }
    };

    let sink: Arc<dyn AnalyticsSink> = match &pool {
        Some(pool) => Arc::new(SqliteSink::new(pool.clone())),
        None => Arc::new(TracingSink),
    };

    let resolver = AnswerResolver::new(corpus);
    let mut session = Session::with_cache_capacity(Language::English, config.cache_capacity);

    println!("College Admission Chatbot (session {})", session.id());
    println!("Quick questions:");
    for question in QUICK_QUESTIONS {
        println!("  - {}", question);
    }
    println!("Commands: :rate <1-5>, :analytics, :quit\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input == ":quit" {
            break;
        }

        if input == ":analytics" {
            let analytics = session.analytics();
            println!("Questions asked: {}", analytics.questions_asked);
            println!("Avg rating: {:.1}", analytics.avg_rating());
            println!("Avg response time: {:.3}s", analytics.avg_response_time());
            continue;
        }

        if let Some(raw) = input.strip_prefix(":rate ") {
            let Ok(rating) = raw.trim().parse::<u8>() else {
                println!("Usage: :rate <1-5>");
                continue;
            };
            let Some(turn) = session.last_turn() else {
                println!("Nothing to rate yet.");
                continue;
            };
            let (question, answer) = (turn.question.clone(), turn.answer.clone());
            if !session.rate_turn(&question, &answer, rating) {
                println!("Usage: :rate <1-5>");
                continue;
            }
            if let Some(pool) = &pool {
                if let Err(e) =
                    database::update_rating(pool, session.id(), &question, &answer, rating).await
                {
                    warn!(error = %e, "Failed to persist rating");
                }
            }
            println!("Thanks for the feedback!");
            continue;
        }

        let resolution = resolver.resolve(&mut session, input);
        println!("\n{}", resolution.answer);
        println!(
            "\n[intent: {} | confidence: {:.2} | {:.3}s{}]",
            resolution.intent,
            resolution.confidence,
            resolution.response_time,
            if resolution.cached { " | cached" } else { "" }
        );

        if let (Some(pool), Some(turn)) = (&pool, session.last_turn()) {
            if let Err(e) =
                database::save_conversation(pool, session.id(), turn, session.language).await
            {
                warn!(error = %e, "Failed to persist conversation");
            }
        }

        // Fire-and-forget: resolution never waits on telemetry outcomes.
        let event = ResolutionEvent {
            intent: resolution.intent,
            confidence: resolution.confidence,
            response_time: resolution.response_time,
            language: session.language,
        };
        let sink = Arc::clone(&sink);
        tokio::spawn(async move { sink.record(event).await });
    }

    Ok(())
}
