//! # Brain Module
//!
//! The context-aware answer-matching engine. Resolves a user question
//! against the FAQ corpus using lexical overlap biased by recent
//! conversation, then personalizes the answer for the session.
//!
//! ## Components
//! - `intent`: keyword-cascade intent classification (lexical and FAQ-informed strategies)
//! - `context`: sliding-window conversation context (courses, topics, stage)
//! - `scorer`: Jaccard relevance scoring with context boosts
//! - `personalizer`: contextual prefixes, suggestions and related questions
//! - `cache`: bounded per-session response cache
//! - `resolver`: main orchestrator, total over all inputs

pub mod cache;
pub mod context;
pub mod intent;
pub mod personalizer;
pub mod resolver;
pub mod scorer;

pub use cache::{normalize_question, CachedAnswer, ResponseCache};
pub use context::{ConversationContext, Stage, Topic};
pub use intent::{Intent, IntentClassifier};
pub use personalizer::Personalizer;
pub use resolver::{AnswerResolver, Resolution};
pub use scorer::RelevanceScorer;
