//! Admitchat Core
//!
//! Context-aware FAQ answering engine for a college admissions chatbot.
//! The core is an in-process library: the caller owns a [`session::Session`],
//! feeds questions through [`brain::AnswerResolver`], and persists or reports
//! results through the `database` and `analytics` modules.
//!
//! ## Modules
//! - `brain`: matching engine (scorer, context tracker, resolver, personalizer, cache, intent)
//! - `corpus`: FAQ corpus loading and validation
//! - `session`: per-user conversation state (history, cache, counters)
//! - `database`: SQLite conversation log and aggregate analytics
//! - `analytics`: fire-and-forget telemetry sink
//! - `config`: environment-driven configuration

pub mod analytics;
pub mod brain;
pub mod config;
pub mod corpus;
pub mod database;
pub mod error;
pub mod models;
pub mod session;

pub use brain::{AnswerResolver, Resolution};
pub use corpus::{FaqCorpus, FaqRecord};
pub use error::AppError;
pub use models::{ConversationTurn, Language};
pub use session::Session;

#[cfg(test)]
mod tests;
