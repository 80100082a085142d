//! Environment-driven configuration.
//!
//! All settings have defaults so the binary runs with no setup; a `.env`
//! file or real environment variables override them.

use std::env;
use std::path::PathBuf;

use tracing::warn;

/// Default capacity of the per-session response cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

const DEFAULT_CORPUS_PATH: &str = "college_faq.json";
const DEFAULT_DB_PATH: &str = "admitchat.sqlite";

/// Runtime configuration for the chatbot core and its collaborators.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the FAQ corpus JSON file.
    pub corpus_path: PathBuf,
    /// Path to the SQLite conversation log.
    pub db_path: PathBuf,
    /// Maximum number of entries in the per-session response cache.
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl Config {
    /// Builds a configuration from the environment.
    ///
    /// Unparseable values fall back to defaults with a warning rather than
    /// failing startup.
    pub fn from_env() -> Self {
        let corpus_path = env::var("ADMITCHAT_CORPUS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CORPUS_PATH));

        let db_path = env::var("ADMITCHAT_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        let cache_capacity = match env::var("ADMITCHAT_CACHE_CAPACITY") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(
                        value = %raw,
                        "Invalid ADMITCHAT_CACHE_CAPACITY, using default {}",
                        DEFAULT_CACHE_CAPACITY
                    );
                    DEFAULT_CACHE_CAPACITY
                }
            },
            Err(_) => DEFAULT_CACHE_CAPACITY,
        };

        Self {
            corpus_path,
            db_path,
            cache_capacity,
        }
    }
}
