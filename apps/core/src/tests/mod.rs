//! Test Module
//!
//! Test suite for the admissions chatbot core.
//!
//! ## Test Categories
//! - `brain_tests`: resolver behavior, fallbacks, caching, context boosts
//! - `database_tests`: conversation log, rating updates, aggregate analytics
//! - `integration_tests`: full session workflows end to end

pub mod integration_tests;
