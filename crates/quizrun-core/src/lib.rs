//! quizrun-core — Quiz loading, timed sessions, and scoring.
//!
//! This crate holds everything between reading a quiz file and printing the
//! final tally: the record model, the CSV loader, the ask/read/check session,
//! the deadline coordinator, and the results reporter.

pub mod config;
pub mod coordinator;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod session;
pub mod sink;
pub mod source;
pub mod traits;

pub use error::QuizError;
