//! termquiz-core: bulk term parsing, quiz generation, and scoring.
//!
//! This crate defines the vocabulary data model, the bulk-text term parser,
//! the multiple-choice quiz generator, and the session/history/statistics
//! types that the termquiz CLI builds on.

pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod session;
pub mod statistics;
