//! sanadrill-core — Word store, matcher, and quiz engine.
//!
//! This crate defines the data model, word-file parsing, answer matching,
//! and the interactive quiz session logic that the sanadrill CLI builds on.

pub mod distractor;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;
pub mod parser;
pub mod report;
pub mod select;
pub mod statistics;
