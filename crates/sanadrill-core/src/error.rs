//! Quiz error taxonomy.
//!
//! Every variant is fatal at the point it occurs: the CLI prints the
//! diagnostic and exits non-zero. The only retried operation anywhere is
//! answer matching inside a question, which is a gameplay rule, not fault
//! recovery.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading words or running a quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The word file is missing or unreadable.
    #[error("cannot read word file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The word file is not valid structured data, or has an unsupported
    /// top-level shape.
    #[error("invalid word file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// A record parsed fine but is semantically invalid (empty source term
    /// or no usable translations).
    #[error("invalid word entry: {record}")]
    Load { record: String },

    /// The word-count argument is neither "all" nor a positive integer.
    #[error("invalid word count '{given}': expected a positive integer or \"all\"")]
    Argument { given: String },

    /// The word pool cannot supply enough distinct distractors.
    #[error("not enough distractors: needed {needed}, only {available} available")]
    InsufficientPool { needed: usize, available: usize },
}
