//! Session word selection.
//!
//! Shuffles the loaded word list and optionally truncates it to a requested
//! count. Randomness is injected so tests can use a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::model::WordEntry;

/// How many words the user asked to be quizzed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSpec {
    /// Quiz the entire list.
    All,
    /// Quiz at most this many words.
    Limit(usize),
}

impl CountSpec {
    /// Parse the optional positional count argument. Absent and `"all"`
    /// both mean the whole list; anything else must be a positive integer.
    pub fn parse(spec: Option<&str>) -> Result<Self, QuizError> {
        let Some(spec) = spec else {
            return Ok(CountSpec::All);
        };
        let trimmed = spec.trim();
        if trimmed == "all" {
            return Ok(CountSpec::All);
        }
        match trimmed.parse::<usize>() {
            Ok(n) if n > 0 => Ok(CountSpec::Limit(n)),
            _ => Err(QuizError::Argument {
                given: spec.to_string(),
            }),
        }
    }
}

/// Shuffle the word list and take the requested number of entries.
///
/// With [`CountSpec::All`] the result is a permutation of the full list;
/// with a limit it is `min(n, len)` distinct entries.
pub fn choose_words(words: &[WordEntry], spec: CountSpec, rng: &mut impl Rng) -> Vec<WordEntry> {
    let mut selected: Vec<WordEntry> = words.to_vec();
    selected.shuffle(rng);
    if let CountSpec::Limit(n) = spec {
        selected.truncate(n.min(words.len()));
    }
    selected
}
