//! Core data model types for sanadrill.
//!
//! These are the fundamental types the rest of the system uses to represent
//! vocabulary entries and a configured quiz run.

use serde::{Deserialize, Serialize};

/// A single vocabulary entry: an English prompt word, one or more accepted
/// Finnish translations, and an optional phonetic hint.
///
/// Entries are immutable after load; the serde field names match the wire
/// keys used by word files and the missed-word export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The English prompt word.
    #[serde(rename = "en")]
    pub source_term: String,
    /// Accepted Finnish translations, at least one, all non-empty.
    #[serde(rename = "fi")]
    pub target_terms: Vec<String>,
    /// Optional pronunciation hint; empty when absent.
    #[serde(rename = "phon", default)]
    pub phonetic_hint: String,
}

impl WordEntry {
    pub fn new(
        source_term: impl Into<String>,
        target_terms: Vec<String>,
        phonetic_hint: impl Into<String>,
    ) -> Self {
        Self {
            source_term: source_term.into(),
            target_terms,
            phonetic_hint: phonetic_hint.into(),
        }
    }
}

/// Immutable quiz configuration, constructed once at startup and passed
/// explicitly to every component that needs it.
#[derive(Debug, Clone, Default)]
pub struct QuizOptions {
    /// Treat "a" as matching "ä" and "o" as matching "ö".
    pub lenient_umlauts: bool,
    /// Multiple-choice mode with distractor options.
    pub match_game: bool,
    /// Raw word-count specifier from the command line, if given.
    pub requested_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn word_entry_serde_roundtrip() {
        let entry = WordEntry::new("cat", vec!["kissa".into()], "KEES-sah");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"en\":\"cat\""));
        assert!(json.contains("\"fi\":[\"kissa\"]"));
        let back: WordEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn word_entry_phonetic_defaults_to_empty() {
        let entry: WordEntry =
            serde_json::from_str(r#"{"en":"dog","fi":["koira"]}"#).unwrap();
        assert_eq!(entry.phonetic_hint, "");
    }
}
