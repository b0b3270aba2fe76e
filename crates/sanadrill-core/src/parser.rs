//! JSON word-file parser.
//!
//! Loads word lists from JSON files and validates them into canonical
//! [`WordEntry`] values. Two top-level shapes are accepted:
//!
//! - an array of records: `[{"en": "cat", "fi": "kissa", "phon": "..."}]`
//! - a mapping keyed by source term: `{"cat": {"fi": ["kissa"]}}`
//!
//! The `fi` value may be a single string or a list of strings in either
//! shape. All validation and normalization happens here, at the boundary;
//! downstream code never sees a half-formed entry.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::QuizError;
use crate::model::WordEntry;

/// Intermediate record structure shared by both file shapes.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    en: Option<String>,
    #[serde(default)]
    fi: Option<RawTargets>,
    #[serde(default)]
    phon: Option<String>,
}

/// The `fi` field accepts a bare string or a list of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTargets {
    One(String),
    Many(Vec<String>),
}

impl RawTargets {
    fn into_trimmed(self) -> Vec<String> {
        let raw = match self {
            RawTargets::One(s) => vec![s],
            RawTargets::Many(list) => list,
        };
        raw.iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Load and validate a word file.
pub fn load_words(path: &Path) -> Result<Vec<WordEntry>, QuizError> {
    let content = std::fs::read_to_string(path).map_err(|source| QuizError::File {
        path: path.to_path_buf(),
        source,
    })?;
    parse_words_str(&content, path)
}

/// Parse a JSON word-file string (useful for testing).
pub fn parse_words_str(content: &str, source_path: &Path) -> Result<Vec<WordEntry>, QuizError> {
    let document: Value = serde_json::from_str(content).map_err(|e| QuizError::Parse {
        path: source_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let entries = match document {
        Value::Array(records) => records
            .into_iter()
            .map(canonicalize_record)
            .collect::<Result<Vec<_>, _>>()?,
        Value::Object(map) => map
            .into_iter()
            .map(|(source_term, record)| canonicalize_keyed_record(source_term, record))
            .collect::<Result<Vec<_>, _>>()?,
        _ => {
            return Err(QuizError::Parse {
                path: source_path.to_path_buf(),
                reason: "unsupported top-level structure (expected array or object)".into(),
            })
        }
    };

    tracing::debug!(
        count = entries.len(),
        path = %source_path.display(),
        "loaded word file"
    );
    Ok(entries)
}

/// Canonicalize one record from the array shape.
fn canonicalize_record(record: Value) -> Result<WordEntry, QuizError> {
    let rendered = record.to_string();
    let raw: RawRecord = serde_json::from_value(record).map_err(|_| QuizError::Load {
        record: rendered.clone(),
    })?;
    build_entry(raw.en, raw.fi, raw.phon, &rendered)
}

/// Canonicalize one record from the mapping shape, where the source term is
/// the key and the value carries `fi` / `phon`.
fn canonicalize_keyed_record(source_term: String, record: Value) -> Result<WordEntry, QuizError> {
    let rendered = format!("{source_term:?}: {record}");
    let raw: RawRecord = match record {
        // A null value means "no translations yet", which is still invalid,
        // but should be reported as a load problem rather than a type error.
        Value::Null => RawRecord {
            en: None,
            fi: None,
            phon: None,
        },
        other => serde_json::from_value(other).map_err(|_| QuizError::Load {
            record: rendered.clone(),
        })?,
    };
    build_entry(Some(source_term), raw.fi, raw.phon, &rendered)
}

fn build_entry(
    en: Option<String>,
    fi: Option<RawTargets>,
    phon: Option<String>,
    rendered: &str,
) -> Result<WordEntry, QuizError> {
    let source_term = en.map(|s| s.trim().to_string()).unwrap_or_default();
    let target_terms = fi.map(RawTargets::into_trimmed).unwrap_or_default();

    if source_term.is_empty() || target_terms.is_empty() {
        return Err(QuizError::Load {
            record: rendered.to_string(),
        });
    }

    Ok(WordEntry {
        source_term,
        target_terms,
        phonetic_hint: phon.map(|s| s.trim().to_string()).unwrap_or_default(),
    })
}
