//! Missed-word report with JSON persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{QuizOptions, WordEntry};
use crate::statistics::SessionStats;

/// Metadata attached to a missed-word export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Absolute path of the word file this run used.
    pub source_file: String,
    pub lenient_umlauts: bool,
    pub match_game: bool,
}

/// The document written when a session misses at least one word. The
/// `missed` entries use the same record shape as an input word file, so a
/// report can be fed straight back in as the next session's word list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissedReport {
    pub meta: RunMetadata,
    pub stats: SessionStats,
    pub missed: Vec<WordEntry>,
}

impl MissedReport {
    pub fn new(
        source_path: &Path,
        options: &QuizOptions,
        stats: SessionStats,
        missed: Vec<WordEntry>,
    ) -> Self {
        let source_file = source_path
            .canonicalize()
            .unwrap_or_else(|_| source_path.to_path_buf());
        Self {
            meta: RunMetadata {
                generated_at: Utc::now(),
                source_file: source_file.display().to_string(),
                lenient_umlauts: options.lenient_umlauts,
                match_game: options.match_game,
            },
            stats,
            missed,
        }
    }

    /// Save the report as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("failed to serialize missed-word report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        serde_json::from_str(&content).context("failed to parse report JSON")
    }
}

/// Derive the output filename for a run: the input's base name plus a
/// generation timestamp, with the input's extension (or `json`). Two runs
/// started within the same second can collide; the window is accepted
/// rather than guarded against.
pub fn missed_file_name(input: &Path, generated_at: DateTime<chrono::Local>) -> PathBuf {
    let base = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "words".to_string());
    let ext = input
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "json".to_string());
    PathBuf::from(format!(
        "{base}_missed_{}.{ext}",
        generated_at.format("%Y%m%d_%H%M%S")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn sample_report() -> MissedReport {
        let mut stats = SessionStats::new(1);
        stats.record_failure();
        MissedReport::new(
            Path::new("words.json"),
            &QuizOptions::default(),
            stats,
            vec![WordEntry::new("cat", vec!["kissa".into()], "")],
        )
    }

    #[test]
    fn filename_from_input_base_and_timestamp() {
        let ts = chrono::Local
            .with_ymd_and_hms(2026, 8, 24, 15, 30, 5)
            .unwrap();
        assert_eq!(
            missed_file_name(Path::new("data/words.json"), ts),
            PathBuf::from("words_missed_20260824_153005.json")
        );
        assert_eq!(
            missed_file_name(Path::new("vocab"), ts),
            PathBuf::from("vocab_missed_20260824_153005.json")
        );
    }

    #[test]
    fn json_roundtrip() {
        let report = sample_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missed.json");

        report.save_json(&path).unwrap();
        let loaded = MissedReport::load_json(&path).unwrap();

        assert_eq!(loaded.stats, report.stats);
        assert_eq!(loaded.missed, report.missed);
        assert_eq!(loaded.meta.source_file, report.meta.source_file);
    }

    #[test]
    fn payload_uses_original_wire_keys() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        for key in ["\"meta\"", "\"stats\"", "\"missed\"", "\"en\"", "\"fi\""] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
    }

    #[test]
    fn missed_entries_parse_as_a_word_file() {
        let report = sample_report();
        let missed_json = serde_json::to_string(&report.missed).unwrap();
        let words =
            crate::parser::parse_words_str(&missed_json, Path::new("missed.json")).unwrap();
        assert_eq!(words, report.missed);
    }
}
