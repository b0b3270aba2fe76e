//! Session statistics.

use serde::{Deserialize, Serialize};

/// Per-session answer counters.
///
/// Once a session completes,
/// `correct_first_attempt + correct_second_attempt + failed == total`.
/// The serde field names match the keys written to the missed-word export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total: u32,
    #[serde(rename = "correct_1")]
    pub correct_first_attempt: u32,
    #[serde(rename = "correct_2")]
    pub correct_second_attempt: u32,
    pub failed: u32,
}

impl SessionStats {
    pub fn new(total: usize) -> Self {
        Self {
            total: total as u32,
            ..Self::default()
        }
    }

    /// Record a correct answer on the given attempt (1 or 2).
    pub fn record_correct(&mut self, attempt: u32) {
        match attempt {
            1 => self.correct_first_attempt += 1,
            _ => self.correct_second_attempt += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Whether the completion invariant holds.
    pub fn is_complete(&self) -> bool {
        self.correct_first_attempt + self.correct_second_attempt + self.failed == self.total
    }

    pub fn first_attempt_pct(&self) -> f64 {
        percentage(self.correct_first_attempt, self.total)
    }

    pub fn second_attempt_pct(&self) -> f64 {
        percentage(self.correct_second_attempt, self.total)
    }

    pub fn failed_pct(&self) -> f64 {
        percentage(self.failed, self.total)
    }
}

/// Percentage of `part` in `total`; 0.0 when the total is zero.
pub fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(total) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_zero_total_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 0), 0.0);
    }

    #[test]
    fn percentage_basic() {
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!((percentage(3, 3) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn counters_accumulate_per_attempt() {
        let mut stats = SessionStats::new(3);
        stats.record_correct(1);
        stats.record_correct(2);
        stats.record_failure();
        assert_eq!(stats.correct_first_attempt, 1);
        assert_eq!(stats.correct_second_attempt, 1);
        assert_eq!(stats.failed, 1);
        assert!(stats.is_complete());
    }

    #[test]
    fn serde_uses_export_keys() {
        let stats = SessionStats {
            total: 2,
            correct_first_attempt: 1,
            correct_second_attempt: 0,
            failed: 1,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"correct_1\":1"));
        assert!(json.contains("\"correct_2\":0"));
    }
}
