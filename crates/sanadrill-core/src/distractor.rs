//! Distractor selection for multiple-choice mode.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::model::WordEntry;

/// How many wrong options accompany the correct one by default.
pub const DEFAULT_DISTRACTOR_COUNT: usize = 2;

/// Pick `count` distinct wrong answers from the whole word pool.
///
/// Candidates are every target term in the pool, deduplicated, minus every
/// term in the current question's accepted set. Small pools or pools with
/// heavy translation overlap can run dry, which is a hard error.
pub fn pick_distractors(
    pool: &[WordEntry],
    accepted: &[String],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<String>, QuizError> {
    let accepted_set: HashSet<&str> = accepted.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let mut candidates: Vec<&String> = Vec::new();
    for term in pool.iter().flat_map(|w| w.target_terms.iter()) {
        if !accepted_set.contains(term.as_str()) && seen.insert(term.as_str()) {
            candidates.push(term);
        }
    }

    if candidates.len() < count {
        return Err(QuizError::InsufficientPool {
            needed: count,
            available: candidates.len(),
        });
    }

    Ok(candidates
        .choose_multiple(rng, count)
        .map(|term| (*term).clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<WordEntry> {
        vec![
            WordEntry::new("cat", vec!["kissa".into()], ""),
            WordEntry::new("dog", vec!["koira".into(), "hauva".into()], ""),
            WordEntry::new("weather", vec!["sää".into()], ""),
            WordEntry::new("puppy", vec!["hauva".into()], ""),
        ]
    }

    #[test]
    fn never_returns_an_accepted_term() {
        let pool = pool();
        let accepted = vec!["kissa".to_string()];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let picked = pick_distractors(&pool, &accepted, 2, &mut rng).unwrap();
            assert_eq!(picked.len(), 2);
            assert!(!picked.contains(&"kissa".to_string()));
        }
    }

    #[test]
    fn distractors_are_distinct() {
        // "hauva" appears twice in the pool but must be offered at most once.
        let pool = pool();
        let accepted = vec!["kissa".to_string()];
        let mut rng = StdRng::seed_from_u64(2);
        let picked = pick_distractors(&pool, &accepted, 3, &mut rng).unwrap();
        let unique: HashSet<&String> = picked.iter().collect();
        assert_eq!(unique.len(), picked.len());
    }

    #[test]
    fn exhausted_pool_is_an_error() {
        let pool = vec![WordEntry::new("cat", vec!["kissa".into()], "")];
        let accepted = vec!["kissa".to_string()];
        let mut rng = StdRng::seed_from_u64(3);
        let err = pick_distractors(&pool, &accepted, 2, &mut rng).unwrap_err();
        match err {
            QuizError::InsufficientPool { needed, available } => {
                assert_eq!(needed, 2);
                assert_eq!(available, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn overlapping_translations_shrink_the_pool() {
        let pool = vec![
            WordEntry::new("dog", vec!["koira".into()], ""),
            WordEntry::new("hound", vec!["koira".into()], ""),
            WordEntry::new("cat", vec!["kissa".into()], ""),
        ];
        let accepted = vec!["kissa".to_string()];
        let mut rng = StdRng::seed_from_u64(4);
        // Only "koira" remains after dedup and exclusion.
        let err = pick_distractors(&pool, &accepted, 2, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientPool {
                needed: 2,
                available: 1
            }
        ));
    }
}
