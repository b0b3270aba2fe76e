//! Answer matching with tiered normalization.
//!
//! Strictness is a pure function of normalization depth: the basic tier
//! trims and lowercases, the lenient tier additionally folds ä/ö to a/o.
//! The first tier that matches wins, so an exact answer is never reported
//! as merely umlaut-lenient.

/// How an answer matched, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Matched after trimming and lowercasing.
    Exact,
    /// Matched only after folding ä→a and ö→o on both sides.
    UmlautLenient,
    /// Did not match any accepted term.
    NoMatch,
}

/// Result of matching one typed answer against the accepted terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub kind: MatchKind,
    pub correct: bool,
    /// The accepted term that matched, in its original spelling. Needed to
    /// report "also accepted" alternatives.
    pub matched: Option<String>,
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize_basic(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Basic normalization plus umlaut folding.
fn normalize_lenient(s: &str) -> String {
    normalize_basic(s)
        .chars()
        .map(|c| match c {
            'ä' => 'a',
            'ö' => 'o',
            other => other,
        })
        .collect()
}

/// Match a typed answer against the accepted terms for one question.
pub fn match_answer(input: &str, accepted: &[String], lenient: bool) -> MatchOutcome {
    let input_basic = normalize_basic(input);
    if let Some(term) = accepted
        .iter()
        .find(|term| normalize_basic(term) == input_basic)
    {
        return MatchOutcome {
            kind: MatchKind::Exact,
            correct: true,
            matched: Some(term.clone()),
        };
    }

    if lenient {
        let input_folded = normalize_lenient(input);
        if let Some(term) = accepted
            .iter()
            .find(|term| normalize_lenient(term) == input_folded)
        {
            return MatchOutcome {
                kind: MatchKind::UmlautLenient,
                correct: true,
                matched: Some(term.clone()),
            };
        }
    }

    MatchOutcome {
        kind: MatchKind::NoMatch,
        correct: false,
        matched: None,
    }
}
