//! Interactive quiz session driver.
//!
//! The engine owns the per-question retry loop, the statistics counters,
//! and the missed-word collection. All terminal interaction goes through
//! the [`Prompter`] trait so sessions can be driven by a scripted prompter
//! in tests.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::distractor::{pick_distractors, DEFAULT_DISTRACTOR_COUNT};
use crate::error::QuizError;
use crate::matcher::{self, MatchKind};
use crate::model::{QuizOptions, WordEntry};
use crate::statistics::SessionStats;

/// Attempts allowed per question.
pub const MAX_ATTEMPTS: u32 = 2;

/// Synchronous terminal interaction.
pub trait Prompter {
    /// Display one line of output.
    fn show(&mut self, message: &str);

    /// Display a prompt and block for one line of input. End-of-input is
    /// reported as an empty string.
    fn ask(&mut self, prompt: &str) -> String;
}

/// What a completed session produced.
#[derive(Debug)]
pub struct QuizOutcome {
    pub stats: SessionStats,
    /// Entries not answered within [`MAX_ATTEMPTS`], in quiz order.
    pub missed: Vec<WordEntry>,
}

/// The quiz session driver.
///
/// Holds the full word pool (distractors are drawn pool-wide, not just from
/// the selected subset) and the run configuration.
pub struct QuizEngine<'a> {
    pool: &'a [WordEntry],
    options: QuizOptions,
}

impl<'a> QuizEngine<'a> {
    pub fn new(pool: &'a [WordEntry], options: QuizOptions) -> Self {
        Self { pool, options }
    }

    /// Run one session over the selected words.
    pub fn run(
        &self,
        selected: &[WordEntry],
        prompter: &mut dyn Prompter,
        rng: &mut impl Rng,
    ) -> Result<QuizOutcome, QuizError> {
        let mut stats = SessionStats::new(selected.len());
        let mut missed = Vec::new();

        let mode = if self.options.match_game {
            "match-game"
        } else {
            "typing"
        };
        prompter.show("");
        prompter.show(&format!(
            "Finnish Quiz: {} word(s) (mode: {mode})",
            stats.total
        ));
        prompter.show(&"-".repeat(50));

        for (idx, word) in selected.iter().enumerate() {
            prompter.show("");
            prompter.show(&format!(
                "[{}/{}] English: {}",
                idx + 1,
                stats.total,
                word.source_term
            ));

            let mut answered = false;
            for attempt in 1..=MAX_ATTEMPTS {
                let input = if self.options.match_game {
                    self.present_options(word, prompter, rng)?;
                    prompter.ask("Type the Finnish word: ")
                } else {
                    prompter.ask("Finnish: ")
                };

                let outcome = matcher::match_answer(
                    &input,
                    &word.target_terms,
                    self.options.lenient_umlauts,
                );

                if outcome.correct {
                    stats.record_correct(attempt);
                    match outcome.kind {
                        MatchKind::UmlautLenient => {
                            prompter.show("Hyvä! Muista: ä ja ö ovat tärkeitä.")
                        }
                        _ => prompter.show("Oikein!"),
                    }
                    self.reveal_extras(word, outcome.matched.as_deref(), prompter);
                    answered = true;
                    break;
                }

                tracing::debug!(word = %word.source_term, attempt, "incorrect answer");
                if attempt < MAX_ATTEMPTS {
                    prompter.show("Yritä uudelleen.");
                }
            }

            if !answered {
                stats.record_failure();
                let hint = if word.phonetic_hint.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", word.phonetic_hint)
                };
                prompter.show(&format!(
                    "Oikea sana: {}{hint}",
                    word.target_terms.join(" / ")
                ));
                missed.push(word.clone());
            }
        }

        Ok(QuizOutcome { stats, missed })
    }

    /// Show the multiple-choice option list: one randomly drawn accepted
    /// term plus distractors, shuffled. The options are advisory; the typed
    /// answer is still matched against the full accepted list.
    fn present_options(
        &self,
        word: &WordEntry,
        prompter: &mut dyn Prompter,
        rng: &mut impl Rng,
    ) -> Result<(), QuizError> {
        let shown_correct = word
            .target_terms
            .choose(rng)
            .cloned()
            .unwrap_or_default();
        let mut options = pick_distractors(
            self.pool,
            &word.target_terms,
            DEFAULT_DISTRACTOR_COUNT,
            rng,
        )?;
        options.push(shown_correct);
        options.shuffle(rng);

        prompter.show("Options:");
        for option in &options {
            prompter.show(&format!("  - {option}"));
        }
        Ok(())
    }

    /// After a correct answer, reveal the alternatives that were not typed
    /// and the phonetic hint, if any.
    fn reveal_extras(&self, word: &WordEntry, matched: Option<&str>, prompter: &mut dyn Prompter) {
        let others: Vec<&str> = word
            .target_terms
            .iter()
            .map(String::as_str)
            .filter(|term| Some(*term) != matched)
            .collect();
        if !others.is_empty() {
            prompter.show(&format!("   Also accepted: {}", others.join(" / ")));
        }
        if !word.phonetic_hint.is_empty() {
            prompter.show(&format!("   (phonetic: {})", word.phonetic_hint));
        }
    }
}
