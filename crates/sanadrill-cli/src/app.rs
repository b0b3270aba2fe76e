//! One quiz run: load, select, drive the session, report.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use sanadrill_core::engine::QuizEngine;
use sanadrill_core::model::QuizOptions;
use sanadrill_core::parser;
use sanadrill_core::report::{self, MissedReport};
use sanadrill_core::select::{choose_words, CountSpec};
use sanadrill_core::statistics::SessionStats;

use crate::prompter::ConsolePrompter;

pub fn execute(
    word_file: PathBuf,
    count: Option<String>,
    lenient_umlauts: bool,
    match_game: bool,
) -> Result<()> {
    let options = QuizOptions {
        lenient_umlauts,
        match_game,
        requested_count: count,
    };

    let spec = CountSpec::parse(options.requested_count.as_deref())?;
    let words = parser::load_words(&word_file)?;
    tracing::info!(words = words.len(), ?spec, "word file loaded");

    let mut rng = rand::rng();
    let selected = choose_words(&words, spec, &mut rng);

    let engine = QuizEngine::new(&words, options.clone());
    let mut prompter = ConsolePrompter;
    let outcome = engine.run(&selected, &mut prompter, &mut rng)?;

    print_summary(&outcome.stats);

    if outcome.missed.is_empty() {
        println!();
        println!("Ei virheitä, hienoa työtä!");
        return Ok(());
    }

    let missed_report = MissedReport::new(&word_file, &options, outcome.stats, outcome.missed);
    let out_path = report::missed_file_name(&word_file, chrono::Local::now());
    missed_report.save_json(&out_path)?;

    println!();
    println!("Missed words saved to: {}", out_path.display());
    Ok(())
}

fn print_summary(stats: &SessionStats) {
    let mut table = Table::new();
    table.set_header(vec!["Outcome", "Count", "Percent"]);
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(stats.total),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Correct 1st"),
        Cell::new(stats.correct_first_attempt),
        Cell::new(format!("{:.1}%", stats.first_attempt_pct())),
    ]);
    table.add_row(vec![
        Cell::new("Correct 2nd"),
        Cell::new(stats.correct_second_attempt),
        Cell::new(format!("{:.1}%", stats.second_attempt_pct())),
    ]);
    table.add_row(vec![
        Cell::new("Failed"),
        Cell::new(stats.failed),
        Cell::new(format!("{:.1}%", stats.failed_pct())),
    ]);

    println!();
    println!("{}", "-".repeat(50));
    println!("Results");
    println!("{table}");
}
