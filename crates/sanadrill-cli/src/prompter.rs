//! Console implementation of the quiz engine's prompter.

use std::io::{self, BufRead, Write};

use sanadrill_core::engine::Prompter;

/// Terminal-backed prompter. End-of-input (or a read error) yields an
/// empty answer, which the engine treats as a consumed attempt.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn show(&mut self, message: &str) {
        println!("{message}");
    }

    fn ask(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim_end_matches(['\r', '\n']).to_string()
    }
}
