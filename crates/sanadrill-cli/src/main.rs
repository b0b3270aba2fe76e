//! sanadrill CLI — interactive Finnish vocabulary drill.

use std::path::PathBuf;
use std::process;

use clap::Parser;

mod app;
mod prompter;

#[derive(Parser)]
#[command(
    name = "sanadrill",
    version,
    about = "Interactive Finnish vocabulary drill"
)]
struct Cli {
    /// Path to the JSON word file
    word_file: PathBuf,

    /// How many words to quiz: "all" or a positive integer (default: all)
    count: Option<String>,

    /// Accept "a" for "ä" and "o" for "ö"
    #[arg(long)]
    lenient_umlauts: bool,

    /// Multiple-choice mode with distractor options
    #[arg(long)]
    match_game: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sanadrill_core=info".parse().unwrap())
                .add_directive("sanadrill_cli=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = app::execute(
        cli.word_file,
        cli.count,
        cli.lenient_umlauts,
        cli.match_game,
    );

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
