//! Hangman - CLI
//!
//! Terminal hangman with a full-screen TUI and a simple line mode.

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use hangman::{
    commands::run_simple,
    game::GameSession,
    interactive::{App, run_tui},
    logging::init_logging,
    puzzle::loader::load_files,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden expression before the hangman is complete",
    version,
    author
)]
struct Cli {
    /// Text files with one word or expression per line
    #[arg(required = true, value_name = "SOURCE")]
    sources: Vec<PathBuf>,

    /// Interface: tui (default, full screen) or simple (line based)
    #[arg(short, long, value_enum, default_value_t = Mode::Tui)]
    mode: Mode,

    /// Seed for expression selection, for reproducible games
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Tui,
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    // Build the expression database from every source
    let store = load_files(&cli.sources)?;
    if store.is_empty() {
        bail!(
            "no expressions found in {} source file(s)",
            cli.sources.len()
        );
    }

    let mut session = match cli.seed {
        Some(seed) => GameSession::seeded(store, seed),
        None => GameSession::new(store),
    };

    match cli.mode {
        Mode::Tui => run_tui(App::new(session)),
        Mode::Simple => run_simple(&mut session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sources_are_required() {
        assert!(Cli::try_parse_from(["hangman"]).is_err());
    }

    #[test]
    fn parses_mode_and_seed() {
        let cli =
            Cli::try_parse_from(["hangman", "-m", "simple", "--seed", "7", "a.txt", "b.txt"])
                .unwrap();
        assert_eq!(cli.mode, Mode::Simple);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.sources.len(), 2);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn defaults_to_tui() {
        let cli = Cli::try_parse_from(["hangman", "words.txt"]).unwrap();
        assert_eq!(cli.mode, Mode::Tui);
    }
}
