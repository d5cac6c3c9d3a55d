//! Colored printing for the simple line mode

use super::formatters::{
    LOSE_BANNER, TITLE_BANNER, WIN_BANNER, create_progress_bar, gallows, spaced,
};
use crate::core::GuessOutcome;
use crate::game::{GameSession, MAX_STAGE};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Print the title banner and the controls
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_title<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for line in TITLE_BANNER {
        writeln!(out, "  {}", line.yellow())?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Type letters and press Enter to guess. Commands: {} new game, {} quit.",
        ":new".bright_cyan(),
        ":quit".bright_cyan()
    )?;
    writeln!(out)
}

/// Print the current round: statistics, gallows, hidden string and mistakes
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round<R: Rng, W: Write>(out: &mut W, session: &GameSession<R>) -> io::Result<()> {
    let store = session.store();
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Score: {}   Expressions: {}   Characters: {}",
        session.score().to_string().bright_yellow().bold(),
        store.active_expressions(),
        store.active_chars()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for line in gallows(session.stage()) {
        writeln!(out, "{}", line.yellow())?;
    }

    writeln!(
        out,
        "\n  Stage:    [{}] {}/{MAX_STAGE}",
        create_progress_bar(usize::from(session.stage()), usize::from(MAX_STAGE), 12).red(),
        session.stage()
    )?;
    if let Some(hidden) = session.hidden() {
        writeln!(
            out,
            "  Puzzle:   {}",
            spaced(&hidden.to_string()).bright_white().bold()
        )?;
    }
    if let Some(mistakes) = session.mistakes() {
        writeln!(out, "  Mistakes: {}", mistakes.to_string().red())?;
    }
    writeln!(out)
}

/// Print a one-line note about a guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(
    out: &mut W,
    guess: char,
    outcome: GuessOutcome,
) -> io::Result<()> {
    let upper = guess.to_uppercase();
    let note = match outcome {
        GuessOutcome::Hit => format!("✓ {upper} is in the puzzle").green(),
        GuessOutcome::Miss => format!("✗ No {upper} here").red(),
        GuessOutcome::Repeat => format!("· {upper} already tried").bright_black(),
    };
    writeln!(out, "{note}")
}

/// Print the end-of-round banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_over<R: Rng, W: Write>(
    out: &mut W,
    session: &GameSession<R>,
    won: bool,
) -> io::Result<()> {
    writeln!(out)?;
    if won {
        for line in WIN_BANNER {
            writeln!(out, "  {}", line.bright_green().bold())?;
        }
    } else {
        for line in LOSE_BANNER {
            writeln!(out, "  {}", line.red().bold())?;
        }
        if let Some(expression) = session.expression() {
            writeln!(
                out,
                "\n  The answer was: {}",
                expression.revealed().bright_white().bold()
            )?;
        }
    }
    writeln!(
        out,
        "\n  Score: {}",
        session.score().to_string().bright_yellow().bold()
    )?;
    writeln!(out)
}
