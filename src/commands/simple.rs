//! Simple interactive CLI mode
//!
//! Line-based hangman without the full-screen TUI

use crate::game::{GameSession, RoundState};
use crate::output::{print_outcome, print_round, print_round_over, print_title};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A line entered while a round is running
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    /// Characters to guess, in order
    Guesses(Vec<char>),
}

impl Command {
    /// Parse an input line
    ///
    /// `:quit`/`:q` and `:new`/`:n` are commands; anything else is a run of
    /// guesses with whitespace skipped.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":new" | ":n" => Self::NewGame,
            _ => Self::Guesses(line.chars().filter(|c| !c.is_whitespace()).collect()),
        }
    }
}

/// Run the simple mode on stdin and stdout
///
/// # Errors
///
/// Returns an error on I/O failure or when the expression database runs out.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(session, stdin.lock(), stdout.lock())
}

/// Play rounds reading lines from `input` until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or when the expression database runs out.
pub fn play<R: Rng, I: BufRead, W: Write>(
    session: &mut GameSession<R>,
    mut input: I,
    mut out: W,
) -> Result<()> {
    print_title(&mut out)?;
    session.new_game()?;

    loop {
        match session.state() {
            Some(RoundState::AwaitingGuess) | None => {
                print_round(&mut out, session)?;
                let Some(line) = prompt(&mut input, &mut out, "Guess")? else {
                    return Ok(());
                };

                match Command::parse(&line) {
                    Command::Quit => return farewell(&mut out),
                    Command::NewGame => {
                        session.new_game()?;
                    }
                    Command::Guesses(chars) => {
                        for ch in chars {
                            if let Some(outcome) = session.guess(ch) {
                                print_outcome(&mut out, ch, outcome)?;
                            }
                            if session.state().is_some_and(RoundState::is_finished) {
                                break;
                            }
                        }
                    }
                }
            }
            Some(state) => {
                let won = state == RoundState::Won;
                print_round(&mut out, session)?;
                print_round_over(&mut out, session, won)?;

                let question = if won {
                    "Continue? (n = next expression, q = quit)"
                } else {
                    "Try again? (n = new game, q = quit)"
                };
                let Some(answer) = prompt(&mut input, &mut out, question)? else {
                    return Ok(());
                };

                match answer.trim().to_lowercase().as_str() {
                    "n" | "y" | "yes" => {
                        if won {
                            session.next_round()?;
                        } else {
                            session.new_game()?;
                        }
                    }
                    "q" | "no" | ":quit" => return farewell(&mut out),
                    _ => {}
                }
            }
        }
    }
}

/// Read one line; `None` once input is exhausted
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nThanks for playing!\n")?;
    Ok(())
}
