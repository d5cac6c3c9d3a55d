//! Hangman
//!
//! A terminal hangman game: expressions are loaded from text files, hidden
//! behind underscores and guessed one character at a time while the hangman
//! figure grows on every wrong guess.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::GuessOutcome;
//! use hangman::game::{GameSession, RoundState};
//! use hangman::puzzle::PuzzleStore;
//!
//! let mut store = PuzzleStore::new();
//! store.load("banana\n".as_bytes(), "inline").unwrap();
//!
//! let mut session = GameSession::seeded(store, 1);
//! session.new_game().unwrap();
//! assert_eq!(session.hidden().unwrap().to_string(), "BA_A_A");
//!
//! assert_eq!(session.guess('n'), Some(GuessOutcome::Hit));
//! assert_eq!(session.state(), Some(RoundState::Won));
//! ```

// Core domain types
pub mod core;

// Error kinds
pub mod error;

// Expression database
pub mod puzzle;

// Round state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
