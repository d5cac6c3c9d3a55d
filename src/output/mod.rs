//! Terminal output formatting
//!
//! Hangman art shared by both front ends and colored printing for the
//! simple mode.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_round, print_round_over, print_title};
