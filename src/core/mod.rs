//! Core domain types for hangman
//!
//! Pure puzzle logic with no terminal or I/O concerns: expression
//! normalization, the masked hidden string and guess classification.

mod expression;
mod guess;
mod hidden;

pub use expression::{Expression, SEPARATOR, fold_lower, fold_upper, is_printable, normalize};
pub use guess::{GuessOutcome, MistakeRecord, evaluate};
pub use hidden::{HiddenString, MASK, Slot};
