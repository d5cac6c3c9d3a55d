//! Guess classification
//!
//! Resolves one guessed character against an expression. Only a hit changes
//! anything here (the hidden string); score, stage and the mistake record are
//! updated by the caller.

use super::expression::{Expression, fold_lower, fold_upper};
use super::hidden::HiddenString;
use std::fmt;

/// Outcome of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// The character was in the expression and is now revealed
    Hit,
    /// Already revealed or already recorded as a mistake
    Repeat,
    /// The character is not in the expression
    Miss,
}

/// Unique wrong guesses of the current round, in the order they were made
///
/// Guesses are kept lowercased and compared on that form; they are only
/// uppercased for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MistakeRecord {
    letters: Vec<char>,
}

impl MistakeRecord {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Check if a character was already recorded (case-insensitive)
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.letters.contains(&fold_lower(ch))
    }

    /// Record a wrong guess
    ///
    /// Returns false if it was already recorded.
    pub fn record(&mut self, ch: char) -> bool {
        let lower = fold_lower(ch);
        if self.letters.contains(&lower) {
            return false;
        }
        self.letters.push(lower);
        true
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for MistakeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", fold_upper(*letter))?;
        }
        Ok(())
    }
}

/// Classify a guess and reveal it on a hit
///
/// # Examples
/// ```
/// use hangman::core::{evaluate, Expression, GuessOutcome, HiddenString, MistakeRecord};
///
/// let expr = Expression::new("banana").unwrap();
/// let mut hidden = HiddenString::build(&expr);
/// let mistakes = MistakeRecord::new();
///
/// assert_eq!(evaluate(&expr, &mut hidden, &mistakes, 'N'), GuessOutcome::Hit);
/// assert_eq!(hidden.to_string(), "BANANA");
/// assert_eq!(evaluate(&expr, &mut hidden, &mistakes, 'n'), GuessOutcome::Repeat);
/// assert_eq!(evaluate(&expr, &mut hidden, &mistakes, 'z'), GuessOutcome::Miss);
/// ```
pub fn evaluate(
    expression: &Expression,
    hidden: &mut HiddenString,
    mistakes: &MistakeRecord,
    guess: char,
) -> GuessOutcome {
    let ch = fold_lower(guess);

    if !expression.contains(ch) {
        return if mistakes.contains(ch) {
            GuessOutcome::Repeat
        } else {
            GuessOutcome::Miss
        };
    }

    if hidden.is_revealed(expression, ch) {
        return GuessOutcome::Repeat;
    }

    hidden.reveal(expression, ch);
    GuessOutcome::Hit
}
