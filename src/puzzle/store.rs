//! Expression database
//!
//! Holds every expression loaded at startup. Played expressions are retired
//! rather than removed: their slot stays in place, but they no longer count
//! towards the totals and are never selected again.

use crate::core::Expression;
use crate::error::{HangmanError, Result};
use rand::Rng;
use std::io::BufRead;
use tracing::{debug, trace};

/// Number of slots reserved before the first expression is stored
pub const INITIAL_CAPACITY: usize = 20;

#[derive(Debug, Clone)]
struct Entry {
    expression: Expression,
    active: bool,
}

/// Growable collection of puzzle expressions with soft deletion
#[derive(Debug, Clone)]
pub struct PuzzleStore {
    entries: Vec<Entry>,
    /// Slots reserved so far; doubles every time it fills up
    capacity: usize,
    active_expressions: usize,
    active_chars: usize,
}

impl Default for PuzzleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
            active_expressions: 0,
            active_chars: 0,
        }
    }

    /// Append an expression, doubling the capacity when full
    ///
    /// Returns the index of the new entry.
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::OutOfMemory` if the store cannot grow.
    pub fn push(&mut self, expression: Expression) -> Result<usize> {
        if self.entries.len() == self.capacity {
            self.grow(self.capacity)?;
        }

        self.active_expressions += 1;
        self.active_chars += expression.len();
        self.entries.push(Entry {
            expression,
            active: true,
        });
        Ok(self.entries.len() - 1)
    }

    /// Reserve `additional` more slots
    fn grow(&mut self, additional: usize) -> Result<()> {
        let out_of_memory = |count| HangmanError::OutOfMemory { count };
        let count = self.entries.len() + 1;

        let target = self
            .capacity
            .checked_add(additional)
            .ok_or_else(|| out_of_memory(count))?;
        self.entries
            .try_reserve_exact(target - self.entries.len())
            .map_err(|_| out_of_memory(count))?;

        self.capacity = target;
        trace!(capacity = target, "grew puzzle store");
        Ok(())
    }

    /// Read a text source line by line, storing one expression per line
    ///
    /// Lines are normalized first; lines with nothing left are skipped.
    /// Bytes that are not valid UTF-8 are dropped like any other
    /// non-printable character. Returns the number of expressions added.
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::SourceRead` if reading fails part way through,
    /// or `HangmanError::OutOfMemory` if the store cannot grow.
    ///
    /// # Examples
    /// ```
    /// use hangman::puzzle::PuzzleStore;
    ///
    /// let mut store = PuzzleStore::new();
    /// let added = store.load("Banana\n\nHello  World\n".as_bytes(), "inline").unwrap();
    /// assert_eq!(added, 2);
    /// assert_eq!(store.active_chars(), 6 + 11);
    /// ```
    pub fn load<R: BufRead>(&mut self, mut reader: R, origin: &str) -> Result<usize> {
        let mut buffer = Vec::new();
        let mut added = 0;

        loop {
            buffer.clear();
            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(|source| HangmanError::SourceRead {
                    origin: origin.to_string(),
                    source,
                })?;
            if read == 0 {
                break;
            }

            if let Some(expression) = Expression::new(&String::from_utf8_lossy(&buffer)) {
                self.push(expression)?;
                added += 1;
            }
        }

        debug!(origin, added, total = self.entries.len(), "loaded source");
        Ok(added)
    }

    /// Pick a uniformly random active expression
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::PuzzlesExhausted` if every entry is retired
    /// (or nothing was loaded).
    pub fn select_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        if self.active_expressions == 0 {
            return Err(HangmanError::PuzzlesExhausted {
                total: self.entries.len(),
            });
        }

        let nth = rng.random_range(0..self.active_expressions);
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.active)
            .nth(nth)
            .map(|(index, _)| index)
            .ok_or(HangmanError::PuzzlesExhausted {
                total: self.entries.len(),
            })
    }

    /// Mark an expression as played
    ///
    /// Returns false if the index is out of range or already retired.
    pub fn retire(&mut self, index: usize) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) if entry.active => {
                entry.active = false;
                self.active_expressions -= 1;
                self.active_chars -= entry.expression.len();
                true
            }
            _ => false,
        }
    }

    /// Get an expression by index, retired or not
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Expression> {
        self.entries.get(index).map(|entry| &entry.expression)
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|entry| entry.active)
    }

    /// Number of stored entries, retired ones included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slots allocated for entries
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Expressions that can still be played
    #[inline]
    #[must_use]
    pub const fn active_expressions(&self) -> usize {
        self.active_expressions
    }

    /// Characters across all expressions that can still be played
    #[inline]
    #[must_use]
    pub const fn active_chars(&self) -> usize {
        self.active_chars
    }
}
