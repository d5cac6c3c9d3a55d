//! Error types for the puzzle database and game session
//!
//! Every variant here is fatal: the game cannot continue without a readable
//! expression database. Benign conditions (repeated guesses, keys outside a
//! running round) are not errors and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while building the puzzle database or starting a round
#[derive(Debug, Error)]
pub enum HangmanError {
    /// An input source could not be opened.
    #[error("file {path} failed to open: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input source failed part way through reading.
    #[error("could not parse {origin}: {source}")]
    SourceRead {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The store could not grow to hold another expression.
    #[error("not enough memory to store expression {count}")]
    OutOfMemory { count: usize },

    /// Every expression has been played and retired.
    #[error("no expressions left to play ({total} loaded, all retired)")]
    PuzzlesExhausted { total: usize },
}

/// Result alias for puzzle and session operations
pub type Result<T> = std::result::Result<T, HangmanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_open_mentions_path() {
        let err = HangmanError::SourceOpen {
            path: PathBuf::from("words.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("file words.txt failed to open"));
    }

    #[test]
    fn exhausted_reports_total() {
        let err = HangmanError::PuzzlesExhausted { total: 3 };
        assert_eq!(
            err.to_string(),
            "no expressions left to play (3 loaded, all retired)"
        );
    }
}
