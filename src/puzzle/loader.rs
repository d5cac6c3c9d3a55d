//! Expression source loading
//!
//! Opens the input files given at startup and feeds them to a `PuzzleStore`.

use super::PuzzleStore;
use crate::error::{HangmanError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Load one file into an existing store
///
/// Returns the number of expressions added.
///
/// # Errors
///
/// Returns `HangmanError::SourceOpen` if the file cannot be opened, or any
/// error from `PuzzleStore::load` while reading it.
pub fn load_file<P: AsRef<Path>>(store: &mut PuzzleStore, path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| HangmanError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;

    store.load(BufReader::new(file), &path.display().to_string())
}

/// Build the expression database from every source, in order
///
/// # Errors
///
/// Fails on the first source that cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use hangman::puzzle::loader::load_files;
///
/// let store = load_files(&["data/proverbs.txt", "data/animals.txt"]).unwrap();
/// println!("Loaded {} expressions", store.active_expressions());
/// ```
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<PuzzleStore> {
    let mut store = PuzzleStore::new();
    for path in paths {
        load_file(&mut store, path)?;
    }

    info!(
        sources = paths.len(),
        expressions = store.active_expressions(),
        chars = store.active_chars(),
        "expression database ready"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_source(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hangman-{}-{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_files_reads_all_sources_in_order() {
        let first = temp_source("first.txt", "Apple\nBanana\n");
        let second = temp_source("second.txt", "cherry  pie\n");

        let store = load_files(&[&first, &second]).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap().text(), "apple");
        assert_eq!(store.get(2).unwrap().text(), "cherry pie");

        fs::remove_file(first).unwrap();
        fs::remove_file(second).unwrap();
    }

    #[test]
    fn missing_file_is_source_open_error() {
        let missing = std::env::temp_dir().join("hangman-definitely-missing.txt");
        let err = load_files(&[&missing]).unwrap_err();
        assert!(matches!(err, HangmanError::SourceOpen { ref path, .. } if *path == missing));
    }

    #[test]
    fn empty_file_loads_nothing() {
        let empty = temp_source("empty.txt", "");
        let mut store = PuzzleStore::new();
        assert_eq!(load_file(&mut store, &empty).unwrap(), 0);
        assert!(store.is_empty());
        fs::remove_file(empty).unwrap();
    }
}
