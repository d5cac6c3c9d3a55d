//! Puzzle database
//!
//! The expression store and the loaders that fill it from input files.

pub mod loader;
mod store;

pub use store::{INITIAL_CAPACITY, PuzzleStore};
