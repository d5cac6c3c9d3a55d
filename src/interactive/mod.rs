//! Interactive TUI interface
//!
//! Full-screen ratatui front end: main menu, instructions, game table and
//! end-of-round screens.

mod app;
mod rendering;

pub use app::{App, MenuItem, Message, MessageStyle, Screen, run_tui};
