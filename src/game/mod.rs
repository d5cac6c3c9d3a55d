//! Game session orchestration
//!
//! Ties the expression database, hidden string and guess evaluation together
//! into rounds with a running score.

mod session;

pub use session::{GameSession, MAX_STAGE, RoundState};
