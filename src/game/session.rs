//! Game session and round state machine
//!
//! A session owns the expression database, the random source and the current
//! round. Rounds move from `AwaitingGuess` to one of the terminal states
//! `Won` or `Lost`; the score carries over from round to round until a new
//! game is started.

use crate::core::{
    Expression, GuessOutcome, HiddenString, MistakeRecord, evaluate, is_printable,
};
use crate::error::Result;
use crate::puzzle::PuzzleStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Wrong guesses that complete the hangman
pub const MAX_STAGE: u8 = 6;

/// State of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    AwaitingGuess,
    Won,
    Lost,
}

impl RoundState {
    /// Whether the round is over
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone)]
struct Round {
    index: usize,
    hidden: HiddenString,
    mistakes: MistakeRecord,
    stage: u8,
    state: RoundState,
}

/// A single player's chain of rounds
pub struct GameSession<R = StdRng> {
    store: PuzzleStore,
    rng: R,
    round: Option<Round>,
    score: i64,
}

impl GameSession<StdRng> {
    /// Create a session seeded from the operating system
    #[must_use]
    pub fn new(store: PuzzleStore) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }

    /// Create a session with reproducible expression selection
    #[must_use]
    pub fn seeded(store: PuzzleStore, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    #[must_use]
    pub fn with_rng(store: PuzzleStore, rng: R) -> Self {
        Self {
            store,
            rng,
            round: None,
            score: 0,
        }
    }

    /// Start a round with a fresh expression
    ///
    /// The previously played expression (if any) is retired first. Stage and
    /// mistakes always reset; the score only when `reset_score` is set.
    /// An expression that is fully revealed by its opening mask starts the
    /// round already won.
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::PuzzlesExhausted` when no active expression is
    /// left to play.
    pub fn start(&mut self, reset_score: bool) -> Result<RoundState> {
        if let Some(previous) = self.round.take() {
            self.store.retire(previous.index);
        }
        if reset_score {
            self.score = 0;
        }

        let index = self.store.select_random(&mut self.rng)?;
        let hidden = self
            .store
            .get(index)
            .map(HiddenString::build)
            .expect("selected index is always stored");

        let state = if hidden.is_solved() {
            RoundState::Won
        } else {
            RoundState::AwaitingGuess
        };

        info!(
            index,
            hidden = %hidden,
            remaining = self.store.active_expressions(),
            score = self.score,
            "round started"
        );

        self.round = Some(Round {
            index,
            hidden,
            mistakes: MistakeRecord::new(),
            stage: 0,
            state,
        });
        Ok(state)
    }

    /// Start over from the main menu: new round, score back to zero
    ///
    /// # Errors
    ///
    /// See [`GameSession::start`].
    pub fn new_game(&mut self) -> Result<RoundState> {
        self.start(true)
    }

    /// Continue after a round: new round, score kept
    ///
    /// # Errors
    ///
    /// See [`GameSession::start`].
    pub fn next_round(&mut self) -> Result<RoundState> {
        self.start(false)
    }

    /// Apply one guessed character to the current round
    ///
    /// Returns `None` (and changes nothing) when no round is awaiting a guess
    /// or the character is not printable.
    pub fn guess(&mut self, guess: char) -> Option<GuessOutcome> {
        if !is_printable(guess) {
            return None;
        }
        let round = self
            .round
            .as_mut()
            .filter(|round| round.state == RoundState::AwaitingGuess)?;
        let expression = self.store.get(round.index)?;

        let outcome = evaluate(expression, &mut round.hidden, &round.mistakes, guess);
        let ordinal = i64::from(u32::from(guess));

        match outcome {
            GuessOutcome::Hit => {
                self.score += ordinal;
                if round.hidden.is_solved() {
                    round.state = RoundState::Won;
                    info!(score = self.score, "round won");
                }
            }
            GuessOutcome::Miss => {
                self.score -= ordinal;
                round.stage += 1;
                round.mistakes.record(guess);
                if round.stage >= MAX_STAGE {
                    round.state = RoundState::Lost;
                    info!(score = self.score, answer = %expression, "round lost");
                }
            }
            GuessOutcome::Repeat => {}
        }

        debug!(%guess, ?outcome, score = self.score, stage = round.stage, "guess applied");
        Some(outcome)
    }

    /// Zero the score without touching the round
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Whether there is an unfinished round to go back to
    #[must_use]
    pub fn can_resume(&self) -> bool {
        self.state() == Some(RoundState::AwaitingGuess)
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Wrong guesses in the current round (0 before the first round)
    #[must_use]
    pub fn stage(&self) -> u8 {
        self.round.as_ref().map_or(0, |round| round.stage)
    }

    #[must_use]
    pub fn state(&self) -> Option<RoundState> {
        self.round.as_ref().map(|round| round.state)
    }

    #[must_use]
    pub fn hidden(&self) -> Option<&HiddenString> {
        self.round.as_ref().map(|round| &round.hidden)
    }

    #[must_use]
    pub fn mistakes(&self) -> Option<&MistakeRecord> {
        self.round.as_ref().map(|round| &round.mistakes)
    }

    /// Index of the expression being played
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.round.as_ref().map(|round| round.index)
    }

    /// The expression being played
    #[must_use]
    pub fn expression(&self) -> Option<&Expression> {
        self.selected().and_then(|index| self.store.get(index))
    }

    #[inline]
    #[must_use]
    pub const fn store(&self) -> &PuzzleStore {
        &self.store
    }
}
