//! Game engine
//!
//! The round state machine built on the core scoring function.

mod engine;

pub use engine::{Game, GameStatus, Guess, GuessError, MAX_GUESSES};
