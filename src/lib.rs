//! Bulls & Cows
//!
//! A terminal word game: guess the secret 4-letter word within 7 tries.
//! Bulls are letters in the right position, cows are letters in the wrong
//! position, and every letter counts at most once.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Score, Word};
//!
//! // Score a guess against a secret
//! let secret = Word::new("gold").unwrap();
//! let guess = Word::new("dolg").unwrap();
//!
//! let score = Score::calculate(&secret, &guess);
//! assert_eq!((score.bulls, score.cows), (0, 4));
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
