//! Round state machine
//!
//! A `Game` owns one round: the sampled secret, the guess history, and the
//! win/loss status. Validation and scoring run on submission; nothing about
//! the round changes on a rejected guess.

use crate::core::{Score, WORD_LENGTH, Word};
use crate::wordlists::WordList;
use rand::Rng;
use std::fmt;

/// Guesses allowed per round
pub const MAX_GUESSES: usize = 7;

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether the round has reached a terminal state
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess together with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub score: Score,
}

/// Error type for rejected guess submissions
///
/// Every variant is recoverable; the caller reports it and the round state
/// is exactly what it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength(usize),
    UnknownWord(String),
    GameAlreadyOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the word list"),
            Self::GameAlreadyOver => write!(f, "The round is over; start a new game"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One round of Bulls & Cows
///
/// Borrows the shared word list and owns an injected rng, so tests can pin
/// the secret with a seeded generator or a single-word list.
pub struct Game<'a, R: Rng> {
    words: &'a WordList,
    rng: R,
    secret: Word,
    history: Vec<Guess>,
    status: GameStatus,
}

impl<'a, R: Rng> Game<'a, R> {
    /// Start a round with a freshly sampled secret
    ///
    /// # Panics
    /// Panics if `words` is empty (see [`WordList::sample`]).
    pub fn new(words: &'a WordList, mut rng: R) -> Self {
        let secret = words.sample(&mut rng).clone();
        Self {
            words,
            rng,
            secret,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Submit a raw guess string
    ///
    /// The input is trimmed and uppercased, then validated: the round must be
    /// in progress, the guess must be exactly 4 characters, and it must be a
    /// list word. A valid guess is scored against the secret, appended to the
    /// history, and drives the status transition: four bulls win immediately;
    /// the seventh miss loses the round.
    ///
    /// # Errors
    /// Returns `GuessError` if the guess is rejected. The history and status
    /// are left untouched in that case.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Guess, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameAlreadyOver);
        }

        let normalized = raw.trim().to_uppercase();
        let len = normalized.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::InvalidLength(len));
        }

        let word = match Word::new(&normalized) {
            Ok(w) if self.words.contains_word(&w) => w,
            _ => return Err(GuessError::UnknownWord(normalized)),
        };

        let score = Score::calculate(&self.secret, &word);
        let guess = Guess { word, score };
        self.history.push(guess.clone());

        if score.is_win() {
            self.status = GameStatus::Won;
        } else if self.history.len() == MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        Ok(guess)
    }

    /// Discard the round and start over with a fresh secret
    ///
    /// Total: callable from any state, including mid-round.
    pub fn reset(&mut self) {
        self.secret = self.words.sample(&mut self.rng).clone();
        self.history.clear();
        self.status = GameStatus::InProgress;
    }

    /// The secret word of the current round
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Guesses submitted so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Current round status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Guesses left before the round is lost
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TEST_WORDS: &[&str] = &[
        "gold", "dust", "fern", "wasp", "mint", "clay", "fork", "lamp", "snow",
    ];

    fn test_list() -> WordList {
        WordList::new(words_from_slice(TEST_WORDS))
    }

    fn new_game(words: &WordList) -> Game<'_, StdRng> {
        Game::new(words, StdRng::seed_from_u64(11))
    }

    /// Pick `n` list words different from the game's secret
    fn losing_guesses(game: &Game<'_, StdRng>, n: usize) -> Vec<String> {
        TEST_WORDS
            .iter()
            .map(|w| w.to_uppercase())
            .filter(|w| w != game.secret().text())
            .take(n)
            .collect()
    }

    #[test]
    fn new_game_starts_in_progress() {
        let words = test_list();
        let game = new_game(&words);

        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.remaining_guesses(), MAX_GUESSES);
        assert!(words.contains_word(game.secret()));
    }

    #[test]
    fn single_word_list_pins_the_secret() {
        let words = WordList::new(words_from_slice(&["gold"]));
        let game = new_game(&words);
        assert_eq!(game.secret().text(), "GOLD");
    }

    #[test]
    fn guessing_the_secret_wins_immediately() {
        let words = test_list();
        let mut game = new_game(&words);
        let secret = game.secret().text().to_string();

        let guess = game.submit_guess(&secret).unwrap();
        assert_eq!(guess.score, Score { bulls: 4, cows: 0 });
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn win_accepts_unnormalized_input() {
        let words = test_list();
        let mut game = new_game(&words);
        let secret = format!("  {}  ", game.secret().text().to_lowercase());

        let guess = game.submit_guess(&secret).unwrap();
        assert!(guess.score.is_win());
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn wrong_guess_keeps_round_in_progress() {
        let words = test_list();
        let mut game = new_game(&words);
        let miss = &losing_guesses(&game, 1)[0];

        let guess = game.submit_guess(miss).unwrap();
        assert!(!guess.score.is_win());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.remaining_guesses(), MAX_GUESSES - 1);
    }

    #[test]
    fn seventh_miss_loses_the_round() {
        let words = test_list();
        let mut game = new_game(&words);

        // Cycle non-winning list words for all seven turns
        let misses = losing_guesses(&game, 4);
        for turn in 0..MAX_GUESSES {
            assert_eq!(game.status(), GameStatus::InProgress);
            game.submit_guess(&misses[turn % misses.len()]).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.history().len(), MAX_GUESSES);
        assert_eq!(game.remaining_guesses(), 0);
    }

    #[test]
    fn eighth_guess_fails_after_loss() {
        let words = test_list();
        let mut game = new_game(&words);

        let misses = losing_guesses(&game, 4);
        for turn in 0..MAX_GUESSES {
            game.submit_guess(&misses[turn % misses.len()]).unwrap();
        }

        let result = game.submit_guess(&misses[0]);
        assert_eq!(result, Err(GuessError::GameAlreadyOver));
        assert_eq!(game.history().len(), MAX_GUESSES);
    }

    #[test]
    fn guess_after_win_fails() {
        let words = test_list();
        let mut game = new_game(&words);
        let secret = game.secret().text().to_string();

        game.submit_guess(&secret).unwrap();
        let result = game.submit_guess(&secret);
        assert_eq!(result, Err(GuessError::GameAlreadyOver));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn short_guess_is_rejected_without_mutation() {
        let words = test_list();
        let mut game = new_game(&words);

        let result = game.submit_guess("ab");
        assert_eq!(result, Err(GuessError::InvalidLength(2)));
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn long_guess_is_rejected_without_mutation() {
        let words = test_list();
        let mut game = new_game(&words);

        let result = game.submit_guess("golden");
        assert_eq!(result, Err(GuessError::InvalidLength(6)));
        assert!(game.history().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected_without_mutation() {
        let words = test_list();
        let mut game = new_game(&words);

        let result = game.submit_guess("zzzz");
        assert_eq!(result, Err(GuessError::UnknownWord("ZZZZ".to_string())));
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn four_char_non_letter_guess_is_unknown() {
        let words = test_list();
        let mut game = new_game(&words);

        let result = game.submit_guess("g0ld");
        assert_eq!(result, Err(GuessError::UnknownWord("G0LD".to_string())));
        assert!(game.history().is_empty());
    }

    #[test]
    fn reset_restores_a_fresh_round_from_any_state() {
        let words = test_list();
        let mut game = new_game(&words);

        // Mid-round
        let miss = &losing_guesses(&game, 1)[0];
        game.submit_guess(miss).unwrap();
        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert!(words.contains_word(game.secret()));

        // After a win
        let secret = game.secret().text().to_string();
        game.submit_guess(&secret).unwrap();
        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());

        // Twice in a row
        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn history_records_guesses_in_order() {
        let words = test_list();
        let mut game = new_game(&words);
        let misses = losing_guesses(&game, 3);

        for miss in &misses {
            game.submit_guess(miss).unwrap();
        }

        let recorded: Vec<&str> = game.history().iter().map(|g| g.word.text()).collect();
        assert_eq!(recorded, misses.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let words = test_list();
        let a = Game::new(&words, StdRng::seed_from_u64(99));
        let b = Game::new(&words, StdRng::seed_from_u64(99));
        assert_eq!(a.secret(), b.secret());
    }
}
