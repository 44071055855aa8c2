//! Word lists for Bulls & Cows
//!
//! Provides the embedded word list compiled into the binary plus `WordList`,
//! the shared read-only source the game samples secrets from and validates
//! guesses against.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// A fixed list of valid game words with a fast membership index
///
/// Loaded once and shared read-only; the ordered vector backs uniform
/// sampling and the hash set backs validation.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl WordList {
    /// Build a list from already-validated words
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let index = words.iter().map(|w| *w.chars()).collect();
        Self { words, index }
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Case-normalized membership test
    ///
    /// Returns false for any string that is not in the list, including
    /// strings of the wrong length or with non-letter characters.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        Word::new(candidate)
            .map(|w| self.index.contains(w.chars()))
            .unwrap_or(false)
    }

    /// Membership test for an already-constructed word
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Pick a word uniformly at random
    ///
    /// # Panics
    /// Panics if the list is empty. The embedded list never is; callers
    /// loading custom lists go through [`WordList::is_empty`] first.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words.choose(rng).expect("word list is empty")
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the words in list order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// The words as a slice, in list order
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_list() -> WordList {
        WordList::new(loader::words_from_slice(&["gold", "dust", "fern"]))
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // All words should be 4 letters, lowercase in the source file
        for &word in WORDS {
            assert_eq!(word.len(), 4, "Word '{word}' is not 4 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_is_not_empty() {
        let list = WordList::embedded();
        assert!(!list.is_empty());
        assert_eq!(list.len(), WORDS_COUNT);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let list = small_list();
        assert!(list.contains("gold"));
        assert!(list.contains("GOLD"));
        assert!(list.contains("GoLd"));
    }

    #[test]
    fn contains_rejects_unknown_and_malformed() {
        let list = small_list();
        assert!(!list.contains("zzzz")); // well-formed, not in list
        assert!(!list.contains("go")); // wrong length
        assert!(!list.contains("golden")); // wrong length
        assert!(!list.contains("g0ld")); // non-letter
        assert!(!list.contains("")); // empty
    }

    #[test]
    fn sample_stays_in_list() {
        let list = small_list();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let word = list.sample(&mut rng);
            assert!(list.contains_word(word));
        }
    }

    #[test]
    fn sample_is_deterministic_for_a_seed() {
        let list = WordList::embedded();
        let a = list.sample(&mut StdRng::seed_from_u64(42)).clone();
        let b = list.sample(&mut StdRng::seed_from_u64(42)).clone();
        assert_eq!(a, b);
    }

    #[test]
    fn sample_eventually_covers_a_small_list() {
        let list = small_list();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            seen.insert(list.sample(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), list.len());
    }
}
