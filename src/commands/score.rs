//! Pair scoring command
//!
//! Scores one guess against one secret, both taken from the word list.

use crate::core::{Score, Word};
use crate::wordlists::WordList;

/// Result of scoring a secret/guess pair
pub struct ScoreReport {
    pub secret: String,
    pub guess: String,
    pub score: Score,
}

/// Score a guess against a secret
///
/// Both words must be valid list words, the same rule the game itself
/// enforces on submissions.
///
/// # Errors
///
/// Returns an error if either word is malformed or absent from the list.
pub fn score_pair(words: &WordList, secret: &str, guess: &str) -> Result<ScoreReport, String> {
    let secret_word = list_word(words, secret)?;
    let guess_word = list_word(words, guess)?;

    let score = Score::calculate(&secret_word, &guess_word);

    Ok(ScoreReport {
        secret: secret_word.text().to_string(),
        guess: guess_word.text().to_string(),
        score,
    })
}

fn list_word(words: &WordList, raw: &str) -> Result<Word, String> {
    let word = Word::new(raw).map_err(|e| format!("Invalid word '{raw}': {e}"))?;

    if !words.contains_word(&word) {
        return Err(format!("Word '{}' not in word list", word.text()));
    }

    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn test_list() -> WordList {
        WordList::new(words_from_slice(&["gold", "dust", "logo"]))
    }

    #[test]
    fn scores_a_valid_pair() {
        let words = test_list();
        let report = score_pair(&words, "gold", "logo").unwrap();

        assert_eq!(report.secret, "GOLD");
        assert_eq!(report.guess, "LOGO");
        assert_eq!(report.score, Score { bulls: 1, cows: 2 });
    }

    #[test]
    fn identical_pair_is_a_win() {
        let words = test_list();
        let report = score_pair(&words, "dust", "DUST").unwrap();
        assert!(report.score.is_win());
    }

    #[test]
    fn rejects_malformed_words() {
        let words = test_list();
        assert!(score_pair(&words, "toolong", "gold").is_err());
        assert!(score_pair(&words, "gold", "g0ld").is_err());
    }

    #[test]
    fn rejects_words_outside_the_list() {
        let words = test_list();
        assert!(score_pair(&words, "zzzz", "gold").is_err());
        assert!(score_pair(&words, "gold", "zzzz").is_err());
    }
}
