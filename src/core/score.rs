//! Guess scoring
//!
//! A score counts bulls (right letter, right position) and cows (right letter,
//! wrong position). Each secret position and each guess position contributes to
//! at most one of the two counts.

use super::word::{WORD_LENGTH, Word};

// Sentinels outside the uppercase alphabet. A consumed position can never
// match again in the cow pass.
const SECRET_CONSUMED: u8 = b'*';
const GUESS_CONSUMED: u8 = b'#';

/// Bulls-and-cows tally for a single guess
///
/// Invariant: `bulls + cows <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub bulls: u8,
    pub cows: u8,
}

impl Score {
    /// A winning score (all four positions exact)
    pub const WIN: Self = Self { bulls: 4, cows: 0 };

    /// Calculate the score when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count positional matches (bulls) and overwrite both
    ///    positions with sentinels so they are out of play.
    /// 2. Second pass: for each remaining guess letter in order, scan the
    ///    remaining secret letters left to right; the first equal one is
    ///    consumed and counted as a cow.
    ///
    /// With repeated letters the scan order is observable: a guess letter
    /// always takes the leftmost surviving occurrence in the secret.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Score, Word};
    ///
    /// let secret = Word::new("gold").unwrap();
    /// let guess = Word::new("dolg").unwrap();
    /// let score = Score::calculate(&secret, &guess);
    ///
    /// // Every letter present, every letter displaced
    /// assert_eq!(score, Score { bulls: 0, cows: 4 });
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        let mut secret_chars = *secret.chars();
        let mut guess_chars = *guess.chars();
        let mut bulls = 0u8;
        let mut cows = 0u8;

        // First pass: bulls (exact position matches)
        for i in 0..WORD_LENGTH {
            if guess_chars[i] == secret_chars[i] {
                bulls += 1;
                secret_chars[i] = SECRET_CONSUMED;
                guess_chars[i] = GUESS_CONSUMED;
            }
        }

        // Second pass: cows (displaced letters, leftmost surviving occurrence)
        for &g in &guess_chars {
            if g == GUESS_CONSUMED {
                continue;
            }
            if let Some(hit) = secret_chars.iter().position(|&c| c == g) {
                cows += 1;
                secret_chars[hit] = SECRET_CONSUMED;
            }
        }

        Self { bulls, cows }
    }

    /// Check if this score wins the round (all four letters placed)
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.bulls == WORD_LENGTH as u8
    }

    /// Total number of matched letters (`bulls + cows`)
    #[inline]
    #[must_use]
    pub const fn total_matches(self) -> u8 {
        self.bulls + self.cows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(secret: &str, guess: &str) -> Score {
        Score::calculate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn exact_match_is_four_bulls() {
        assert_eq!(score("GOLD", "GOLD"), Score { bulls: 4, cows: 0 });
        assert!(score("GOLD", "GOLD").is_win());
    }

    #[test]
    fn full_anagram_is_four_cows() {
        assert_eq!(score("GOLD", "DOLG"), Score { bulls: 0, cows: 4 });
    }

    #[test]
    fn disjoint_words_score_nothing() {
        assert_eq!(score("GOLD", "FERN"), Score { bulls: 0, cows: 0 });
    }

    #[test]
    fn partial_overlap() {
        // G and O placed, L and D absent from DUST... D is present, displaced
        assert_eq!(score("GOLD", "DUST"), Score { bulls: 0, cows: 1 });
        assert_eq!(score("GOLD", "GOAT"), Score { bulls: 2, cows: 0 });
        assert_eq!(score("GOLD", "LOGO"), Score { bulls: 1, cows: 2 });
    }

    #[test]
    fn repeated_letters_regression() {
        // AABB vs ABBA: positions 0 and 2 are exact; the surviving B (guess
        // position 1) takes secret position 3, the surviving A (guess
        // position 3) takes secret position 1.
        assert_eq!(score("AABB", "ABBA"), Score { bulls: 2, cows: 2 });
    }

    #[test]
    fn repeated_letters_consume_at_most_once() {
        // Secret has one A left after the bull; the second guess A finds nothing
        assert_eq!(score("ABCD", "AAXY"), Score { bulls: 1, cows: 0 });
        // Guess has one B; both secret Bs cannot both be consumed
        assert_eq!(score("ABBC", "BXYZ"), Score { bulls: 0, cows: 1 });
    }

    #[test]
    fn bulls_are_symmetric() {
        let pairs = [
            ("GOLD", "DOLG"),
            ("AABB", "ABBA"),
            ("AABB", "ABCD"),
            ("WXYZ", "WXZY"),
        ];
        for (s, g) in pairs {
            assert_eq!(score(s, g).bulls, score(g, s).bulls, "{s} vs {g}");
        }
    }

    #[test]
    fn repeated_letter_multiplicity_both_directions() {
        // Multiplicities differ between the two words; the values below are
        // what the two-pass consumption produces, derived by hand: one bull
        // at position 0, then the lone surviving B cross-matches.
        assert_eq!(score("AABB", "ABCD"), Score { bulls: 1, cows: 1 });
        assert_eq!(score("ABCD", "AABB"), Score { bulls: 1, cows: 1 });
    }

    #[test]
    fn bulls_plus_cows_never_exceed_length() {
        let words = ["AABB", "ABBA", "ABCD", "AAAA", "BBAA", "GOLD", "DOLG"];
        for s in words {
            for g in words {
                let sc = score(s, g);
                assert!(
                    sc.total_matches() <= WORD_LENGTH as u8,
                    "{s} vs {g} gave {sc:?}"
                );
            }
        }
    }

    #[test]
    fn four_bulls_iff_equal() {
        let words = ["AABB", "ABBA", "ABCD", "AAAA", "GOLD"];
        for s in words {
            for g in words {
                let sc = score(s, g);
                assert_eq!(sc.is_win(), s == g, "{s} vs {g}");
                if sc.is_win() {
                    assert_eq!(sc.cows, 0);
                }
            }
        }
    }
}
