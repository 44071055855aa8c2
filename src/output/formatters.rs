//! Formatting utilities for terminal output

use crate::core::{Score, WORD_LENGTH};
use crate::game::Guess;

/// Format a score as a readable tally, e.g. "2 Bulls, 1 Cow"
#[must_use]
pub fn format_score(score: Score) -> String {
    format!(
        "{} {}, {} {}",
        score.bulls,
        if score.bulls == 1 { "Bull" } else { "Bulls" },
        score.cows,
        if score.cows == 1 { "Cow" } else { "Cows" }
    )
}

/// Format a score as position-free markers, e.g. "🟢🟢🟡⚪"
///
/// Bulls first, then cows, then misses; the order carries no positional
/// information, only the counts.
#[must_use]
pub fn score_markers(score: Score) -> String {
    let misses = (WORD_LENGTH as u8).saturating_sub(score.total_matches());
    let mut result = String::new();

    for _ in 0..score.bulls {
        result.push('🟢');
    }
    for _ in 0..score.cows {
        result.push('🟡');
    }
    for _ in 0..misses {
        result.push('⚪');
    }

    result
}

/// Format a numbered guess row, e.g. "3. GOLD  🟢🟢🟡⚪  2 Bulls, 1 Cow"
#[must_use]
pub fn guess_row(turn: usize, guess: &Guess) -> String {
    format!(
        "{turn}. {}  {}  {}",
        guess.word.text(),
        score_markers(guess.score),
        format_score(guess.score)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
