//! Simulation command
//!
//! Plays many rounds with a random guesser to exercise the engine at scale
//! and report outcome statistics.

use crate::game::{Game, GameStatus, MAX_GUESSES};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub rounds: usize,
    pub seed: u64,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_guesses_to_win: f64,
    /// `guess_distribution[n - 1]` counts wins that took `n` guesses
    pub guess_distribution: [usize; MAX_GUESSES],
    pub duration: Duration,
    pub rounds_per_second: f64,
}

struct RoundOutcome {
    won: bool,
    guesses: usize,
}

/// Play `config.rounds` rounds with a random guesser
///
/// Each round gets its own rng derived from the base seed, so a run is
/// reproducible regardless of thread scheduling. The guesser plays distinct
/// random list words until it wins or runs out of turns.
#[must_use]
pub fn run_simulation(words: &WordList, config: &SimulateConfig) -> SimulationResult {
    println!(
        "🎲 Simulating {} rounds against {} words...",
        config.rounds,
        words.len()
    );

    // Progress bar
    let pb = ProgressBar::new(config.rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<RoundOutcome> = (0..config.rounds)
        .into_par_iter()
        .map(|round| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(round as u64));
            let outcome = play_random_round(words, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let wins = outcomes.iter().filter(|o| o.won).count();
    let losses = outcomes.len() - wins;

    let mut guess_distribution = [0usize; MAX_GUESSES];
    let mut winning_guesses = 0usize;
    for outcome in outcomes.iter().filter(|o| o.won) {
        winning_guesses += outcome.guesses;
        guess_distribution[outcome.guesses - 1] += 1;
    }

    let average_guesses_to_win = if wins > 0 {
        winning_guesses as f64 / wins as f64
    } else {
        0.0
    };

    SimulationResult {
        rounds: config.rounds,
        wins,
        losses,
        win_rate: if config.rounds > 0 {
            wins as f64 / config.rounds as f64 * 100.0
        } else {
            0.0
        },
        average_guesses_to_win,
        guess_distribution,
        duration,
        rounds_per_second: config.rounds as f64 / duration.as_secs_f64(),
    }
}

/// Play one round: distinct random list words until the round ends
fn play_random_round(words: &WordList, rng: &mut StdRng) -> RoundOutcome {
    let picks = index::sample(rng, words.len(), MAX_GUESSES.min(words.len())).into_vec();
    let mut game = Game::new(words, rng);

    for pick in picks {
        if game.status().is_over() {
            break;
        }
        if game.submit_guess(words.as_slice()[pick].text()).is_err() {
            break;
        }
    }

    RoundOutcome {
        won: game.status() == GameStatus::Won,
        guesses: game.history().len(),
    }
}
