//! Display functions for command results

use super::formatters::{create_progress_bar, format_score, score_markers};
use crate::commands::{ScoreReport, SimulationResult};
use colored::Colorize;

/// Print the result of scoring a secret/guess pair
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        report.secret.bright_yellow().bold(),
        report.guess.bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}  {}",
        score_markers(report.score),
        format_score(report.score).bold()
    );

    if report.score.is_win() {
        println!("\n{}", "✅ A winning guess!".green().bold());
    }
    println!();
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" Simulation Results ");
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Rounds:        {}", result.rounds);
    println!(
        "  Wins:          {} ({:.1}%)",
        result.wins.to_string().green().bold(),
        result.win_rate
    );
    println!("  Losses:        {}", result.losses.to_string().red());

    if result.wins > 0 {
        println!(
            "  Avg to win:    {:.2} guesses",
            result.average_guesses_to_win
        );
    }

    println!("\n  Guess distribution (wins):");
    let max_count = result.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in result.guess_distribution.iter().enumerate() {
        let bar = if max_count > 0 {
            create_progress_bar(count as f64, max_count as f64, 20)
        } else {
            create_progress_bar(0.0, 1.0, 20)
        };
        println!("    {}: {bar} {count}", i + 1);
    }

    println!(
        "\n  Completed in {:.2}s ({:.0} rounds/sec)",
        result.duration.as_secs_f64(),
        result.rounds_per_second
    );
    println!();
}
