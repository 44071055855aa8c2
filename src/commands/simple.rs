//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{Game, GameStatus, MAX_GUESSES};
use crate::output::formatters::{format_score, guess_row};
use crate::wordlists::WordList;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(words: &WordList, rng: R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Bulls & Cows - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I picked a secret 4-letter word. You have {MAX_GUESSES} guesses.\n");
    println!("  - Bull: correct letter in the right position");
    println!("  - Cow:  correct letter in the wrong position\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut game = Game::new(words, rng);

    loop {
        let turn = game.history().len() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_GUESSES}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                game.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        match game.submit_guess(&input) {
            Ok(guess) => {
                println!("  {}", guess_row(turn, &guess));

                match game.status() {
                    GameStatus::Won => {
                        print_win_banner(&game);
                        if !ask_play_again()? {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        game.reset();
                        println!("\n🔄 New game started!\n");
                    }
                    GameStatus::Lost => {
                        print_loss_banner(&game);
                        if !ask_play_again()? {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        game.reset();
                        println!("\n🔄 New game started!\n");
                    }
                    GameStatus::InProgress => {
                        println!(
                            "  Guesses remaining: {}\n",
                            game.remaining_guesses()
                        );
                    }
                }
            }
            Err(e) => {
                println!("  {}\n", format!("❌ {e}").red());
            }
        }
    }
}

fn print_win_banner<R: Rng>(game: &Game<'_, R>) {
    let turns = game.history().len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  Y O U   W O N !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match turns {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding deduction!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solid!", "Got there!"),
        _ => ("✓ Solved!", "Close call!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  The word was {} - found in {} {}",
        game.secret().text().bright_yellow().bold(),
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, guess) in game.history().iter().enumerate() {
        println!(
            "    {}. {} - {}",
            (i + 1).to_string().bright_black(),
            guess.word.text().bright_white().bold(),
            format_score(guess.score)
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn print_loss_banner<R: Rng>(game: &Game<'_, R>) {
    println!("\n{}", "═".repeat(70).bright_red());
    println!("{}", "    Game Over!    ".bright_red().bold());
    println!("{}", "═".repeat(70).bright_red());
    println!(
        "\n  The word was {}",
        game.secret().text().bright_yellow().bold()
    );
    println!();
}

fn ask_play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
