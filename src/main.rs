//! Bulls & Cows - CLI
//!
//! Terminal Bulls & Cows with TUI and plain CLI modes: guess the secret
//! 4-letter word within 7 tries.

use anyhow::{Result, bail};
use bulls_cows::{
    commands::{SimulateConfig, run_simple, run_simulation, score_pair},
    output::{print_score_report, print_simulation_result},
    wordlists::{WordList, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls & Cows: guess the secret 4-letter word in 7 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed the random generator for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Score one guess against one secret
    Score {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Play many rounds with a random guesser and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,
    },
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    let words = match wordlist_mode {
        "embedded" => WordList::embedded(),
        path => WordList::new(load_from_file(path)?),
    };

    if words.is_empty() {
        bail!("Word list '{wordlist_mode}' contains no valid 4-letter words");
    }

    Ok(words)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, make_rng(cli.seed)),
        Commands::Simple => {
            run_simple(&words, make_rng(cli.seed)).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { secret, guess } => {
            let report = score_pair(&words, &secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
        Commands::Simulate { rounds } => {
            let config = SimulateConfig {
                rounds,
                seed: cli.seed.unwrap_or_else(rand::random),
            };
            let result = run_simulation(&words, &config);
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(words: &WordList, rng: StdRng) -> Result<()> {
    use bulls_cows::interactive::{App, run_tui};

    let app = App::new(words, rng);
    run_tui(app)
}
