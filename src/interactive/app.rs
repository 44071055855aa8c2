//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameStatus, MAX_GUESSES};
use crate::output::formatters::format_score;
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game<'a, StdRng>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n - 1]` counts wins that took `n` guesses
    pub guess_distribution: [usize; MAX_GUESSES],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList, rng: StdRng) -> Self {
        Self {
            game: Game::new(words, rng),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Welcome! I picked a secret {WORD_LENGTH}-letter word."
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!("Type a word and press Enter. You have {MAX_GUESSES} guesses."),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    /// Submit the typed word to the engine
    pub fn submit_current(&mut self) {
        let input = self.input_buffer.clone();

        match self.game.submit_guess(&input) {
            Ok(guess) => {
                self.input_buffer.clear();

                match self.game.status() {
                    GameStatus::Won => {
                        let turns = self.game.history().len();
                        self.stats.total_games += 1;
                        self.stats.games_won += 1;
                        self.stats.guess_distribution[turns - 1] += 1;

                        self.input_mode = InputMode::RoundOver;

                        let celebration = match turns {
                            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            6 => "😅 PHEW! Got it in six! 😅",
                            _ => "🎊 DOWN TO THE WIRE! 🎊",
                        };

                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(
                            "Press 'n' for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Lost => {
                        self.stats.total_games += 1;
                        self.input_mode = InputMode::RoundOver;

                        self.add_message(
                            &format!("Out of guesses! The word was {}.", self.game.secret()),
                            MessageStyle::Error,
                        );
                        self.add_message(
                            "Press 'n' for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::InProgress => {
                        self.add_message(
                            &format!(
                                "{}: {} - {} left",
                                guess.word.text(),
                                format_score(guess.score),
                                self.game.remaining_guesses()
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(e) => {
                self.add_message(&format!("{e}"), MessageStyle::Error);
            }
        }
    }

    /// Start a fresh round (the reset control)
    pub fn new_game(&mut self) {
        self.game.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New game started! Fresh secret word.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Between rounds, ignore other keys
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        if app.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                            app.input_buffer.push(c.to_ascii_uppercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_current();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
