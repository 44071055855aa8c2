//! TUI rendering with ratatui
//!
//! The game board, rules panel, and input area.

use super::app::{App, InputMode, MessageStyle};
use crate::game::{GameStatus, MAX_GUESSES};
use crate::output::formatters::{format_score, score_markers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Guess board
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐂 BULLS & COWS 🐄")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .game
        .history()
        .iter()
        .enumerate()
        .map(|(i, guess)| {
            let row = Line::from(vec![
                Span::styled(
                    format!("{}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    guess.word.text().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(score_markers(guess.score)),
                Span::raw("  "),
                Span::styled(
                    format_score(guess.score),
                    Style::default().fg(Color::Yellow),
                ),
            ]);
            ListItem::new(row)
        })
        .collect();

    // Empty slots for the turns still to come
    for i in app.game.history().len()..MAX_GUESSES {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{}. ····", i + 1),
            Style::default().fg(Color::DarkGray),
        ))));
    }

    let board = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Remaining-guess gauge
            Constraint::Length(6), // Rules
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_remaining(f, app, chunks[0]);
    render_rules(f, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_remaining(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.game.remaining_guesses();
    let percent = (remaining * 100 / MAX_GUESSES) as u16;

    let color = match remaining {
        0..=2 => Color::Red,
        3..=4 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining} of {MAX_GUESSES}"));

    f.render_widget(gauge, area);
}

fn render_rules(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::styled("Bull: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("right letter, right position"),
        ]),
        Line::from(vec![
            Span::styled("Cow:  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("right letter, wrong position"),
        ]),
        Line::from(vec![
            Span::styled("Goal: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("4 bulls within {MAX_GUESSES} guesses")),
        ]),
    ];

    let rules = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Rules ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(rules, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => match app.game.status() {
            GameStatus::Won => (
                " 🎉 YOU WON! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
                String::new(),
                Color::Green,
            ),
            _ => (
                format!(
                    " Game Over - the word was {} | 'n' new game, 'q' quit ",
                    app.game.secret()
                ),
                String::new(),
                Color::Red,
            ),
        },
        InputMode::Typing => (
            " Enter a 4-letter word | Enter: Submit | Ctrl+N: New Game | Esc: Quit ".to_string(),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.game.status() {
        GameStatus::InProgress => "Round: In Progress",
        GameStatus::Won => "Round: Won",
        GameStatus::Lost => "Round: Lost",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let turn_text = format!(
        "Turn: {}/{}",
        app.game.history().len(),
        MAX_GUESSES
    );
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl+N: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
