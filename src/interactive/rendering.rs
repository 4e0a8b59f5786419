//! TUI rendering with ratatui
//!
//! Board, letter status, suggestions and progress for the guessing game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CharStatus, LetterFeedback};
use crate::game::{GameState, Turn};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE EVOLVE - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
}

fn feedback_style(feedback: LetterFeedback) -> Style {
    let color = match feedback {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Misplaced => Color::Yellow,
        LetterFeedback::Missing => Color::DarkGray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn turn_line(number: usize, turn: &Turn) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{number:>2}. "))];
    for (&letter, &feedback) in turn.guess.chars().iter().zip(turn.feedback.iter()) {
        spans.push(Span::styled(
            format!(" {} ", char::from(letter.to_ascii_uppercase())),
            feedback_style(feedback),
        ));
    }
    spans.push(Span::styled(
        format!("  {:>3.0}%", turn.similarity),
        Style::default().fg(Color::Cyan),
    ));
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let turns = app.game.turns();
    let mut lines: Vec<Line> = turns
        .iter()
        .enumerate()
        .map(|(i, turn)| turn_line(i + 1, turn))
        .collect();

    match app.game.state() {
        GameState::Won => lines.push(Line::styled(
            format!(
                "    {} solved!",
                app.game.target().text().to_uppercase()
            ),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        GameState::Lost => lines.push(Line::styled(
            format!("    The word was {}", app.game.target().text().to_uppercase()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        GameState::InProgress if turns.is_empty() => {
            lines.push(Line::from("No guesses yet"));
        }
        GameState::InProgress => {}
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = app
        .game
        .status()
        .iter()
        .map(|(letter, status)| {
            let style = match status {
                CharStatus::Present => Style::default().fg(Color::Green),
                CharStatus::Absent => Style::default().fg(Color::Red),
                CharStatus::Unused => Style::default().fg(Color::White),
            };
            Span::styled(format!("{} ", char::from(letter)), style)
        })
        .collect();

    let letters = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(letters, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tries gauge
            Constraint::Length(4), // Engine parameters
            Constraint::Min(7),    // Suggestions
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_tries(f, app, chunks[0]);
    render_parameters(f, app, chunks[1]);
    render_suggestions(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_tries(f: &mut Frame, app: &App, area: Rect) {
    let tries = app.game.tries();
    let max_tries = app.game.max_tries().max(1);
    let percent = u16::try_from(tries * 100 / max_tries).unwrap_or(100).min(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tries Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{tries}/{max_tries}"));

    f.render_widget(gauge, area);
}

fn render_parameters(f: &mut Frame, app: &App, area: Rect) {
    let parameters = app.game.parameters();
    let content = vec![
        Line::from(format!("Population:    {}", parameters.population_size)),
        Line::from(format!("Mutation rate: {:.3}", parameters.mutation_rate)),
    ];
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Engine ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.suggestions.is_empty() {
        vec![ListItem::new("Press TAB for suggestions")
            .style(Style::default().fg(Color::DarkGray))]
    } else {
        app.suggestions
            .iter()
            .enumerate()
            .map(|(i, word)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        word.text().to_uppercase(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guess => (
            " Enter Guess (5 letters) | TAB for suggestions ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ChooseSuggestion => (
            " Choose Suggestion (1-5) | ESC to cancel ",
            "",
            Color::Cyan,
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
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let tries_text = format!("Tries left: {}", app.game.tries_left());
    let tries = Paragraph::new(tries_text).alignment(Alignment::Center);
    f.render_widget(tries, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guess => "ESC: Quit | Enter: Submit | TAB: Suggestions",
        InputMode::ChooseSuggestion => "1-5: Pick | ESC: Back",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
