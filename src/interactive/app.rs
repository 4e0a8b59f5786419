//! TUI application state and logic

use crate::core::Word;
use crate::game::{Game, GameConfig, GameState, GuessOutcome};
use crate::wordlists::{SourceType, pick_target};
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
pub struct App {
    pub game: Game,
    pub source: SourceType,
    pub config: GameConfig,
    pub rng: StdRng,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub suggestions: Vec<Word>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    ChooseSuggestion,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    #[must_use]
    pub fn new(game: Game, source: SourceType, config: GameConfig, rng: StdRng) -> Self {
        let max_tries = game.max_tries();
        Self {
            game,
            source,
            config,
            rng,
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            suggestions: Vec::new(),
            messages: vec![
                Message {
                    text: format!("Guess a 5 letter word in {max_tries} tries"),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter, or TAB for suggestions".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Submit the word in the input buffer
    pub fn submit_input(&mut self) {
        match Word::new(&self.input_buffer) {
            Ok(word) => self.submit_guess(word),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn submit_guess(&mut self, word: Word) {
        self.input_buffer.clear();
        self.suggestions.clear();

        let outcome = match self.game.submit_guess(word, &mut self.rng) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        match outcome {
            GuessOutcome::Solved { tries } => {
                self.add_message(
                    &format!("[+] Word guessed correctly in {tries} tries!"),
                    MessageStyle::Success,
                );
            }
            GuessOutcome::Scored(turn) => {
                self.add_message(
                    &format!(
                        "{}: similarity {:.0}%, {} tries left",
                        turn.guess.text().to_uppercase(),
                        turn.similarity,
                        self.game.tries_left()
                    ),
                    MessageStyle::Info,
                );
            }
        }

        if self.game.is_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        if self.game.state() == GameState::Won {
            self.stats.games_won += 1;
        } else {
            let text = format!(
                "[-] Maximum tries reached, word was {}",
                self.game.target().text().to_uppercase()
            );
            self.add_message(&text, MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::GameOver;
    }

    /// Rank the population and offer the result for selection
    pub fn request_suggestions(&mut self) {
        self.suggestions = self.game.suggestions();
        if self.suggestions.is_empty() {
            self.add_message("No suggestions available", MessageStyle::Error);
        } else {
            self.input_mode = InputMode::ChooseSuggestion;
            self.add_message("Pick a suggestion with 1-5, ESC to cancel", MessageStyle::Info);
        }
    }

    /// Use suggestion number `index` (0-based) as the next guess
    pub fn choose_suggestion(&mut self, index: usize) {
        if let Some(&word) = self.suggestions.get(index) {
            self.input_mode = InputMode::Guess;
            self.submit_guess(word);
        } else {
            self.add_message(&format!("No suggestion {}", index + 1), MessageStyle::Error);
        }
    }

    pub fn cancel_suggestions(&mut self) {
        self.suggestions.clear();
        self.input_mode = InputMode::Guess;
    }

    /// Start a new game against a fresh target
    pub fn new_game(&mut self) {
        let target = pick_target(&self.source, &mut self.rng);
        match Game::new(target, self.config, &mut self.rng) {
            Ok(game) => {
                self.game = game;
                self.input_buffer.clear();
                self.suggestions.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guess;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
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

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guess => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.request_suggestions(),
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        if app.input_buffer.len() < 5 {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_input(),
                    _ => {}
                },
                InputMode::ChooseSuggestion => match key.code {
                    KeyCode::Esc | KeyCode::Tab => app.cancel_suggestions(),
                    KeyCode::Char(c) => {
                        if let Some(index) = "123456789".find(c) {
                            app.choose_suggestion(index);
                        }
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
