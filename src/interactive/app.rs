//! TUI application state and logic

use crate::commands::Statistics;
use crate::core::{CODE_LENGTH, Code, Score};
use crate::engine::{Engine, GameStatus, render_feedback};
use crate::output::formatters::{LOSS_MESSAGE, WIN_MESSAGE, guess_label, secret_reveal};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub engine: Engine,
    pub history: Vec<HistoryEntry>,
    pub last_feedback: Option<String>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub attempt: u32,
    pub guess: Code,
    pub score: Score,
    pub feedback: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            history: Vec::new(),
            last_feedback: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the secret 4-digit code.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "MOO! = right digit, right place. moo. = right digit, wrong place."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Label for the next guess, e.g. "Guess #3"
    #[must_use]
    pub fn guess_label(&self) -> String {
        guess_label(self.engine.current_attempt())
    }

    pub fn handle_guess(&mut self, input: &str) {
        let guess = match input.parse::<Code>() {
            Ok(code) => code,
            Err(e) => {
                self.add_message(&format!("Invalid guess: {e}"), MessageStyle::Error);
                return;
            }
        };

        let turn = match self.engine.submit_guess(guess) {
            Ok(turn) => turn,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.stats.record(&turn);

        let feedback = render_feedback(turn.score);
        self.history.push(HistoryEntry {
            attempt: turn.attempt,
            guess: turn.guess,
            score: turn.score,
            feedback: feedback.clone(),
        });
        self.last_feedback = Some(feedback);
        self.input_buffer.clear();

        match turn.status {
            GameStatus::Won => {
                self.input_mode = InputMode::GameOver;
                self.add_message(WIN_MESSAGE, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.input_mode = InputMode::GameOver;
                self.add_message(LOSS_MESSAGE, MessageStyle::Error);
                self.add_message(&secret_reveal(self.engine.secret()), MessageStyle::Info);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {}
        }
    }

    pub fn new_game(&mut self) {
        self.engine.new_game();
        self.history.clear();
        self.last_feedback = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Good luck.", MessageStyle::Info);
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // Game over: ignore other keys
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input_buffer.len() < CODE_LENGTH {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    if self.input_buffer.len() == CODE_LENGTH {
                        let input = self.input_buffer.clone();
                        self.handle_guess(&input);
                    } else {
                        self.add_message("Guess must be exactly 4 digits!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
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
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    log::info!(
        "tui closed after {} games, {} won",
        app.stats.total_games,
        app.stats.games_won
    );
    Ok(())
}
