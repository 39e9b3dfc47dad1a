//! TUI rendering with ratatui
//!
//! Layout for the LaurieMOO game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::MAX_ATTEMPTS;
use crate::engine::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const COW: [&str; 6] = [
    r"        (__)      ",
    r"        (oo)      ",
    r"  /------\/       ",
    r" / |    ||        ",
    r"*  /\---/\        ",
    r"   ~~   ~~        ",
];

const SHOCKED_COW: [&str; 6] = [
    r"        (__)  !!  ",
    r"        (OO)      ",
    r"  /------\/  O    ",
    r" / |    ||        ",
    r"*  /\---/\        ",
    r"   ~~   ~~        ",
];

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
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐄 LaurieMOO! - Crack the secret code")
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
        .constraints([
            Constraint::Length(4), // Feedback
            Constraint::Min(8),    // Cow
            Constraint::Length(3), // Attempts gauge
        ])
        .split(area);

    render_feedback(f, app, chunks[0]);
    render_cow(f, app, chunks[1]);
    render_attempts(f, app, chunks[2]);
}

fn render_feedback(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.last_feedback {
        Some(text) => Line::from(Span::styled(
            text.trim_end().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "Make your first guess...",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Feedback ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_cow(f: &mut Frame, app: &App, area: Rect) {
    let art = if app.engine.status() == GameStatus::Lost {
        &SHOCKED_COW
    } else {
        &COW
    };
    let lines: Vec<Line> = art.iter().map(|&l| Line::from(l)).collect();
    let cow = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(cow, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.engine.guesses_used().min(MAX_ATTEMPTS);
    let percent = (used * 100 / MAX_ATTEMPTS) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_ATTEMPTS} guesses used"));

    f.render_widget(gauge, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Previous guesses
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_history(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:2}. ", entry.attempt),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    entry.guess.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}B {}L ", entry.score.big, entry.score.little),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(entry.feedback.trim_end().to_string()),
            ]))
        })
        .collect();

    let history = List::new(history_items).block(
        Block::default()
            .title(" Previous Guesses ")
            .borders(Borders::ALL),
    );

    f.render_widget(history, area);
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
    let label = app.guess_label();
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(" {label} | Enter 4 digits, then press Enter "),
            app.input_buffer.as_str(),
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

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::GameOver => "Mode: Game Over",
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

    let remaining_text = format!("Remaining: {}", app.engine.guesses_remaining());
    let remaining = Paragraph::new(remaining_text).alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "q: Quit | Enter: Submit | Backspace: Delete",
        InputMode::GameOver => "q: Quit | n: New Game",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
