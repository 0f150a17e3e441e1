//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, toast line, and the post-game
//! statistics/share panel.

use super::app::{App, InputMode};
use crate::core::LetterStatus;
use crate::game::{GuessRow, MAX_TRIES};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(MAX_TRIES as u16 + 2), // Board
            Constraint::Length(5),                   // Keyboard
            Constraint::Length(3),                   // Toast
            Constraint::Min(0),                      // Stats / share panel
            Constraint::Length(3),                   // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_toast(f, app, chunks[3]);
    if app.show_stats {
        render_stats_panel(f, app, chunks[4]);
    }
    render_status(f, app, chunks[5]);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Misplaced => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unused => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

fn row_line(row: &GuessRow) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.letters().len() * 2);
    for (&letter, &status) in row.letters().iter().zip(row.statuses()) {
        spans.push(Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            status_style(status).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app.game.rows().iter().map(row_line).collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .map(|key| {
                    Span::styled(
                        format!(" {} ", key.to_ascii_uppercase()),
                        status_style(app.game.key_color(key)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_toast(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match (&app.toast, &app.input_mode) {
        (Some(toast), InputMode::GameOver) if app.game.has_won() => {
            (toast.clone(), Color::Green)
        }
        (Some(toast), InputMode::GameOver) => (toast.clone(), Color::Red),
        (Some(toast), InputMode::Typing) => (toast.clone(), Color::Yellow),
        (None, _) => (String::new(), Color::DarkGray),
    };

    let toast = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(toast, area);
}

fn render_stats_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_share(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!(
            "Played: {}   Win %: {}   Streak: {}   Max streak: {}",
            stats.games,
            stats.win_percentage(),
            stats.streak,
            stats.max_streak
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let max_count = stats.frequencies.iter().copied().max().unwrap_or(0).max(1);
    for (row, &count) in stats.frequencies.iter().enumerate() {
        let width = (count as usize * 20) / max_count as usize;
        let bar = "█".repeat(width) + &"░".repeat(20 - width);
        let style = if app.last_won_row == Some(row) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", row + 1)),
            Span::styled(bar, style),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .share
        .as_deref()
        .unwrap_or("")
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Share ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode_text = format!(
        "Row {}/{MAX_TRIES}{}",
        (app.game.try_index() + 1).min(MAX_TRIES),
        if app.game.hard_mode() {
            " | Hard mode"
        } else {
            ""
        }
    );
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win %: {}",
        app.stats.games,
        app.stats.win_percentage()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Type letters | Enter: Submit | Esc: Quit",
        InputMode::GameOver => "n: New Game | s: Stats | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
