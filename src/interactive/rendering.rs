//! TUI rendering with ratatui
//!
//! Board, keyboard, statistics and the end-of-round summary.

use super::app::{App, MessageStyle};
use crate::core::{LetterFeedback, WORD_LENGTH};
use crate::game::{MAX_GUESSES, Outcome};
use crate::stats::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Stats and messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if app.game.round().outcome().is_over() {
        render_summary(f, app);
    }
}

fn render_header<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>, area: Rect) {
    let title = format!("🟩 WORDLE - {}", app.game.round().difficulty().label());
    let header = Paragraph::new(title)
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

fn render_play_panel<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_GUESSES as u16 + 2), // Board
            Constraint::Length(5),                      // Keyboard
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn feedback_style(feedback: LetterFeedback) -> Style {
    let bg = match feedback {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    };
    Style::default()
        .bg(bg)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn render_board<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>, area: Rect) {
    let round = app.game.round();
    let guesses = round.guesses();
    let feedback = round.feedback();

    let mut lines = Vec::with_capacity(MAX_GUESSES);
    for (guess, result) in guesses.iter().zip(&feedback) {
        let spans = guess
            .as_str()
            .chars()
            .zip(result.letters())
            .flat_map(|(ch, &fb)| tile(ch, feedback_style(fb)));
        lines.push(Line::from(spans.collect::<Vec<_>>()));
    }

    if round.outcome() == Outcome::InProgress {
        let input_style = if app.is_checking() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let typed: Vec<char> = round.current_input().chars().collect();
        let spans = (0..WORD_LENGTH).flat_map(|i| match typed.get(i) {
            Some(&ch) => tile(ch, input_style),
            None => tile('_', Style::default().fg(Color::DarkGray)),
        });
        lines.push(Line::from(spans.collect::<Vec<_>>()));
    }

    while lines.len() < MAX_GUESSES {
        let spans = (0..WORD_LENGTH).flat_map(|_| tile('·', Style::default().fg(Color::DarkGray)));
        lines.push(Line::from(spans.collect::<Vec<_>>()));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guess {}/{MAX_GUESSES} ", guesses.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>, area: Rect) {
    let round = app.game.round();
    let status = round.keyboard(round.guesses().len());

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|key| {
                    let style = status
                        .get(key)
                        .map_or_else(|| Style::default().fg(Color::White), feedback_style);
                    [Span::styled(format!(" {key} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Statistics
            Constraint::Length(3), // Win rate gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_win_rate(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_statistics<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>, area: Rect) {
    let stats = app.game.stats();
    let content = vec![
        Line::from(format!("Played:         {}", stats.played)),
        Line::from(format!("Won / Lost:     {} / {}", stats.won, stats.lost())),
        Line::from(format!("Current streak: {}", stats.current_streak)),
        Line::from(format!("Max streak:     {}", stats.max_streak)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_win_rate<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>, area: Rect) {
    let percent = app.game.stats().win_percentage();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        // Never above 100 for well-formed statistics
        .percent(u16::try_from(percent.min(100)).unwrap_or(100))
        .label(format!("Win rate {percent}%"));
    f.render_widget(gauge, area);
}

fn render_messages<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>, area: Rect) {
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

fn render_status<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>, area: Rect) {
    let help_text = if app.game.round().outcome().is_over() {
        "n: New Game | Tab: Difficulty | q/Esc: Quit"
    } else if app.is_checking() {
        "Checking word... | Ctrl-N: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Tab: Difficulty | Ctrl-N: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

/// End-of-round popup with the share summary
fn render_summary<K: KeyValueStore>(f: &mut Frame, app: &App<'_, K>) {
    let round = app.game.round();
    let Some(summary) = app.game.summary() else {
        return;
    };

    let (title, color) = if round.outcome() == Outcome::Won {
        (" 🎉 Solved! ".to_string(), Color::Green)
    } else {
        (format!(" The word was {} ", round.secret()), Color::Red)
    };

    let mut lines: Vec<Line> = summary.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "n: new game  Tab: difficulty  q: quit",
        Style::default().fg(Color::DarkGray),
    )));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(f.area(), 40, height);

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
