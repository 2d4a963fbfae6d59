//! Formatting utilities for share text and terminal output

use crate::core::Feedback;
use crate::game::{MAX_GUESSES, Outcome, Round};

/// Share text for a finished round
///
/// A header with the difficulty and `<guesses>/6` (or `X/6` for a loss), a blank
/// line, then one glyph row per guess. Returns `None` while the round is still
/// in progress.
///
/// ```text
/// Wordle (Medium) 3/6
///
/// ⬛🟨⬛⬛🟩
/// 🟩⬛🟩🟨🟩
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn format_summary(round: &Round) -> Option<String> {
    let result = match round.outcome() {
        Outcome::InProgress => return None,
        Outcome::Won => format!("{}/{MAX_GUESSES}", round.guesses().len()),
        Outcome::Lost => format!("X/{MAX_GUESSES}"),
    };

    let grid = round
        .feedback()
        .iter()
        .map(Feedback::to_glyphs)
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(
        "Wordle ({}) {result}\n\n{grid}",
        round.difficulty().label()
    ))
}

/// Praise for a win in `guesses` tries
#[must_use]
pub const fn win_message(guesses: usize) -> &'static str {
    match guesses {
        1 => "🏆 Genius!",
        2 => "⭐ Magnificent!",
        3 => "💫 Impressive!",
        4 => "✨ Splendid!",
        5 => "👍 Great!",
        _ => "😅 Phew!",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
