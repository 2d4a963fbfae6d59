//! Display functions for the line-based commands

use super::formatters::create_progress_bar;
use crate::core::{Feedback, LetterFeedback, Word};
use crate::stats::Statistics;
use colored::{ColoredString, Colorize};

/// A guess with each letter coloured by its feedback
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .as_str()
        .chars()
        .zip(feedback.letters())
        .map(|(ch, &f)| colored_letter(ch, f).to_string())
        .collect()
}

fn colored_letter(ch: char, feedback: LetterFeedback) -> ColoredString {
    let tile = format!(" {ch} ");
    match feedback {
        LetterFeedback::Correct => tile.black().on_green().bold(),
        LetterFeedback::Present => tile.black().on_yellow().bold(),
        LetterFeedback::Absent => tile.white().on_bright_black(),
    }
}

/// Print one scored guess
pub fn print_guess_row(turn: usize, guess: &Word, feedback: &Feedback) {
    println!(
        "  {} {}  {}",
        format!("{turn}.").bright_black(),
        colored_guess(guess, feedback),
        feedback
    );
}

/// Print the statistics panel
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    let bar = create_progress_bar(f64::from(stats.win_percentage()), 100.0, 20);
    println!("   Played:          {}", stats.played.to_string().bold());
    println!(
        "   Record:          {}W - {}L",
        stats.won.to_string().green(),
        stats.lost().to_string().red()
    );
    println!(
        "   Win %:           [{}] {}",
        bar.green(),
        format!("{}%", stats.win_percentage()).bright_yellow()
    );
    println!(
        "   Current streak:  {}",
        stats.current_streak.to_string().bright_yellow().bold()
    );
    println!(
        "   Max streak:      {}",
        stats.max_streak.to_string().bright_magenta().bold()
    );
    println!();
}

/// Print the share text of a finished round
pub fn print_summary(summary: &str) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{summary}");
    println!("{}", "─".repeat(40).cyan());
}
