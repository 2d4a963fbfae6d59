//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::core::{Difficulty, WORD_LENGTH};
use crate::game::{Game, GameError, MAX_GUESSES, Outcome};
use crate::output::{print_guess_row, print_statistics, print_summary, win_message};
use crate::stats::KeyValueStore;
use crate::validation::Validator;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode until the player quits or input ends
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<K: KeyValueStore, R: BufRead>(
    game: &mut Game<'_, K>,
    validator: &Validator<'_>,
    mut reader: R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle - Line Mode                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {MAX_GUESSES} tries.");
    println!("  - {} right letter, right spot", " G ".black().on_green());
    println!("  - {} right letter, wrong spot", " Y ".black().on_yellow());
    println!("  - {} not in the word", " X ".white().on_bright_black());
    println!("\nCommands: 'quit', 'new', 'stats', 'easy' / 'medium' / 'hard'\n");

    loop {
        let round = game.round();
        let prompt = format!(
            "Guess {}/{MAX_GUESSES} ({})",
            round.guesses().len() + 1,
            round.difficulty()
        );
        let Some(input) = get_user_input(&mut reader, &prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                let difficulty = game.round().difficulty();
                game.reset(difficulty);
                println!("\n🔄 New {difficulty} game started!\n");
            }
            "stats" => print_statistics(&game.stats()),
            command => {
                if let Ok(difficulty) = command.parse::<Difficulty>() {
                    game.reset(difficulty);
                    println!("\n🔄 New {difficulty} game started!\n");
                } else if play_line(game, validator, &input) && !finish_round(game, &mut reader)? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Submit one typed line; returns true when the round just ended
fn play_line<K: KeyValueStore>(
    game: &mut Game<'_, K>,
    validator: &Validator<'_>,
    line: &str,
) -> bool {
    if line.chars().count() != WORD_LENGTH || !line.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("❌ Please enter {WORD_LENGTH} letters.\n");
        return false;
    }

    while game.delete_letter() {}
    for ch in line.chars() {
        game.append_letter(ch);
    }

    match game.submit_guess(validator) {
        Ok(submission) => {
            println!();
            for (i, (guess, feedback)) in game
                .round()
                .guesses()
                .iter()
                .zip(game.round().feedback())
                .enumerate()
            {
                print_guess_row(i + 1, guess, &feedback);
            }
            println!();
            submission.outcome.is_over()
        }
        Err(GameError::InvalidWord(word)) => {
            println!("❌ Not in word list: {word}\n");
            false
        }
        Err(e) => {
            println!("❌ {e}\n");
            false
        }
    }
}

/// Report the finished round; returns whether the player wants another
fn finish_round<K: KeyValueStore, R: BufRead>(
    game: &mut Game<'_, K>,
    reader: &mut R,
) -> Result<bool, String> {
    let round = game.round();
    match round.outcome() {
        Outcome::Won => {
            let praise = win_message(round.guesses().len());
            println!("{}", praise.bright_green().bold());
        }
        Outcome::Lost => {
            println!(
                "{} The word was {}",
                "❌".red(),
                round.secret().as_str().bright_yellow().bold()
            );
        }
        Outcome::InProgress => return Ok(true),
    }

    if let Some(summary) = game.summary() {
        print_summary(&summary);
    }
    print_statistics(&game.stats());

    match get_user_input(reader, "Play again? (yes/no)")? {
        Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
            let difficulty = game.round().difficulty();
            game.reset(difficulty);
            println!("\n🔄 New {difficulty} game started!\n");
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
