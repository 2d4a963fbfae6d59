//! Score command
//!
//! Scores a guess against a given secret without playing a round.

use crate::core::{Feedback, Word, score};
use crate::output::print_guess_row;

/// Score `guess` against `secret` and print the coloured row
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_words(secret: &str, guess: &str) -> Result<Feedback, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let feedback = score(&secret, &guess);
    print_guess_row(1, &guess, &feedback);
    Ok(feedback)
}
