//! A single round: secret, guesses, input buffer and outcome

use log::debug;
use thiserror::Error;

use crate::core::{Difficulty, Feedback, KeyboardStatus, WORD_LENGTH, Word};

/// Guesses allowed per round
pub const MAX_GUESSES: usize = 6;

/// State of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Won or Lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submission did not produce a scored guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("Not in word list: {0}")]
    InvalidWord(Word),
    #[error("The round is over")]
    RoundOver,
    #[error("Still checking the previous guess")]
    CheckPending,
    #[error("No guess is being checked")]
    NoPendingCheck,
}

/// A guess that was accepted and scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub guess: Word,
    pub feedback: Feedback,
    /// Outcome of the round after this guess
    pub outcome: Outcome,
}

/// The mutable unit of play
///
/// Letters, backspace and submissions are ignored once the round is over and
/// while a submitted guess is still being validated.
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    difficulty: Difficulty,
    guesses: Vec<Word>,
    input: String,
    outcome: Outcome,
    pending: Option<Word>,
}

impl Round {
    /// Start a round for a known secret
    #[must_use]
    pub fn new(secret: Word, difficulty: Difficulty) -> Self {
        Self {
            secret,
            difficulty,
            guesses: Vec::with_capacity(MAX_GUESSES),
            input: String::with_capacity(WORD_LENGTH),
            outcome: Outcome::InProgress,
            pending: None,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> Word {
        self.secret
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Is a submitted guess waiting for its validity check?
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Guesses still available
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    /// Feedback for every accepted guess, oldest first
    #[must_use]
    pub fn feedback(&self) -> Vec<Feedback> {
        self.guesses
            .iter()
            .map(|guess| Feedback::calculate(&self.secret, guess))
            .collect()
    }

    /// Keyboard colours from the first `revealed` guesses
    #[must_use]
    pub fn keyboard(&self, revealed: usize) -> KeyboardStatus {
        KeyboardStatus::from_guesses(&self.secret, &self.guesses, revealed)
    }

    fn accepts_input(&self) -> bool {
        self.outcome == Outcome::InProgress && self.pending.is_none()
    }

    /// Type a letter; returns whether it was taken
    pub fn append_letter(&mut self, ch: char) -> bool {
        if !self.accepts_input() || !ch.is_ascii_alphabetic() || self.input.len() >= WORD_LENGTH {
            return false;
        }
        self.input.push(ch.to_ascii_uppercase());
        true
    }

    /// Remove the last typed letter; returns whether one was removed
    pub fn delete_letter(&mut self) -> bool {
        self.accepts_input() && self.input.pop().is_some()
    }

    /// Lock the current input for validation
    ///
    /// # Errors
    /// - `RoundOver` once the round has finished
    /// - `CheckPending` while a previous submission is unresolved
    /// - `IncompleteGuess` if fewer than five letters are typed
    pub fn begin_submit(&mut self) -> Result<Word, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::RoundOver);
        }
        if self.pending.is_some() {
            return Err(GameError::CheckPending);
        }
        if self.input.len() != WORD_LENGTH {
            return Err(GameError::IncompleteGuess);
        }

        let word = Word::new(&self.input).map_err(|_| GameError::IncompleteGuess)?;
        self.pending = Some(word);
        debug!("checking {word}");
        Ok(word)
    }

    /// Finish the outstanding submission with the validator's answer
    ///
    /// # Errors
    /// - `NoPendingCheck` if [`Round::begin_submit`] was not called first
    /// - `InvalidWord` if `accepted` is false; the input is kept for editing
    pub fn resolve_submit(&mut self, accepted: bool) -> Result<Submission, GameError> {
        let guess = self.pending.take().ok_or(GameError::NoPendingCheck)?;
        if !accepted {
            return Err(GameError::InvalidWord(guess));
        }

        self.guesses.push(guess);
        self.input.clear();
        let feedback = Feedback::calculate(&self.secret, &guess);

        if guess == self.secret {
            self.outcome = Outcome::Won;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.outcome = Outcome::Lost;
        }
        debug!(
            "guess {} of {MAX_GUESSES}: {guess} {feedback} -> {:?}",
            self.guesses.len(),
            self.outcome
        );

        Ok(Submission {
            guess,
            feedback,
            outcome: self.outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback;

    fn round(secret: &str) -> Round {
        Round::new(Word::new(secret).unwrap(), Difficulty::Easy)
    }

    fn type_word(round: &mut Round, word: &str) {
        for ch in word.chars() {
            round.append_letter(ch);
        }
    }

    fn play(round: &mut Round, word: &str) -> Result<Submission, GameError> {
        type_word(round, word);
        round.begin_submit()?;
        round.resolve_submit(true)
    }

    #[test]
    fn letters_are_uppercased_and_capped_at_five() {
        let mut r = round("crane");
        type_word(&mut r, "slates");
        assert_eq!(r.current_input(), "SLATE");
        assert!(!r.append_letter('x'));
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut r = round("crane");
        assert!(!r.append_letter('1'));
        assert!(!r.append_letter(' '));
        assert!(!r.append_letter('é'));
        assert_eq!(r.current_input(), "");
    }

    #[test]
    fn delete_on_empty_input_is_noop() {
        let mut r = round("crane");
        assert!(!r.delete_letter());
        type_word(&mut r, "ab");
        assert!(r.delete_letter());
        assert_eq!(r.current_input(), "A");
    }

    #[test]
    fn incomplete_guess_changes_nothing() {
        let mut r = round("crane");
        type_word(&mut r, "cra");
        assert_eq!(r.begin_submit(), Err(GameError::IncompleteGuess));
        assert_eq!(r.current_input(), "CRA");
        assert!(r.guesses().is_empty());
        assert_eq!(r.outcome(), Outcome::InProgress);
        assert!(!r.is_pending());
    }

    #[test]
    fn rejected_word_keeps_input() {
        let mut r = round("crane");
        type_word(&mut r, "zzxqj");
        r.begin_submit().unwrap();
        assert_eq!(
            r.resolve_submit(false),
            Err(GameError::InvalidWord(Word::new("zzxqj").unwrap()))
        );
        assert_eq!(r.current_input(), "ZZXQJ");
        assert!(r.guesses().is_empty());
        assert!(r.delete_letter());
    }

    #[test]
    fn input_is_locked_while_checking() {
        let mut r = round("crane");
        type_word(&mut r, "slate");
        r.begin_submit().unwrap();

        assert!(r.is_pending());
        assert!(!r.append_letter('a'));
        assert!(!r.delete_letter());
        assert_eq!(r.begin_submit(), Err(GameError::CheckPending));
        assert_eq!(r.current_input(), "SLATE");

        let submission = r.resolve_submit(true).unwrap();
        assert_eq!(submission.guess.as_str(), "SLATE");
        assert!(!r.is_pending());
        assert!(r.append_letter('a'));
    }

    #[test]
    fn resolve_without_begin_is_an_error() {
        let mut r = round("crane");
        assert_eq!(r.resolve_submit(true), Err(GameError::NoPendingCheck));
    }

    #[test]
    fn accepted_guess_is_scored_and_input_cleared() {
        let mut r = round("crane");
        let submission = play(&mut r, "react").unwrap();

        assert_eq!(submission.outcome, Outcome::InProgress);
        assert_eq!(
            submission.feedback.letters(),
            &[
                LetterFeedback::Present,
                LetterFeedback::Present,
                LetterFeedback::Correct,
                LetterFeedback::Present,
                LetterFeedback::Absent,
            ]
        );
        assert_eq!(r.current_input(), "");
        assert_eq!(r.guesses().len(), 1);
        assert_eq!(r.attempts_left(), 5);
    }

    #[test]
    fn correct_guess_wins() {
        let mut r = round("crane");
        play(&mut r, "slate").unwrap();
        let submission = play(&mut r, "crane").unwrap();
        assert_eq!(submission.outcome, Outcome::Won);
        assert!(submission.feedback.is_solved());
        assert_eq!(r.outcome(), Outcome::Won);
    }

    #[test]
    fn sixth_miss_loses() {
        let mut r = round("crane");
        for _ in 0..5 {
            assert_eq!(play(&mut r, "slate").unwrap().outcome, Outcome::InProgress);
        }
        assert_eq!(play(&mut r, "slate").unwrap().outcome, Outcome::Lost);
        assert_eq!(r.attempts_left(), 0);
    }

    #[test]
    fn win_on_last_guess_is_a_win() {
        let mut r = round("crane");
        for _ in 0..5 {
            play(&mut r, "slate").unwrap();
        }
        assert_eq!(play(&mut r, "crane").unwrap().outcome, Outcome::Won);
    }

    #[test]
    fn finished_round_ignores_everything() {
        let mut r = round("crane");
        play(&mut r, "crane").unwrap();

        assert!(!r.append_letter('a'));
        assert!(!r.delete_letter());
        assert_eq!(r.begin_submit(), Err(GameError::RoundOver));
        assert_eq!(r.guesses().len(), 1);
        assert_eq!(r.outcome(), Outcome::Won);
    }

    #[test]
    fn feedback_and_keyboard_are_derived_from_guesses() {
        let mut r = round("crane");
        play(&mut r, "slate").unwrap();
        play(&mut r, "crane").unwrap();

        let feedback = r.feedback();
        assert_eq!(feedback.len(), 2);
        assert!(feedback[1].is_solved());

        let keyboard = r.keyboard(r.guesses().len());
        assert_eq!(keyboard.get('S'), Some(LetterFeedback::Absent));
        assert_eq!(keyboard.get('C'), Some(LetterFeedback::Correct));
    }
}
