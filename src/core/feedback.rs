//! Guess scoring and per-letter feedback
//!
//! Feedback for a guess is derived from the secret and the guess alone, so it is
//! never stored: rounds keep their guesses and recompute feedback on demand.

use std::fmt;

use super::word::{WORD_LENGTH, Word};

/// Classification of one letter of a guess
///
/// Ordered by how much it tells the player: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterFeedback {
    /// Letter does not occur (or all occurrences are already accounted for)
    Absent,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter is in the right position
    Correct,
}

impl LetterFeedback {
    /// Share-text glyph for this feedback
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// Implements the standard duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and take them out of the
    ///    per-letter budget
    /// 2. Second pass, left to right: a remaining position is Present while its
    ///    letter still has budget, and each Present consumes one unit
    /// 3. Everything else is Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback::{Absent, Present}, Word};
    ///
    /// let secret = Word::new("speed").unwrap();
    /// let guess = Word::new("erase").unwrap();
    /// let feedback = Feedback::calculate(&secret, &guess);
    ///
    /// // SPEED holds two E's, so both E's of ERASE are Present
    /// assert_eq!(feedback.letters(), &[Present, Absent, Absent, Present, Present]);
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut budget = secret.letter_counts();

        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                result[i] = LetterFeedback::Correct;
                budget[usize::from(g - b'A')] -= 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            let remaining = &mut budget[usize::from(g - b'A')];
            if *remaining > 0 {
                result[i] = LetterFeedback::Present;
                *remaining -= 1;
            }
        }

        Self(result)
    }

    /// Per-position results
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// True when every letter is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Count of Correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Correct)
            .count()
    }

    /// Count of Present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Present)
            .count()
    }

    /// Render as a row of share glyphs
    #[must_use]
    pub fn to_glyphs(&self) -> String {
        self.0.iter().map(|f| f.glyph()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_glyphs())
    }
}

/// Score `guess` against `secret`; shorthand for [`Feedback::calculate`]
#[must_use]
pub fn score(secret: &Word, guess: &Word) -> Feedback {
    Feedback::calculate(secret, guess)
}

/// Best feedback seen per letter, for colouring an on-screen keyboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardStatus {
    letters: [Option<LetterFeedback>; 26],
}

impl KeyboardStatus {
    /// Aggregate the first `revealed` guesses against `secret`
    ///
    /// Correct outranks Present outranks Absent; letters never guessed stay `None`.
    #[must_use]
    pub fn from_guesses(secret: &Word, guesses: &[Word], revealed: usize) -> Self {
        let mut status = Self::default();

        for guess in guesses.iter().take(revealed) {
            let feedback = Feedback::calculate(secret, guess);
            for (&letter, &result) in guess.chars().iter().zip(feedback.letters()) {
                let slot = &mut status.letters[usize::from(letter - b'A')];
                *slot = Some(slot.map_or(result, |best| best.max(result)));
            }
        }

        status
    }

    /// Best feedback for `letter`, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.letters[usize::from(upper as u8 - b'A')]
        } else {
            None
        }
    }
}
