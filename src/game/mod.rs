//! Game engine
//!
//! [`Game`] owns the active [`Round`], the random source for secrets and the
//! statistics store. It is the only place that turns a finished round into a
//! statistics update, which happens exactly once per round.

mod round;

pub use round::{GameError, MAX_GUESSES, Outcome, Round, Submission};

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::{Difficulty, Word};
use crate::output::formatters::format_summary;
use crate::stats::{KeyValueStore, Statistics, StatsStore};
use crate::validation::Validator;
use crate::wordlists::WordCatalog;

/// A playing session: current round plus persistent statistics
pub struct Game<'a, K: KeyValueStore> {
    catalog: &'a WordCatalog,
    round: Round,
    stats: StatsStore<K>,
    rng: StdRng,
}

impl<'a, K: KeyValueStore> Game<'a, K> {
    /// Start a session with an OS-seeded random source
    pub fn new(catalog: &'a WordCatalog, difficulty: Difficulty, stats: StatsStore<K>) -> Self {
        Self::with_rng(catalog, difficulty, stats, StdRng::from_os_rng())
    }

    /// Start a session with an explicit random source
    pub fn with_rng(
        catalog: &'a WordCatalog,
        difficulty: Difficulty,
        stats: StatsStore<K>,
        mut rng: StdRng,
    ) -> Self {
        let round = Round::new(catalog.random_secret(difficulty, &mut rng), difficulty);
        info!("new {difficulty} round");
        Self {
            catalog,
            round,
            stats,
            rng,
        }
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn stats(&self) -> Statistics {
        self.stats.stats()
    }

    /// Type a letter; see [`Round::append_letter`]
    pub fn append_letter(&mut self, ch: char) -> bool {
        self.round.append_letter(ch)
    }

    /// Remove the last letter; see [`Round::delete_letter`]
    pub fn delete_letter(&mut self) -> bool {
        self.round.delete_letter()
    }

    /// Lock the current input for an off-thread validity check
    ///
    /// # Errors
    /// See [`Round::begin_submit`].
    pub fn begin_submit(&mut self) -> Result<Word, GameError> {
        self.round.begin_submit()
    }

    /// Apply the validity check started by [`Game::begin_submit`]
    ///
    /// Records statistics when the guess finishes the round.
    ///
    /// # Errors
    /// See [`Round::resolve_submit`].
    pub fn resolve_submit(&mut self, accepted: bool) -> Result<Submission, GameError> {
        let submission = self.round.resolve_submit(accepted)?;
        if submission.outcome.is_over() {
            info!(
                "round over: {:?} in {} guesses, secret {}",
                submission.outcome,
                self.round.guesses().len(),
                self.round.secret()
            );
            self.stats.record_outcome(submission.outcome == Outcome::Won);
        }
        Ok(submission)
    }

    /// Validate and score the current input in one step
    ///
    /// Blocks while the validator consults its external oracle.
    ///
    /// # Errors
    /// - `RoundOver`, `CheckPending`, `IncompleteGuess` before validation
    /// - `InvalidWord` if the validator rejects the word
    pub fn submit_guess(&mut self, validator: &Validator<'_>) -> Result<Submission, GameError> {
        let word = self.begin_submit()?;
        let accepted = validator.is_acceptable(&word);
        self.resolve_submit(accepted)
    }

    /// Replace the round with a fresh one at `difficulty`
    ///
    /// Always allowed; an unresolved validity check is dropped with the old
    /// round.
    pub fn reset(&mut self, difficulty: Difficulty) {
        let secret = self.catalog.random_secret(difficulty, &mut self.rng);
        self.round = Round::new(secret, difficulty);
        info!("new {difficulty} round");
    }

    /// Share text for the finished round, `None` while it is in progress
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        format_summary(&self.round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::MemoryStore;

    fn game(catalog: &WordCatalog, seed: u64) -> Game<'_, MemoryStore> {
        Game::with_rng(
            catalog,
            Difficulty::Easy,
            StatsStore::load(MemoryStore::new()),
            StdRng::seed_from_u64(seed),
        )
    }

    fn type_word<K: KeyValueStore>(game: &mut Game<'_, K>, word: Word) {
        for ch in word.as_str().chars() {
            game.append_letter(ch);
        }
    }

    /// A dictionary word that is not the secret
    fn wrong_word(catalog: &WordCatalog, secret: Word) -> Word {
        ["about", "zebra"]
            .into_iter()
            .map(|s| Word::new(s).unwrap())
            .find(|w| *w != secret && catalog.in_dictionary(w))
            .unwrap()
    }

    #[test]
    fn secret_comes_from_difficulty_tier() {
        let catalog = WordCatalog::embedded();
        let mut g = game(&catalog, 1);
        assert!(catalog.tier(Difficulty::Easy).contains(&g.round().secret()));

        g.reset(Difficulty::Hard);
        assert_eq!(g.round().difficulty(), Difficulty::Hard);
        assert!(catalog.tier(Difficulty::Hard).contains(&g.round().secret()));
    }

    #[test]
    fn winning_records_exactly_one_game() {
        let catalog = WordCatalog::embedded();
        let validator = Validator::offline(&catalog);
        let mut g = game(&catalog, 2);
        let secret = g.round().secret();

        type_word(&mut g, secret);
        let submission = g.submit_guess(&validator).unwrap();
        assert_eq!(submission.outcome, Outcome::Won);
        assert_eq!(g.stats().played, 1);
        assert_eq!(g.stats().won, 1);

        // Further input on the finished round changes nothing
        type_word(&mut g, secret);
        assert_eq!(g.submit_guess(&validator), Err(GameError::RoundOver));
        assert_eq!(g.stats().played, 1);
    }

    #[test]
    fn losing_resets_streak() {
        let catalog = WordCatalog::embedded();
        let validator = Validator::offline(&catalog);
        let mut g = game(&catalog, 3);

        let secret = g.round().secret();
        type_word(&mut g, secret);
        g.submit_guess(&validator).unwrap();
        assert_eq!(g.stats().current_streak, 1);

        g.reset(Difficulty::Easy);
        let miss = wrong_word(&catalog, g.round().secret());
        for i in 0..MAX_GUESSES {
            type_word(&mut g, miss);
            let submission = g.submit_guess(&validator).unwrap();
            let expected = if i + 1 == MAX_GUESSES {
                Outcome::Lost
            } else {
                Outcome::InProgress
            };
            assert_eq!(submission.outcome, expected);
        }

        let stats = g.stats();
        assert_eq!(stats.played, 2);
        assert_eq!(stats.won, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 1);
    }

    #[test]
    fn incomplete_guess_does_not_touch_history() {
        let catalog = WordCatalog::embedded();
        let validator = Validator::offline(&catalog);
        let mut g = game(&catalog, 4);

        g.append_letter('a');
        g.append_letter('b');
        assert_eq!(
            g.submit_guess(&validator),
            Err(GameError::IncompleteGuess)
        );
        assert!(g.round().guesses().is_empty());
        assert_eq!(g.round().outcome(), Outcome::InProgress);
        assert_eq!(g.round().current_input(), "AB");
    }

    #[test]
    fn reset_drops_pending_check() {
        let catalog = WordCatalog::embedded();
        let mut g = game(&catalog, 5);

        type_word(&mut g, Word::new("about").unwrap());
        g.begin_submit().unwrap();
        g.reset(Difficulty::Medium);

        assert!(!g.round().is_pending());
        assert_eq!(g.resolve_submit(true), Err(GameError::NoPendingCheck));
        assert!(g.round().guesses().is_empty());
        assert_eq!(g.stats().played, 0);
    }

    #[test]
    fn summary_only_after_round_ends() {
        let catalog = WordCatalog::embedded();
        let validator = Validator::offline(&catalog);
        let mut g = game(&catalog, 6);
        assert!(g.summary().is_none());

        let secret = g.round().secret();
        type_word(&mut g, secret);
        g.submit_guess(&validator).unwrap();
        assert_eq!(
            g.summary().as_deref(),
            Some("Wordle (Easy) 1/6\n\n🟩🟩🟩🟩🟩")
        );
    }
}
