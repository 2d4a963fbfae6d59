//! The word catalog: secret tiers plus the permissive dictionary

use std::path::PathBuf;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

use super::embedded::{ALLOWED, EASY, HARD, MEDIUM};
use super::loader::words_from_slice;
use crate::core::{Difficulty, Word};

/// Errors building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no secret words for {0} difficulty")]
    EmptyTier(Difficulty),
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable vocabulary for the game
///
/// Every secret candidate is also part of the accepted vocabulary: the
/// validator checks the secret union before the dictionary.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    tiers: [Vec<Word>; 3],
    secrets: FxHashSet<Word>,
    dictionary: FxHashSet<Word>,
}

impl WordCatalog {
    /// Build a catalog from explicit tier lists and a dictionary
    ///
    /// # Errors
    /// Returns `CatalogError::EmptyTier` if any tier has no words, since a
    /// round could never draw a secret from it.
    pub fn new(
        easy: Vec<Word>,
        medium: Vec<Word>,
        hard: Vec<Word>,
        dictionary: impl IntoIterator<Item = Word>,
    ) -> Result<Self, CatalogError> {
        let tiers = [easy, medium, hard];
        for difficulty in Difficulty::ALL {
            if tiers[difficulty.index()].is_empty() {
                return Err(CatalogError::EmptyTier(difficulty));
            }
        }

        let secrets: FxHashSet<Word> = tiers.iter().flatten().copied().collect();
        let dictionary: FxHashSet<Word> = dictionary.into_iter().collect();
        debug!(
            "catalog built: {} secrets, {} dictionary words",
            secrets.len(),
            dictionary.len()
        );

        Ok(Self {
            tiers,
            secrets,
            dictionary,
        })
    }

    /// The catalog compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the embedded tiers are non-empty.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            words_from_slice(EASY),
            words_from_slice(MEDIUM),
            words_from_slice(HARD),
            words_from_slice(ALLOWED),
        )
        .expect("embedded tiers are non-empty")
    }

    /// Add words to the permissive dictionary
    pub fn extend_dictionary(&mut self, words: impl IntoIterator<Item = Word>) {
        let before = self.dictionary.len();
        self.dictionary.extend(words);
        debug!(
            "dictionary extended by {} words",
            self.dictionary.len() - before
        );
    }

    /// Secret candidates for a difficulty, in list order
    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> &[Word] {
        &self.tiers[difficulty.index()]
    }

    /// Is `word` a secret candidate in any tier?
    #[must_use]
    pub fn is_secret_candidate(&self, word: &Word) -> bool {
        self.secrets.contains(word)
    }

    /// Is `word` in the permissive dictionary?
    #[must_use]
    pub fn in_dictionary(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    /// Draw a secret uniformly at random from the tier
    ///
    /// Draws are independent: the same word may come up in consecutive rounds.
    ///
    /// # Panics
    /// Will not panic - construction rejects empty tiers.
    pub fn random_secret<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> Word {
        *self
            .tier(difficulty)
            .choose(rng)
            .expect("tiers are never empty")
    }
}
