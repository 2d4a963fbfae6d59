//! Guess validity pipeline
//!
//! A guess is checked against three tiers in order, stopping at the first that
//! answers:
//! 1. the secret lists (the secret itself must always be a legal guess)
//! 2. the embedded permissive dictionary
//! 3. an external [`WordOracle`], which may block
//!
//! When the oracle cannot answer the guess is accepted, so an offline player
//! is never stuck on a word the dictionary happens to lack.

mod dictionary_api;
mod oracle;

pub use dictionary_api::{DEFAULT_API_URL, DictionaryApi};
pub use oracle::{FnOracle, LookupError, Offline, WordOracle, from_fn};

use log::{debug, warn};

use crate::core::Word;
use crate::wordlists::WordCatalog;

/// Which tier decided a guess, and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Word is a secret candidate
    SecretList,
    /// Word is in the embedded dictionary
    Dictionary,
    /// External lookup confirmed the word
    Confirmed,
    /// External lookup says the word does not exist
    Rejected,
    /// External lookup failed; accepted anyway
    Unverified(LookupError),
}

impl Verdict {
    /// Whether the guess may be played
    #[must_use]
    pub const fn is_acceptable(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Decides whether guesses are real words
pub struct Validator<'a> {
    catalog: &'a WordCatalog,
    oracle: Box<dyn WordOracle + 'a>,
}

impl<'a> Validator<'a> {
    /// Create a validator over `catalog` with a fallback `oracle`
    pub fn new(catalog: &'a WordCatalog, oracle: impl WordOracle + 'a) -> Self {
        Self {
            catalog,
            oracle: Box::new(oracle),
        }
    }

    /// Validator that never goes beyond the embedded lists
    #[must_use]
    pub fn offline(catalog: &'a WordCatalog) -> Self {
        Self::new(catalog, Offline)
    }

    /// Run the tiers and report which one decided
    #[must_use]
    pub fn check(&self, word: &Word) -> Verdict {
        let verdict = if self.catalog.is_secret_candidate(word) {
            Verdict::SecretList
        } else if self.catalog.in_dictionary(word) {
            Verdict::Dictionary
        } else {
            match self.oracle.lookup(word) {
                Ok(true) => Verdict::Confirmed,
                Ok(false) => Verdict::Rejected,
                Err(e) => {
                    warn!("could not verify {word}, accepting it: {e}");
                    Verdict::Unverified(e)
                }
            }
        };

        debug!("validity of {word}: {verdict:?}");
        verdict
    }

    /// Whether `word` is an acceptable guess
    #[must_use]
    pub fn is_acceptable(&self, word: &Word) -> bool {
        self.check(word).is_acceptable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn every_secret_is_acceptable_even_when_oracle_rejects_everything() {
        let catalog = WordCatalog::embedded();
        let validator = Validator::new(&catalog, from_fn(|_| Ok(false)));

        for difficulty in Difficulty::ALL {
            for secret in catalog.tier(difficulty) {
                assert_eq!(validator.check(secret), Verdict::SecretList);
            }
        }
    }

    #[test]
    fn dictionary_words_skip_the_oracle() {
        let catalog = WordCatalog::embedded();
        let calls = AtomicUsize::new(0);
        let validator = Validator::new(
            &catalog,
            from_fn(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(false)
            }),
        );

        assert_eq!(validator.check(&w("about")), Verdict::Dictionary);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn oracle_decides_unknown_words() {
        let catalog = WordCatalog::embedded();
        let validator = Validator::new(&catalog, from_fn(|word| Ok(word.as_str() == "QAJAQ")));

        assert_eq!(validator.check(&w("qajaq")), Verdict::Confirmed);
        assert!(validator.is_acceptable(&w("qajaq")));
        assert_eq!(validator.check(&w("zzxqj")), Verdict::Rejected);
        assert!(!validator.is_acceptable(&w("zzxqj")));
    }

    #[test]
    fn lookup_failure_fails_open() {
        let catalog = WordCatalog::embedded();
        let validator = Validator::new(
            &catalog,
            from_fn(|_| Err(LookupError::Transport("connection reset".into()))),
        );

        let verdict = validator.check(&w("zzxqj"));
        assert!(matches!(verdict, Verdict::Unverified(LookupError::Transport(_))));
        assert!(verdict.is_acceptable());
    }

    #[test]
    fn offline_validator_accepts_unknown_words() {
        let catalog = WordCatalog::embedded();
        let validator = Validator::offline(&catalog);
        assert_eq!(
            validator.check(&w("zzxqj")),
            Verdict::Unverified(LookupError::Unavailable)
        );
    }
}
