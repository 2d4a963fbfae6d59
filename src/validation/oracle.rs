//! External word-existence lookups

use thiserror::Error;

use crate::core::Word;

/// Why an external lookup could not give a definitive answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("dictionary request failed: {0}")]
    Transport(String),
    #[error("dictionary service returned HTTP {0}")]
    Status(u16),
    #[error("no dictionary service configured")]
    Unavailable,
}

/// Answers "does this word exist?" from outside the embedded catalog
///
/// `Ok(true)` and `Ok(false)` are definitive answers; any `Err` means the
/// answer is unknown and the validator fails open.
pub trait WordOracle: Send + Sync {
    /// Look up a word
    ///
    /// # Errors
    /// Returns `LookupError` when the service cannot be reached or gives no
    /// definitive answer.
    fn lookup(&self, word: &Word) -> Result<bool, LookupError>;
}

impl<O: WordOracle + ?Sized> WordOracle for Box<O> {
    fn lookup(&self, word: &Word) -> Result<bool, LookupError> {
        (**self).lookup(word)
    }
}

/// Oracle built from a closure, see [`from_fn`]
#[derive(Debug, Clone, Copy)]
pub struct FnOracle<F>(F);

/// Wrap a closure as a [`WordOracle`]
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::validation::{WordOracle, from_fn};
///
/// let oracle = from_fn(|word: &Word| Ok(word.as_str() == "QAJAQ"));
/// assert_eq!(oracle.lookup(&Word::new("qajaq").unwrap()), Ok(true));
/// ```
pub fn from_fn<F>(f: F) -> FnOracle<F>
where
    F: Fn(&Word) -> Result<bool, LookupError> + Send + Sync,
{
    FnOracle(f)
}

impl<F> WordOracle for FnOracle<F>
where
    F: Fn(&Word) -> Result<bool, LookupError> + Send + Sync,
{
    fn lookup(&self, word: &Word) -> Result<bool, LookupError> {
        (self.0)(word)
    }
}

/// Oracle for offline play: never knows anything
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl WordOracle for Offline {
    fn lookup(&self, _word: &Word) -> Result<bool, LookupError> {
        Err(LookupError::Unavailable)
    }
}
