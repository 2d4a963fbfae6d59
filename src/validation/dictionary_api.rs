//! HTTP client for the free dictionary API

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use super::oracle::{LookupError, WordOracle};
use crate::core::Word;

/// Default entries endpoint; the lowercase word is appended as a path segment.
pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Word oracle backed by a dictionary HTTP service
///
/// `200` means the word exists, `404` means it does not. Anything else is
/// reported as an error so the validator can fail open.
pub struct DictionaryApi {
    client: Client,
    base_url: String,
}

impl DictionaryApi {
    /// Create a client for `base_url`
    ///
    /// `timeout` of `None` waits indefinitely for a response.
    ///
    /// # Errors
    /// Returns `LookupError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn entry_url(&self, word: &Word) -> String {
        format!("{}/{}", self.base_url, word.to_lowercase())
    }
}

impl WordOracle for DictionaryApi {
    fn lookup(&self, word: &Word) -> Result<bool, LookupError> {
        let url = self.entry_url(word);
        debug!("querying {url}");

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, concat!("wordle_game/", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(LookupError::Status(status.as_u16())),
        }
    }
}
