//! Runtime configuration
//!
//! [`GameConfig`] gathers every setting the binary exposes and knows how to
//! build the catalog, statistics store and word oracle from them.

use std::path::PathBuf;
use std::time::Duration;

use log::{debug, warn};

use crate::core::Difficulty;
use crate::stats::{FileStore, KeyValueStore, MemoryStore, StatsStore};
use crate::validation::{DEFAULT_API_URL, DictionaryApi, Offline, WordOracle};
use crate::wordlists::{CatalogError, WordCatalog, loader::load_from_file};

/// Settings for a playing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Tier for the first round
    pub difficulty: Difficulty,
    /// Where statistics live; `None` uses the platform data directory
    pub stats_dir: Option<PathBuf>,
    /// Keep statistics in memory only
    pub persist: bool,
    /// Consult the dictionary service for unknown words
    pub online: bool,
    /// Dictionary service entries endpoint
    pub api_url: String,
    /// Give up on a lookup after this long; `None` waits indefinitely
    pub lookup_timeout: Option<Duration>,
    /// Extra accepted words, one per line
    pub dictionary: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            stats_dir: None,
            persist: true,
            online: true,
            api_url: DEFAULT_API_URL.to_string(),
            lookup_timeout: None,
            dictionary: None,
        }
    }
}

impl GameConfig {
    /// Embedded catalog, extended with the configured dictionary file
    ///
    /// # Errors
    /// Returns `CatalogError::Io` if the dictionary file cannot be read.
    pub fn build_catalog(&self) -> Result<WordCatalog, CatalogError> {
        let mut catalog = WordCatalog::embedded();
        if let Some(path) = &self.dictionary {
            let words = load_from_file(path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            catalog.extend_dictionary(words);
        }
        Ok(catalog)
    }

    /// Statistics loaded from the configured store
    ///
    /// Falls back to an in-memory store when persistence is off or no data
    /// directory exists.
    #[must_use]
    pub fn open_stats(&self) -> StatsStore<Box<dyn KeyValueStore>> {
        let store: Box<dyn KeyValueStore> = if self.persist {
            match self.stats_dir.clone().map(FileStore::new).or_else(FileStore::in_data_dir) {
                Some(store) => {
                    debug!("statistics stored in {}", store.dir().display());
                    Box::new(store)
                }
                None => {
                    warn!("no data directory available, statistics will not be saved");
                    Box::new(MemoryStore::new())
                }
            }
        } else {
            Box::new(MemoryStore::new())
        };
        StatsStore::load(store)
    }

    /// The last-tier oracle for the validator
    ///
    /// An HTTP client that fails to build degrades to offline validation.
    #[must_use]
    pub fn build_oracle(&self) -> Box<dyn WordOracle> {
        if !self.online {
            return Box::new(Offline);
        }
        match DictionaryApi::new(&self.api_url, self.lookup_timeout) {
            Ok(api) => Box::new(api),
            Err(e) => {
                warn!("dictionary lookups disabled: {e}");
                Box::new(Offline)
            }
        }
    }
}
