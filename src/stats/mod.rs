//! Win/loss statistics and streaks
//!
//! Statistics are loaded once, updated once per finished round and written
//! back straight away. Storage problems never reach the caller: a missing or
//! unreadable record starts from zero, and a failed write leaves the in-memory
//! counters authoritative for the rest of the process.

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Key under which statistics are stored
pub const STATS_KEY: &str = "wordle-stats-v3";

/// Durable game counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub played: u32,
    pub won: u32,
    pub current_streak: u32,
    /// High-water mark of `current_streak`
    pub max_streak: u32,
}

impl Statistics {
    /// Games lost
    #[must_use]
    pub const fn lost(&self) -> u32 {
        self.played - self.won
    }

    /// Whole-number win rate, 0 when nothing has been played
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            (f64::from(self.won) * 100.0 / f64::from(self.played)).round() as u32
        }
    }

    /// Counters after one more finished round
    ///
    /// Counters saturate at `u32::MAX`.
    #[must_use]
    pub fn after_round(self, won: bool) -> Self {
        if won {
            let current_streak = self.current_streak.saturating_add(1);
            Self {
                played: self.played.saturating_add(1),
                won: self.won.saturating_add(1),
                current_streak,
                max_streak: self.max_streak.max(current_streak),
            }
        } else {
            Self {
                played: self.played.saturating_add(1),
                current_streak: 0,
                ..self
            }
        }
    }

    fn is_consistent(&self) -> bool {
        self.won <= self.played
    }
}

/// Statistics bound to the store they persist to
pub struct StatsStore<K: KeyValueStore> {
    store: K,
    stats: Statistics,
}

impl<K: KeyValueStore> StatsStore<K> {
    /// Load statistics from `store`, falling back to zeros
    pub fn load(store: K) -> Self {
        let stats = match store.get(STATS_KEY) {
            Ok(Some(text)) => parse_stats(&text),
            Ok(None) => {
                debug!("no saved statistics, starting fresh");
                Statistics::default()
            }
            Err(e) => {
                warn!("could not read statistics, starting fresh: {e}");
                Statistics::default()
            }
        };

        Self { store, stats }
    }

    /// Current counters
    #[must_use]
    pub const fn stats(&self) -> Statistics {
        self.stats
    }

    /// Count one finished round and persist the result
    ///
    /// Must be called exactly once per finished round; the game engine
    /// guarantees this.
    pub fn record_outcome(&mut self, won: bool) -> Statistics {
        self.stats = self.stats.after_round(won);
        info!(
            "round {}: played={} won={} streak={} best={}",
            if won { "won" } else { "lost" },
            self.stats.played,
            self.stats.won,
            self.stats.current_streak,
            self.stats.max_streak
        );

        if let Err(e) = self.save() {
            warn!("could not save statistics, keeping them in memory: {e}");
        }
        self.stats
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let text = serde_json::to_string(&self.stats)?;
        self.store.set(STATS_KEY, &text)
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &K {
        &self.store
    }
}

fn parse_stats(text: &str) -> Statistics {
    match serde_json::from_str::<Statistics>(text) {
        Ok(stats) if stats.is_consistent() => stats,
        Ok(stats) => {
            warn!("ignoring inconsistent statistics {stats:?}");
            Statistics::default()
        }
        Err(e) => {
            warn!("ignoring malformed statistics: {e}");
            Statistics::default()
        }
    }
}
