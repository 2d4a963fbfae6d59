//! Statistics command

use crate::output::print_statistics;
use crate::stats::{KeyValueStore, StatsStore};

/// Print the saved statistics
pub fn show_stats<K: KeyValueStore>(stats: &StatsStore<K>) {
    print_statistics(&stats.stats());
}
