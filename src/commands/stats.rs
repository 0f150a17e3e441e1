//! Stats subcommand

use crate::output::print_stats;
use crate::stats::StatsStore;

/// Print the persisted statistics record
pub fn run_stats(store: &dyn StatsStore) {
    let stat = store.load();
    print_stats(&stat, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{MemoryStore, Statistic};

    #[test]
    fn run_stats_prints_stored_record() {
        colored::control::set_override(false);
        let store = MemoryStore::default();
        let mut stat = Statistic::default();
        stat.update(true, Some(2));
        store.save(&stat).unwrap();

        // Must not panic
        run_stats(&store);
        colored::control::unset_override();
    }
}
