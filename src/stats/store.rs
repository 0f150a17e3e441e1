//! Statistics persistence
//!
//! The record is stored whole as a single JSON document. A missing or
//! corrupt file degrades to a zeroed record; saves are synchronous so the
//! record is on disk before the next input is processed.

use super::record::Statistic;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Whole-record load/save for the statistics record
pub trait StatsStore {
    /// Load the record, falling back to a fresh one when unavailable
    fn load(&self) -> Statistic;

    /// Persist the record
    ///
    /// # Errors
    /// Returns an I/O error if the record cannot be written.
    fn save(&self, stat: &Statistic) -> io::Result<()>;
}

/// JSON-file backed store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store at an explicit path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default per-user data location
    ///
    /// Resolves `$XDG_DATA_HOME/wordle_tui/stats.json`, then
    /// `$HOME/.local/share/wordle_tui/stats.json`, then falls back to
    /// `stats.json` in the working directory.
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(default_stats_path())
    }

    /// Where the record is kept
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> Statistic {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    fn save(&self, stat: &Statistic) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(stat)?;
        fs::write(&self.path, contents)
    }
}

/// In-memory store for tests and one-off games
#[derive(Debug, Default)]
pub struct MemoryStore {
    stat: RefCell<Statistic>,
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Statistic {
        self.stat.borrow().clone()
    }

    fn save(&self, stat: &Statistic) -> io::Result<()> {
        *self.stat.borrow_mut() = stat.clone();
        Ok(())
    }
}

fn default_stats_path() -> PathBuf {
    let data_dir = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")));

    match data_dir {
        Some(dir) => dir.join("wordle_tui").join("stats.json"),
        None => PathBuf::from("stats.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> JsonFileStore {
        let path = std::env::temp_dir().join(format!(
            "wordle_tui_store_{tag}_{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        JsonFileStore::new(path)
    }

    #[test]
    fn missing_file_loads_default() {
        let store = temp_store("missing");
        assert_eq!(store.load(), Statistic::default());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), Statistic::default());
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        let mut stat = Statistic::default();
        stat.update(true, Some(1));
        stat.update(false, None);

        store.save(&stat).unwrap();
        assert_eq!(store.load(), stat);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::default();
        assert_eq!(store.load(), Statistic::default());

        let mut stat = Statistic::default();
        stat.update(true, Some(0));
        store.save(&stat).unwrap();
        assert_eq!(store.load(), stat);
    }
}
