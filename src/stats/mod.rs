//! Win/loss statistics and their persistence

mod record;
mod store;

pub use record::Statistic;
pub use store::{JsonFileStore, MemoryStore, StatsStore};
