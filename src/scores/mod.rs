//! High-score bookkeeping.

pub mod store;

pub use store::{MemoryScoreStore, ScoreEntry, ScoreStore};
