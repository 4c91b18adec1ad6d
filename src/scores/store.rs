//! Score tables.

use serde::{Deserialize, Serialize};

/// One line of a score table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub points: i64,
}

impl ScoreEntry {
    /// An entry for `player` with `points`.
    pub fn new(player: impl Into<String>, points: i64) -> Self {
        Self {
            player: player.into(),
            points,
        }
    }
}

/// Somewhere finished games report their scores to.
///
/// The engine never talks to a store itself; callers pass it
/// [`Game::score_entry`](crate::Game::score_entry) results.
pub trait ScoreStore {
    fn add(&mut self, entry: ScoreEntry);

    /// The best `n` entries, highest points first.
    fn top(&self, n: usize) -> Vec<ScoreEntry>;

    fn reset(&mut self);
}

/// In-process score table.
///
/// Entries are kept sorted by points, highest first. Ties keep insertion
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryScoreStore {
    entries: Vec<ScoreEntry>,
}

impl MemoryScoreStore {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn add(&mut self, entry: ScoreEntry) {
        // Insert after every entry with at least as many points
        let index = self.entries.partition_point(|e| e.points >= entry.points);
        tracing::trace!(player = %entry.player, points = entry.points, rank = index + 1, "score recorded");
        self.entries.insert(index, entry);
    }

    fn top(&self, n: usize) -> Vec<ScoreEntry> {
        self.entries.iter().take(n).cloned().collect()
    }

    fn reset(&mut self) {
        self.entries.clear();
    }
}
