//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe 0-based roster index supporting 1-255 players.
//!
//! ## Player
//!
//! A roster slot: 1-based team number, raw score and turn counter.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::TURN_PENALTY;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-based team number shown to players.
    #[must_use]
    pub const fn team(self) -> u16 {
        self.0 as u16 + 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(256)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.team())
    }
}

/// One roster slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Raw accumulated combo points.
    pub score: i64,
    /// Cubes this player has spawned.
    pub turns: u32,
}

impl Player {
    /// Raw score minus the per-turn penalty, floored at zero.
    ///
    /// ```
    /// use slide_lama::core::Player;
    ///
    /// let player = Player { score: 100, turns: 12 };
    /// assert_eq!(player.display_score(), 40);
    /// ```
    #[must_use]
    pub fn display_score(&self) -> i64 {
        (self.score - i64::from(self.turns) * TURN_PENALTY).max(0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Callers validate the roster size before building one; a `PlayerMap` is
/// never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// One value per player, built by `factory`.
    ///
    /// Panics unless `player_count` is in 1..=255.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "roster needs at least one player");
        assert!(player_count <= 255, "roster holds at most 255 players");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// One default value per player.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Wrap existing per-player values, `None` when empty or over 255 entries.
    pub fn from_vec(data: Vec<T>) -> Option<Self> {
        if data.is_empty() || data.len() > 255 {
            return None;
        }
        Some(Self { data })
    }

    /// Number of roster slots.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// `None` if the id is outside the roster.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// `(PlayerId, &T)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Values in roster order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
