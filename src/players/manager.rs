//! Turn rotation and per-player counters.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};

/// Fixed roster with one current player.
///
/// All score and turn mutations apply to the current player only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerManager {
    players: PlayerMap<Player>,
    current: PlayerId,
}

impl PlayerManager {
    /// A fresh roster; the first player starts.
    ///
    /// # Panics
    ///
    /// Panics unless `player_count` is in 1..=255. Counts taken from
    /// [`GameSettings`](crate::core::GameSettings) always are.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            players: PlayerMap::with_default(player_count),
            current: PlayerId::new(0),
        }
    }

    /// Rebuild a roster, `None` if `current` is outside it.
    pub fn from_parts(players: PlayerMap<Player>, current: PlayerId) -> Option<Self> {
        players.get(current)?;
        Some(Self { players, current })
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Counters of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// `None` if `id` is outside the roster.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Every player in roster order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    /// Roster size.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Round-robin to the next player.
    pub fn switch_to_next(&mut self) {
        let next = (self.current.index() + 1) % self.players.player_count();
        self.current = PlayerId::new(next as u8);
    }

    /// Credit points to the current player.
    pub fn add_score(&mut self, points: i64) {
        self.players[self.current].score += points;
    }

    /// Count one more spawned cube for the current player.
    pub fn add_turn(&mut self) {
        self.players[self.current].turns += 1;
    }

    /// Current player's score after the turn penalty.
    #[must_use]
    pub fn current_score_display(&self) -> i64 {
        self.current_player().display_score()
    }

    /// Whether the current player's raw score reached `threshold`.
    #[must_use]
    pub fn check_win(&self, threshold: i64) -> bool {
        self.current_player().score >= threshold
    }

    /// Zero the current player's score and turns.
    pub fn reset_current_stats(&mut self) {
        self.players[self.current] = Player::default();
    }
}
