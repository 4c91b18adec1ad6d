//! Serializable game snapshots.
//!
//! A snapshot holds everything needed to rebuild a game with identical
//! behaviour except the random source, which the caller supplies again on
//! restore (for [`GameRng`](crate::core::GameRng), via its own saved state).

use serde::{Deserialize, Serialize};

use super::{Game, GameState};
use crate::active::ActiveCube;
use crate::board::Board;
use crate::core::{GameConfig, Player, PlayerId, PlayerMap, Position, RandomSource};
use crate::error::SnapshotError;
use crate::players::PlayerManager;

/// Plain-data copy of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    /// Raw cube values, one vector per grid row (border included).
    pub cells: Vec<Vec<u8>>,
    pub active: Option<Position>,
    pub players: Vec<Player>,
    /// 0-based index into `players`.
    pub current_player: usize,
    pub state: GameState,
}

impl GameSnapshot {
    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot written by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl<R: RandomSource> Game<R> {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: *self.settings().config(),
            cells: self.board().to_rows(),
            active: self.active_position(),
            players: self.roster().players().map(|(_, p)| p.clone()).collect(),
            current_player: self.roster().current().index(),
            state: self.game_state(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// The board is taken as is: no stabilization pass runs.
    pub fn restore(snapshot: &GameSnapshot, rng: R) -> Result<Self, SnapshotError> {
        let settings = snapshot.config.validate()?;
        let board = Board::from_rows(settings, &snapshot.cells)?;

        let player_count_error = SnapshotError::PlayerCount {
            found: snapshot.players.len(),
            expected: settings.player_count(),
        };
        if snapshot.players.len() != settings.player_count() {
            return Err(player_count_error);
        }
        let roster = PlayerMap::from_vec(snapshot.players.clone()).ok_or(player_count_error)?;
        let current = u8::try_from(snapshot.current_player)
            .map_err(|_| SnapshotError::CurrentPlayer(snapshot.current_player))?;
        let players = PlayerManager::from_parts(roster, PlayerId::new(current))
            .ok_or(SnapshotError::CurrentPlayer(snapshot.current_player))?;

        if let Some(position) = snapshot.active {
            if !settings.is_valid_position(position) {
                return Err(SnapshotError::ActivePosition(position));
            }
        }

        Ok(Self::from_parts(
            settings,
            board,
            ActiveCube::at(snapshot.active),
            players,
            snapshot.state,
            rng,
        ))
    }
}
