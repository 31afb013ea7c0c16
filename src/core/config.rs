//! Game configuration.
//!
//! A game is configured by its seats (`PlayerConfig`), the number of rounds
//! and the RNG seed. `GameConfig::validate` enforces the supported ranges.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::PlayerKind;
use crate::ai::Difficulty;

/// Fewest rounds a game may be configured with.
pub const MIN_ROUNDS: u32 = 1;

/// Most rounds a game may be configured with.
pub const MAX_ROUNDS: u32 = 10;

/// Rounds played when none are configured.
pub const DEFAULT_ROUNDS: u32 = 3;

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    pub name: String,

    /// Human or AI (with difficulty).
    pub kind: PlayerKind,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn ai(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self::new(name, PlayerKind::Ai(difficulty))
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds to play (1-10).
    pub rounds: u32,

    /// Seed for dice and AI randomness.
    pub seed: u64,

    /// Seats in turn order.
    pub players: Vec<PlayerConfig>,
}

impl Default for GameConfig {
    /// One human against a medium AI over three rounds.
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            seed: 0,
            players: vec![
                PlayerConfig::human("Player"),
                PlayerConfig::ai("AI", Difficulty::Medium),
            ],
        }
    }
}

impl GameConfig {
    /// Empty configuration with default round count and no seats.
    pub fn new(seed: u64) -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            seed,
            players: Vec::new(),
        }
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Add a seat.
    #[must_use]
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.players.push(player);
        self
    }

    /// Check rounds, seat count and names.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&self.rounds) {
            return Err(GameError::InvalidConfig(format!(
                "rounds must be between {MIN_ROUNDS} and {MAX_ROUNDS}, got {}",
                self.rounds
            )));
        }
        if self.players.len() < 2 {
            return Err(GameError::InvalidConfig(format!(
                "at least 2 players required, got {}",
                self.players.len()
            )));
        }
        if self.players.len() > 255 {
            return Err(GameError::InvalidConfig("at most 255 players supported".into()));
        }
        if let Some(pos) = self.players.iter().position(|p| p.name.trim().is_empty()) {
            return Err(GameError::InvalidConfig(format!("player {pos} has an empty name")));
        }
        Ok(())
    }
}
