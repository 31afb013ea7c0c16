//! Fluent construction of a `GameEngine`.

use crate::ai::Difficulty;
use crate::core::{GameConfig, PlayerConfig, Result, DEFAULT_ROUNDS};

use super::engine::GameEngine;

/// Builder for creating a `GameEngine`.
///
/// ```
/// use dont_shut_the_box::ai::Difficulty;
/// use dont_shut_the_box::game::GameBuilder;
///
/// let engine = GameBuilder::new()
///     .human("Ada")
///     .ai("AI", Difficulty::Hard)
///     .rounds(5)
///     .build(42)
///     .unwrap();
/// assert_eq!(engine.player_count(), 2);
/// assert_eq!(engine.config().rounds, 5);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    rounds: u32,
    players: Vec<PlayerConfig>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            players: Vec::new(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn human(self, name: impl Into<String>) -> Self {
        self.player(PlayerConfig::human(name))
    }

    pub fn ai(self, name: impl Into<String>, difficulty: Difficulty) -> Self {
        self.player(PlayerConfig::ai(name, difficulty))
    }

    pub fn player(mut self, player: PlayerConfig) -> Self {
        self.players.push(player);
        self
    }

    /// The configuration this builder describes.
    pub fn config(&self, seed: u64) -> GameConfig {
        GameConfig {
            rounds: self.rounds,
            seed,
            players: self.players.clone(),
        }
    }

    /// Validate and build the engine.
    pub fn build(self, seed: u64) -> Result<GameEngine> {
        GameEngine::new(self.config(seed))
    }
}
