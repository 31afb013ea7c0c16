//! Core types: players, boards, combinations, RNG, configuration, errors.
//!
//! Everything else in the crate is built from these. Nothing here knows about
//! turns or rounds.

pub mod board;
pub mod combination;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use board::{Board, HIGH_NUMBERS, MAX_NUMBER, MIN_NUMBER};
pub use combination::Combination;
pub use config::{GameConfig, PlayerConfig, DEFAULT_ROUNDS, MAX_ROUNDS, MIN_ROUNDS};
pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerKind, PlayerMap};
pub use rng::GameRng;
