//! # dont-shut-the-box
//!
//! Rule engine for "don't shut the box": players roll dice and close numbers
//! 1-9 whose sum matches the roll, and score whatever they leave open. Lowest
//! total after the configured rounds wins.
//!
//! ## Design Principles
//!
//! 1. **No I/O in the core**: Dice, human decisions and rendering are
//!    collaborators behind traits (`DiceProvider`, `HumanInput`, `Presenter`).
//!
//! 2. **Deterministic**: All randomness is a seeded `GameRng`; the turn
//!    machine receives dice sums as input, so any game can be replayed.
//!
//! 3. **Explicit states**: A turn is a `TurnMachine` with named states, not a
//!    loop with hidden flags.
//!
//! ## Modules
//!
//! - `core`: Boards, combinations, players, RNG, configuration, errors
//! - `solver`: Combinations of open numbers summing to a roll
//! - `ai`: Easy / medium / hard choice policies
//! - `turn`: Per-turn state machine and deciders
//! - `game`: Rounds, scoring and the winner
//! - `events`: State-change notifications
//! - `interface`: Dice, human input and presenter contracts

pub mod ai;
pub mod core;
pub mod events;
pub mod game;
pub mod interface;
pub mod solver;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    Board, Combination, GameConfig, GameError, GameRng, Player, PlayerConfig, PlayerId,
    PlayerKind, PlayerMap, Result,
};

pub use crate::ai::{ChoicePolicy, Difficulty};

pub use crate::solver::solve;

pub use crate::turn::{play_turn, Decider, TurnEnd, TurnMachine, TurnOutcome, TurnState};

pub use crate::game::{GameBuilder, GameEngine, GameOutcome, RoundSummary, TurnRecord};

pub use crate::events::GameEvent;

pub use crate::interface::{
    DiceProvider, FixedDice, HumanChoice, HumanInput, LogPresenter, NoHumanInput, NullPresenter,
    Presenter,
};
