//! Error types for the rule engine.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are
//! contract or invariant violations; none of them are retried by the core.

use thiserror::Error;

/// Errors raised by the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Only one or two dice may be rolled.
    #[error("can only roll 1 or 2 dice, got {0}")]
    InvalidDiceCount(u8),

    /// A number outside the 1..=9 board range.
    #[error("number {0} is not on the board (expected 1-9)")]
    InvalidNumber(u8),

    /// Tried to close a number that is already closed.
    #[error("number {0} is not open")]
    NumberNotOpen(u8),

    /// A dice sum that the rolled dice cannot produce.
    #[error("{sum} cannot be rolled with {dice} dice")]
    InvalidRoll { dice: u8, sum: u8 },

    /// A combination that does not add up to the roll.
    #[error("combination sums to {found}, roll was {expected}")]
    SumMismatch { expected: u32, found: u32 },

    /// An operation was issued in the wrong turn state.
    #[error("turn is in state {found}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        found: &'static str,
    },

    /// A choice index past the end of the candidate list.
    #[error("choice {index} is out of range for {len} combinations")]
    ChoiceOutOfRange { index: usize, len: usize },

    /// The dice source could not produce a roll.
    #[error("dice unavailable: {0}")]
    DiceUnavailable(String),

    /// Rejected game configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
