//! State-change notifications for the presentation layer.
//!
//! The engine fires one event after each transition completes. Events carry
//! copies of the relevant values, so a presenter never needs access to the
//! engine's own state.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Combination, PlayerId};

/// Something that just happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Boards were reset and a round is beginning (1-based).
    RoundStarted { round: u32, rounds: u32 },

    /// A player rolled two dice to decide who starts.
    StartingRoll { player: PlayerId, sum: u8 },

    /// The player who will take the first turn this round.
    StartingPlayer { player: PlayerId },

    /// A player's turn is beginning.
    TurnStarted { player: PlayerId, board: Board },

    /// Dice were rolled during a turn.
    DiceRolled { player: PlayerId, dice: u8, sum: u8 },

    /// Numbers were closed; `board` is what remains open.
    NumbersClosed {
        player: PlayerId,
        combination: Combination,
        board: Board,
    },

    /// Turn ended with numbers still open.
    TurnEnded {
        player: PlayerId,
        score: u32,
        board: Board,
    },

    /// Every number was closed; the turn scores 0.
    PerfectClose { player: PlayerId },

    /// Round finished. `scores` are cumulative, in seat order.
    RoundEnded { round: u32, scores: Vec<u32> },

    /// Game finished.
    GameOver { winner: PlayerId, scores: Vec<u32> },
}

impl GameEvent {
    /// The player this event concerns, if it concerns exactly one.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::StartingRoll { player, .. }
            | GameEvent::StartingPlayer { player }
            | GameEvent::TurnStarted { player, .. }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::NumbersClosed { player, .. }
            | GameEvent::TurnEnded { player, .. }
            | GameEvent::PerfectClose { player } => Some(*player),
            GameEvent::GameOver { winner, .. } => Some(*winner),
            GameEvent::RoundStarted { .. } | GameEvent::RoundEnded { .. } => None,
        }
    }

    /// Does this event end a turn?
    #[must_use]
    pub fn is_turn_end(&self) -> bool {
        matches!(self, GameEvent::TurnEnded { .. } | GameEvent::PerfectClose { .. })
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::RoundStarted { round, rounds } => write!(f, "round {round} of {rounds}"),
            GameEvent::StartingRoll { player, sum } => write!(f, "{player} rolled {sum} to start"),
            GameEvent::StartingPlayer { player } => write!(f, "{player} goes first"),
            GameEvent::TurnStarted { player, board } => write!(f, "{player} turn [{board}]"),
            GameEvent::DiceRolled { player, dice, sum } => {
                write!(f, "{player} rolled {sum} with {dice} dice")
            }
            GameEvent::NumbersClosed { player, combination, board } => {
                write!(f, "{player} closed {combination} [{board}]")
            }
            GameEvent::TurnEnded { player, score, .. } => {
                write!(f, "{player} turn ends with score {score}")
            }
            GameEvent::PerfectClose { player } => write!(f, "{player} shut the box"),
            GameEvent::RoundEnded { round, scores } => write!(f, "round {round} scores {scores:?}"),
            GameEvent::GameOver { winner, scores } => {
                write!(f, "{winner} wins with scores {scores:?}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_player() {
        let p = PlayerId::new(1);
        assert_eq!(GameEvent::PerfectClose { player: p }.player(), Some(p));
        assert_eq!(GameEvent::RoundStarted { round: 1, rounds: 3 }.player(), None);
    }

    #[test]
    fn test_turn_end_events() {
        let p = PlayerId::new(0);
        assert!(GameEvent::PerfectClose { player: p }.is_turn_end());
        assert!(GameEvent::TurnEnded { player: p, score: 4, board: Board::empty() }.is_turn_end());
        assert!(!GameEvent::StartingPlayer { player: p }.is_turn_end());
    }

    #[test]
    fn test_event_display() {
        let event = GameEvent::NumbersClosed {
            player: PlayerId::new(0),
            combination: Combination::from_numbers(&[1, 4]).unwrap(),
            board: Board::from_numbers(&[2, 3]).unwrap(),
        };
        assert_eq!(event.to_string(), "Player 0 closed [1, 4] [X 2 3 X X X X X X]");
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::DiceRolled { player: PlayerId::new(1), dice: 2, sum: 8 };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
