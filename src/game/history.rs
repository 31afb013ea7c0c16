//! Records of finished turns, rounds and games.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::turn::TurnOutcome;

/// A finished turn, tagged with its round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Round number (starts at 1).
    pub round: u32,
    pub outcome: TurnOutcome,
}

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number (starts at 1).
    pub round: u32,

    /// Two-dice rolls used to pick the starter, in seat order.
    pub starting_rolls: Vec<u8>,

    /// Who took the first turn.
    pub starter: PlayerId,

    /// Points scored this round, in seat order.
    pub scores: Vec<u32>,

    /// Cumulative scores after this round, in seat order.
    pub totals: Vec<u32>,
}

/// Final result of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Lowest total; the earliest seat wins a tie.
    pub winner: PlayerId,

    /// Player names, in seat order.
    pub names: Vec<String>,

    /// Final cumulative scores, in seat order.
    pub scores: Vec<u32>,

    pub rounds: Vector<RoundSummary>,

    pub turns: Vector<TurnRecord>,
}

impl GameOutcome {
    /// Every seat sharing the lowest total.
    #[must_use]
    pub fn tied_leaders(&self) -> Vec<PlayerId> {
        let Some(&best) = self.scores.iter().min() else {
            return Vec::new();
        };
        self.scores
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == best)
            .map(|(i, _)| PlayerId::new(i as u8))
            .collect()
    }

    /// Winner's name, if `winner` is one of `names`.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.names.get(self.winner.index()).map(String::as_str)
    }

    /// Scores a seat took in each round, in round order.
    pub fn round_scores(&self, player: PlayerId) -> impl Iterator<Item = u32> + '_ {
        self.rounds.iter().map(move |r| r.scores[player.index()])
    }
}
