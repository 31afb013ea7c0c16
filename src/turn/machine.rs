//! One player's turn as an explicit state machine.
//!
//! ```text
//! AwaitingDiceCountChoice ─┐
//!            │             │ (two dice mandatory)
//!            ▼             ▼
//!        AwaitingRoll ◄──────────────┐
//!            │                       │ close, numbers left
//!            ▼                       │
//!  AwaitingCombinationChoice ────────┘
//!            │              │
//!            ▼              ▼
//!       TurnEnded      PerfectClose
//! ```
//!
//! The machine never rolls dice or picks combinations itself. Callers feed it
//! a dice sum with [`TurnMachine::apply_roll`] and a choice with
//! [`TurnMachine::close`] or [`TurnMachine::end_turn`], so every transition is
//! reproducible from its inputs.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Combination, GameError, PlayerId, Result};
use crate::solver::solve;

/// Where a turn currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnState {
    /// A single die is allowed; waiting for the player to pick 1 or 2.
    AwaitingDiceCountChoice,

    /// Waiting for the sum of `dice` dice.
    AwaitingRoll { dice: u8 },

    /// The roll has at least one closable combination.
    AwaitingCombinationChoice {
        roll: u8,
        candidates: Vec<Combination>,
    },

    /// Turn over with numbers still open.
    TurnEnded { score: u32 },

    /// Every number closed.
    PerfectClose,
}

impl TurnState {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TurnState::AwaitingDiceCountChoice => "AwaitingDiceCountChoice",
            TurnState::AwaitingRoll { .. } => "AwaitingRoll",
            TurnState::AwaitingCombinationChoice { .. } => "AwaitingCombinationChoice",
            TurnState::TurnEnded { .. } => "TurnEnded",
            TurnState::PerfectClose => "PerfectClose",
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::TurnEnded { .. } | TurnState::PerfectClose)
    }
}

/// Why a turn finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEnd {
    /// No combination matched the roll.
    NoCombination,
    /// The player stopped while combinations were still available.
    Stopped,
    /// The board was cleared.
    PerfectClose,
}

/// Result of a finished turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player: PlayerId,
    pub end: TurnEnd,
    /// Points added to the player's total: the open numbers left, or 0.
    pub score: u32,
    /// Board as the turn left it.
    pub board: Board,
    /// Combinations closed, in order.
    pub closed: Vec<Combination>,
    /// Dice sums rolled, in order.
    pub rolls: Vec<u8>,
}

impl TurnOutcome {
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.end == TurnEnd::PerfectClose
    }
}

/// State machine for a single turn.
#[derive(Clone, Debug)]
pub struct TurnMachine {
    player: PlayerId,
    board: Board,
    state: TurnState,
    stopped: bool,
    closed: Vec<Combination>,
    rolls: Vec<u8>,
}

impl TurnMachine {
    /// Start a turn for `player` on `board`.
    ///
    /// A board with nothing open is already a perfect close.
    #[must_use]
    pub fn new(player: PlayerId, board: Board) -> Self {
        let mut machine = Self {
            player,
            board,
            state: TurnState::PerfectClose,
            stopped: false,
            closed: Vec::new(),
            rolls: Vec::new(),
        };
        machine.state = machine.next_exchange();
        machine
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Combinations closed so far this turn.
    #[must_use]
    pub fn closed(&self) -> &[Combination] {
        &self.closed
    }

    /// Pick how many dice to roll. Only valid while a single die is allowed.
    pub fn choose_dice(&mut self, count: u8) -> Result<&TurnState> {
        self.require_state("AwaitingDiceCountChoice", |s| {
            matches!(s, TurnState::AwaitingDiceCountChoice)
        })?;
        if !matches!(count, 1 | 2) {
            return Err(GameError::InvalidDiceCount(count));
        }
        self.state = TurnState::AwaitingRoll { dice: count };
        Ok(&self.state)
    }

    /// Feed the dice sum and look for combinations.
    ///
    /// With none available the turn ends, scoring the open numbers.
    pub fn apply_roll(&mut self, sum: u8) -> Result<&TurnState> {
        let dice = match self.state {
            TurnState::AwaitingRoll { dice } => dice,
            ref other => {
                return Err(GameError::InvalidState {
                    expected: "AwaitingRoll",
                    found: other.name(),
                })
            }
        };
        if sum < dice || sum > dice * 6 {
            return Err(GameError::InvalidRoll { dice, sum });
        }
        self.rolls.push(sum);

        let candidates = solve(u32::from(sum), self.board);
        debug!(
            "{} rolled {sum} on {:?}: {} candidate(s)",
            self.player,
            self.board,
            candidates.len()
        );

        self.state = if candidates.is_empty() {
            TurnState::TurnEnded {
                score: self.board.remaining_sum(),
            }
        } else {
            TurnState::AwaitingCombinationChoice { roll: sum, candidates }
        };
        Ok(&self.state)
    }

    /// Close `combination`, then either finish or move on to the next roll.
    ///
    /// The combination must add up to the current roll and every number in it
    /// must be open; otherwise nothing changes and an error is returned.
    pub fn close(&mut self, combination: Combination) -> Result<&TurnState> {
        let roll = match self.state {
            TurnState::AwaitingCombinationChoice { roll, .. } => roll,
            ref other => {
                return Err(GameError::InvalidState {
                    expected: "AwaitingCombinationChoice",
                    found: other.name(),
                })
            }
        };
        if combination.sum() != u32::from(roll) {
            return Err(GameError::SumMismatch {
                expected: u32::from(roll),
                found: combination.sum(),
            });
        }

        self.board.close(&combination)?;
        self.closed.push(combination);
        debug!("{} closed {combination}, open {:?}", self.player, self.board);

        self.state = self.next_exchange();
        Ok(&self.state)
    }

    /// Stop instead of closing anything. Scores the open numbers.
    pub fn end_turn(&mut self) -> Result<&TurnState> {
        self.require_state("AwaitingCombinationChoice", |s| {
            matches!(s, TurnState::AwaitingCombinationChoice { .. })
        })?;
        self.stopped = true;
        self.state = TurnState::TurnEnded {
            score: self.board.remaining_sum(),
        };
        Ok(&self.state)
    }

    /// Score for a finished turn.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        match self.state {
            TurnState::TurnEnded { score } => Some(score),
            TurnState::PerfectClose => Some(0),
            _ => None,
        }
    }

    /// Consume a finished turn into its outcome.
    pub fn into_outcome(self) -> Result<TurnOutcome> {
        let (end, score) = match self.state {
            TurnState::PerfectClose => (TurnEnd::PerfectClose, 0),
            TurnState::TurnEnded { score } if self.stopped => (TurnEnd::Stopped, score),
            TurnState::TurnEnded { score } => (TurnEnd::NoCombination, score),
            ref other => {
                return Err(GameError::InvalidState {
                    expected: "TurnEnded or PerfectClose",
                    found: other.name(),
                })
            }
        };
        Ok(TurnOutcome {
            player: self.player,
            end,
            score,
            board: self.board,
            closed: self.closed,
            rolls: self.rolls,
        })
    }

    /// State at the start of each dice exchange.
    fn next_exchange(&self) -> TurnState {
        if self.board.is_empty() {
            TurnState::PerfectClose
        } else if self.board.single_die_eligible() {
            TurnState::AwaitingDiceCountChoice
        } else {
            TurnState::AwaitingRoll { dice: 2 }
        }
    }

    fn require_state(&self, expected: &'static str, ok: impl Fn(&TurnState) -> bool) -> Result<()> {
        if ok(&self.state) {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                expected,
                found: self.state.name(),
            })
        }
    }
}
