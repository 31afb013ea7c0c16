//! Who answers a turn's questions.
//!
//! A turn asks two things of its player: one die or two (only when allowed),
//! and which combination to close. `Decider` is that capability; humans and
//! AIs are its two implementations, chosen from the seat's `PlayerKind`.

use log::debug;

use crate::ai::{self, Difficulty};
use crate::core::{Board, Combination, GameError, GameRng, PlayerId, Result};
use crate::interface::{HumanChoice, HumanInput};

/// Makes a player's in-turn decisions.
pub trait Decider {
    /// Roll a single die? Called only when a single die is allowed.
    fn single_die(&mut self, player: PlayerId, board: Board) -> Result<bool>;

    /// Combination to close, or `None` to end the turn now.
    ///
    /// `candidates` is never empty.
    fn decide(
        &mut self,
        player: PlayerId,
        board: Board,
        roll: u8,
        candidates: &[Combination],
    ) -> Result<Option<Combination>>;
}

/// Decisions from an AI policy.
pub struct AiDecider<'a> {
    difficulty: Difficulty,
    rng: &'a mut GameRng,
}

impl<'a> AiDecider<'a> {
    pub fn new(difficulty: Difficulty, rng: &'a mut GameRng) -> Self {
        Self { difficulty, rng }
    }
}

impl Decider for AiDecider<'_> {
    /// One die gives the best odds once 7-9 are gone, so the AI always takes it.
    fn single_die(&mut self, player: PlayerId, _board: Board) -> Result<bool> {
        debug!("{player} ({}) rolls a single die", self.difficulty);
        Ok(true)
    }

    fn decide(
        &mut self,
        _player: PlayerId,
        _board: Board,
        _roll: u8,
        candidates: &[Combination],
    ) -> Result<Option<Combination>> {
        Ok(ai::choose(self.difficulty, candidates, self.rng))
    }
}

/// Decisions forwarded to a human input provider.
pub struct HumanDecider<'a> {
    input: &'a mut dyn HumanInput,
}

impl<'a> HumanDecider<'a> {
    pub fn new(input: &'a mut dyn HumanInput) -> Self {
        Self { input }
    }
}

impl Decider for HumanDecider<'_> {
    fn single_die(&mut self, player: PlayerId, board: Board) -> Result<bool> {
        match self.input.choose_dice_count(player, board)? {
            1 => Ok(true),
            2 => Ok(false),
            other => Err(GameError::InvalidDiceCount(other)),
        }
    }

    fn decide(
        &mut self,
        player: PlayerId,
        board: Board,
        roll: u8,
        candidates: &[Combination],
    ) -> Result<Option<Combination>> {
        match self.input.choose_combination(player, board, roll, candidates)? {
            HumanChoice::EndTurn => Ok(None),
            HumanChoice::Close(index) => candidates
                .get(index)
                .copied()
                .map(Some)
                .ok_or(GameError::ChoiceOutOfRange {
                    index,
                    len: candidates.len(),
                }),
        }
    }
}
