//! Contracts with the collaborators outside the rule engine.
//!
//! The engine performs no I/O of its own. Dice come from a `DiceProvider`,
//! human decisions from a `HumanInput`, and every state change is pushed to
//! a `Presenter`. All calls are synchronous.

use std::collections::VecDeque;

use log::{info, warn};
use thiserror::Error;

use crate::core::{Board, Combination, GameError, GameRng, PlayerId, Result};
use crate::events::GameEvent;

// =============================================================================
// Dice
// =============================================================================

/// Source of dice sums.
pub trait DiceProvider {
    /// Sum of `count` six-sided dice. `count` must be 1 or 2.
    fn roll(&mut self, count: u8) -> Result<u8>;
}

impl DiceProvider for GameRng {
    fn roll(&mut self, count: u8) -> Result<u8> {
        self.roll_dice(count)
    }
}

/// Replays a fixed sequence of sums, for reproducing a game exactly.
///
/// Fails with [`GameError::DiceUnavailable`] once the sequence runs out.
#[derive(Clone, Debug, Default)]
pub struct FixedDice {
    sums: VecDeque<u8>,
}

impl FixedDice {
    pub fn new(sums: impl IntoIterator<Item = u8>) -> Self {
        Self {
            sums: sums.into_iter().collect(),
        }
    }

    /// Sums not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.sums.len()
    }
}

impl DiceProvider for FixedDice {
    fn roll(&mut self, count: u8) -> Result<u8> {
        if !matches!(count, 1 | 2) {
            return Err(GameError::InvalidDiceCount(count));
        }
        self.sums
            .pop_front()
            .ok_or_else(|| GameError::DiceUnavailable("fixed dice sequence exhausted".into()))
    }
}

// =============================================================================
// Human input
// =============================================================================

/// A human's answer when offered candidate combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanChoice {
    /// Close the candidate at this index.
    Close(usize),
    /// Stop now and score the open numbers.
    EndTurn,
}

/// Asks a human which combination to close.
///
/// Implementations re-prompt on bad input themselves; the engine expects an
/// index inside `candidates` or `EndTurn`.
pub trait HumanChoiceProvider {
    fn choose_combination(
        &mut self,
        player: PlayerId,
        board: Board,
        roll: u8,
        candidates: &[Combination],
    ) -> Result<HumanChoice>;
}

/// Asks a human whether to roll one die or two. Only called when a single
/// die is allowed.
pub trait DiceCountChoiceProvider {
    fn choose_dice_count(&mut self, player: PlayerId, board: Board) -> Result<u8>;
}

/// Everything the engine needs from a human.
pub trait HumanInput: HumanChoiceProvider + DiceCountChoiceProvider {}

impl<T: HumanChoiceProvider + DiceCountChoiceProvider> HumanInput for T {}

/// Stand-in for games with no human seat. Any request is an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHumanInput;

impl HumanChoiceProvider for NoHumanInput {
    fn choose_combination(
        &mut self,
        player: PlayerId,
        _board: Board,
        _roll: u8,
        _candidates: &[Combination],
    ) -> Result<HumanChoice> {
        Err(GameError::InvalidConfig(format!("no human input connected for {player}")))
    }
}

impl DiceCountChoiceProvider for NoHumanInput {
    fn choose_dice_count(&mut self, player: PlayerId, _board: Board) -> Result<u8> {
        Err(GameError::InvalidConfig(format!("no human input connected for {player}")))
    }
}

// =============================================================================
// Presentation
// =============================================================================

/// Failure reported by a presenter. Logged by the engine, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("presenter failed: {0}")]
pub struct PresentError(pub String);

/// Receives state changes for rendering.
pub trait Presenter {
    fn present(&mut self, event: &GameEvent) -> std::result::Result<(), PresentError>;
}

/// Hand `event` to `presenter`, logging and otherwise ignoring a failure.
pub(crate) fn notify(presenter: &mut dyn Presenter, event: &GameEvent) {
    if let Err(err) = presenter.present(event) {
        warn!("{err} while presenting: {event}");
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _event: &GameEvent) -> std::result::Result<(), PresentError> {
        Ok(())
    }
}

/// Writes every event as an `info` log line.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn present(&mut self, event: &GameEvent) -> std::result::Result<(), PresentError> {
        info!("{event}");
        Ok(())
    }
}

/// Keeps every event in order. Handy for replays and assertions.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<GameEvent>,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, event: &GameEvent) -> std::result::Result<(), PresentError> {
        self.events.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_dice_sequence() {
        let mut dice = FixedDice::new([7, 3]);
        assert_eq!(dice.roll(2), Ok(7));
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.roll(1), Ok(3));
        assert!(matches!(dice.roll(2), Err(GameError::DiceUnavailable(_))));
    }

    #[test]
    fn test_fixed_dice_rejects_bad_count() {
        let mut dice = FixedDice::new([4]);
        assert_eq!(dice.roll(3), Err(GameError::InvalidDiceCount(3)));
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn test_rng_dice_provider() {
        let mut rng = GameRng::new(8);
        let sum = DiceProvider::roll(&mut rng, 2).unwrap();
        assert!((2..=12).contains(&sum));
        assert_eq!(DiceProvider::roll(&mut rng, 0), Err(GameError::InvalidDiceCount(0)));
    }

    #[test]
    fn test_no_human_input_errors() {
        let mut input = NoHumanInput;
        assert!(input.choose_dice_count(PlayerId::new(0), Board::full()).is_err());
        assert!(input
            .choose_combination(PlayerId::new(0), Board::full(), 5, &[])
            .is_err());
    }

    #[test]
    fn test_recording_presenter() {
        let mut presenter = RecordingPresenter::default();
        let event = GameEvent::PerfectClose { player: PlayerId::new(0) };
        presenter.present(&event).unwrap();
        assert_eq!(presenter.events, vec![event]);
    }
}
