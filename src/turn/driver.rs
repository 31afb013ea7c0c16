//! Runs a `TurnMachine` to completion against live collaborators.

use log::info;

use super::decider::Decider;
use super::machine::{TurnMachine, TurnOutcome, TurnState};
use crate::core::{Board, PlayerId, Result};
use crate::events::GameEvent;
use crate::interface::{providers::notify, DiceProvider, Presenter};

/// Play one whole turn for `player` starting from `board`.
///
/// Dice come from `dice`, decisions from `decider`. Each transition is
/// reported to `presenter` once it has happened. Errors from the dice or the
/// decider abort the turn.
pub fn play_turn(
    player: PlayerId,
    board: Board,
    dice: &mut dyn DiceProvider,
    decider: &mut dyn Decider,
    presenter: &mut dyn Presenter,
) -> Result<TurnOutcome> {
    let mut turn = TurnMachine::new(player, board);
    notify(presenter, &GameEvent::TurnStarted { player, board });

    loop {
        match turn.state() {
            TurnState::AwaitingDiceCountChoice => {
                let count = if decider.single_die(player, turn.board())? { 1 } else { 2 };
                turn.choose_dice(count)?;
            }
            TurnState::AwaitingRoll { dice: count } => {
                let count = *count;
                let sum = dice.roll(count)?;
                turn.apply_roll(sum)?;
                notify(presenter, &GameEvent::DiceRolled { player, dice: count, sum });
            }
            TurnState::AwaitingCombinationChoice { roll, candidates } => {
                match decider.decide(player, turn.board(), *roll, candidates)? {
                    Some(combination) => {
                        turn.close(combination)?;
                        notify(
                            presenter,
                            &GameEvent::NumbersClosed {
                                player,
                                combination,
                                board: turn.board(),
                            },
                        );
                    }
                    None => {
                        turn.end_turn()?;
                    }
                }
            }
            TurnState::TurnEnded { .. } | TurnState::PerfectClose => break,
        }
    }

    let outcome = turn.into_outcome()?;
    info!("{player} turn over: {:?}, score {}", outcome.end, outcome.score);
    let event = if outcome.is_perfect() {
        GameEvent::PerfectClose { player }
    } else {
        GameEvent::TurnEnded {
            player,
            score: outcome.score,
            board: outcome.board,
        }
    };
    notify(presenter, &event);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::core::{GameError, GameRng};
    use crate::interface::{FixedDice, RecordingPresenter};
    use crate::turn::decider::AiDecider;
    use crate::turn::machine::TurnEnd;

    #[test]
    fn test_ai_turn_with_fixed_dice() {
        // 12 -> [1, 2, 9], 8 -> [8], 7 -> [7], then single die: 3 -> [3], 6 -> [6], 3 -> nothing
        let mut dice = FixedDice::new([12, 8, 7, 3, 6, 3]);
        let mut rng = GameRng::new(0);
        let mut ai = AiDecider::new(Difficulty::Hard, &mut rng);
        let mut presenter = RecordingPresenter::default();

        let outcome =
            play_turn(PlayerId::new(1), Board::full(), &mut dice, &mut ai, &mut presenter).unwrap();

        assert_eq!(outcome.end, TurnEnd::NoCombination);
        assert_eq!(outcome.board.open_numbers().as_slice(), &[4, 5]);
        assert_eq!(outcome.score, 9);
        assert_eq!(outcome.rolls, vec![12, 8, 7, 3, 6, 3]);
        assert_eq!(outcome.closed.len(), 5);
        assert_eq!(dice.remaining(), 0);

        let single_die_rolls = presenter
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::DiceRolled { dice: 1, .. }))
            .count();
        assert_eq!(single_die_rolls, 3);
        assert!(presenter.events.last().unwrap().is_turn_end());
    }

    #[test]
    fn test_dice_failure_aborts_turn() {
        let mut dice = FixedDice::new(Vec::new());
        let mut rng = GameRng::new(0);
        let mut ai = AiDecider::new(Difficulty::Easy, &mut rng);
        let mut presenter = RecordingPresenter::default();

        let err = play_turn(PlayerId::new(0), Board::full(), &mut dice, &mut ai, &mut presenter)
            .unwrap_err();
        assert!(matches!(err, GameError::DiceUnavailable(_)));
    }
}
