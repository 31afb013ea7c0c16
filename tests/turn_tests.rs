//! Turn state machine, end to end.
//!
//! Dice are fixed sequences and human answers are scripted, so every turn is
//! fully determined by the test.

use std::collections::VecDeque;

use dont_shut_the_box::core::{Board, Combination, GameError, GameRng, PlayerId, Result};
use dont_shut_the_box::interface::{
    DiceCountChoiceProvider, FixedDice, HumanChoice, HumanChoiceProvider, NullPresenter,
    PresentError, Presenter, RecordingPresenter,
};
use dont_shut_the_box::turn::{play_turn, AiDecider, HumanDecider, TurnEnd, TurnMachine, TurnState};
use dont_shut_the_box::{Difficulty, GameEvent};

const P0: PlayerId = PlayerId::new(0);

fn board(numbers: &[u8]) -> Board {
    Board::from_numbers(numbers).unwrap()
}

fn c(numbers: &[u8]) -> Combination {
    Combination::from_numbers(numbers).unwrap()
}

/// Human whose answers are read off queues.
#[derive(Default)]
struct ScriptedHuman {
    dice: VecDeque<u8>,
    choices: VecDeque<HumanChoice>,
    offered: Vec<Vec<Combination>>,
}

impl HumanChoiceProvider for ScriptedHuman {
    fn choose_combination(
        &mut self,
        _player: PlayerId,
        _board: Board,
        _roll: u8,
        candidates: &[Combination],
    ) -> Result<HumanChoice> {
        self.offered.push(candidates.to_vec());
        self.choices
            .pop_front()
            .ok_or_else(|| GameError::InvalidConfig("script ran out of choices".into()))
    }
}

impl DiceCountChoiceProvider for ScriptedHuman {
    fn choose_dice_count(&mut self, _player: PlayerId, _board: Board) -> Result<u8> {
        self.dice
            .pop_front()
            .ok_or_else(|| GameError::InvalidConfig("script ran out of dice answers".into()))
    }
}

/// Presenter that always fails.
struct BrokenPresenter;

impl Presenter for BrokenPresenter {
    fn present(&mut self, _event: &GameEvent) -> std::result::Result<(), PresentError> {
        Err(PresentError("screen unplugged".into()))
    }
}

// =============================================================================
// Machine
// =============================================================================

/// Clearing the board ends the turn with a perfect close worth 0.
#[test]
fn test_perfect_close_scores_zero() {
    let mut turn = TurnMachine::new(P0, board(&[4, 5]));
    assert_eq!(turn.state(), &TurnState::AwaitingDiceCountChoice);

    turn.choose_dice(2).unwrap();
    turn.apply_roll(9).unwrap();
    assert_eq!(turn.close(c(&[4, 5])).unwrap(), &TurnState::PerfectClose);

    let outcome = turn.into_outcome().unwrap();
    assert_eq!(outcome.end, TurnEnd::PerfectClose);
    assert_eq!(outcome.score, 0);
}

/// No combination for the roll: the turn scores every open number.
#[test]
fn test_dead_roll_scores_open_numbers() {
    let mut turn = TurnMachine::new(P0, board(&[6, 8, 9]));
    assert_eq!(turn.apply_roll(5).unwrap(), &TurnState::TurnEnded { score: 23 });
    assert_eq!(turn.score(), Some(23));
}

/// A close that fails leaves the board and state untouched.
#[test]
fn test_failed_close_changes_nothing() {
    let mut turn = TurnMachine::new(P0, board(&[1, 2, 3, 9]));
    turn.apply_roll(4).unwrap();
    let before = turn.state().clone();

    // [4] adds up but 4 is not open
    assert_eq!(turn.close(c(&[4])), Err(GameError::NumberNotOpen(4)));
    assert_eq!(turn.state(), &before);
    assert_eq!(turn.board(), board(&[1, 2, 3, 9]));
}

/// Operations out of order are rejected.
#[test]
fn test_out_of_order_operations() {
    let mut turn = TurnMachine::new(P0, Board::full());
    assert!(matches!(turn.close(c(&[5])), Err(GameError::InvalidState { .. })));
    assert!(matches!(turn.end_turn(), Err(GameError::InvalidState { .. })));

    turn.apply_roll(5).unwrap();
    assert!(matches!(turn.apply_roll(5), Err(GameError::InvalidState { .. })));
}

// =============================================================================
// Driver
// =============================================================================

/// Human picks, rolls a single die once eligible, and clears the board.
#[test]
fn test_human_shuts_the_box() {
    // board 1,2,3,7,8,9:
    //   roll 9 -> close [9]; roll 8 -> [8]; roll 7 -> [7]
    //   eligible now, human takes one die: roll 6 -> [1, 2, 3]
    let mut dice = FixedDice::new([9, 8, 7, 6]);
    let mut human = ScriptedHuman {
        dice: VecDeque::from(vec![1]),
        ..Default::default()
    };
    let mut presenter = RecordingPresenter::default();

    // Candidate lists are sorted; pick the one we want by position.
    let wanted = [c(&[9]), c(&[8]), c(&[7]), c(&[1, 2, 3])];
    let mut boards = vec![board(&[1, 2, 3, 7, 8, 9])];
    for w in &wanted[..3] {
        let mut next = *boards.last().unwrap();
        next.close(w).unwrap();
        boards.push(next);
    }
    for (w, b) in wanted.iter().zip(&boards) {
        let candidates = dont_shut_the_box::solve(w.sum(), *b);
        let idx = candidates.iter().position(|x| x == w).unwrap();
        human.choices.push_back(HumanChoice::Close(idx));
    }

    let mut decider = HumanDecider::new(&mut human);
    let outcome = play_turn(
        P0,
        board(&[1, 2, 3, 7, 8, 9]),
        &mut dice,
        &mut decider,
        &mut presenter,
    )
    .unwrap();

    assert!(outcome.is_perfect());
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.closed, wanted.to_vec());
    assert_eq!(presenter.events.last(), Some(&GameEvent::PerfectClose { player: P0 }));
    assert!(presenter
        .events
        .contains(&GameEvent::DiceRolled { player: P0, dice: 1, sum: 6 }));
}

/// Human stops early although combinations exist.
#[test]
fn test_human_stops_early() {
    let mut dice = FixedDice::new([6]);
    let mut human = ScriptedHuman {
        choices: VecDeque::from(vec![HumanChoice::EndTurn]),
        ..Default::default()
    };

    let mut decider = HumanDecider::new(&mut human);
    let outcome =
        play_turn(P0, Board::full(), &mut dice, &mut decider, &mut NullPresenter).unwrap();

    assert_eq!(outcome.end, TurnEnd::Stopped);
    assert_eq!(outcome.score, 45);
    assert_eq!(human.offered.len(), 1);
    assert_eq!(human.offered[0][0], c(&[6]));
}

/// Human declining the single die rolls two.
#[test]
fn test_human_declines_single_die() {
    let mut dice = FixedDice::new([11]);
    let mut human = ScriptedHuman {
        dice: VecDeque::from(vec![2]),
        ..Default::default()
    };
    let mut presenter = RecordingPresenter::default();

    let mut decider = HumanDecider::new(&mut human);
    let outcome =
        play_turn(P0, board(&[1, 2, 3]), &mut dice, &mut decider, &mut presenter).unwrap();

    assert_eq!(outcome.end, TurnEnd::NoCombination);
    assert_eq!(outcome.score, 6);
    assert!(presenter
        .events
        .contains(&GameEvent::DiceRolled { player: P0, dice: 2, sum: 11 }));
}

/// A human asking for three dice is a contract violation.
#[test]
fn test_human_three_dice_rejected() {
    let mut dice = FixedDice::new([3]);
    let mut human = ScriptedHuman {
        dice: VecDeque::from(vec![3]),
        ..Default::default()
    };

    let mut decider = HumanDecider::new(&mut human);
    let err = play_turn(P0, board(&[1, 2]), &mut dice, &mut decider, &mut NullPresenter)
        .unwrap_err();
    assert_eq!(err, GameError::InvalidDiceCount(3));
}

/// A failing presenter does not change the result.
#[test]
fn test_presenter_failure_ignored() {
    let run = |presenter: &mut dyn Presenter| {
        let mut dice = FixedDice::new([10, 9, 2]);
        let mut rng = GameRng::new(4);
        let mut ai = AiDecider::new(Difficulty::Hard, &mut rng);
        play_turn(P0, Board::full(), &mut dice, &mut ai, presenter).unwrap()
    };

    let quiet = run(&mut NullPresenter);
    let broken = run(&mut BrokenPresenter);
    assert_eq!(quiet, broken);
}
