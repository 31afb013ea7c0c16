//! Round and game orchestration.
//!
//! A round resets every board, has each player roll two dice to pick the
//! starter, then gives every player exactly one turn in seat rotation from
//! the starter. Turn scores are added to cumulative totals. After the
//! configured number of rounds the lowest total wins.

use im::Vector;
use log::{debug, info};

use super::history::{GameOutcome, RoundSummary, TurnRecord};
use crate::core::{
    GameConfig, GameError, GameRng, Player, PlayerId, PlayerKind, PlayerMap, Result,
};
use crate::events::GameEvent;
use crate::interface::{providers::notify, DiceProvider, HumanInput, Presenter};
use crate::turn::{play_turn, AiDecider, HumanDecider, TurnOutcome};

/// Owns the players and drives rounds.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    players: PlayerMap<Player>,
    /// Dice stream used by [`GameEngine::play`].
    dice_rng: GameRng,
    /// Separate stream for AI choices so they never shift the dice.
    ai_rng: GameRng,
    rounds: Vector<RoundSummary>,
    turns: Vector<TurnRecord>,
}

impl GameEngine {
    /// Create an engine for a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let players = PlayerMap::from_vec(
            config
                .players
                .iter()
                .enumerate()
                .map(|(i, p)| Player::new(PlayerId::new(i as u8), p.name.clone(), p.kind))
                .collect(),
        );
        let root = GameRng::new(config.seed);

        Ok(Self {
            dice_rng: root.for_context("dice"),
            ai_rng: root.for_context("ai"),
            config,
            players,
            rounds: Vector::new(),
            turns: Vector::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Cumulative scores, in seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.players.values().map(Player::score).collect()
    }

    /// Rounds completed so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds.len() as u32
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.rounds_played() >= self.config.rounds
    }

    #[must_use]
    pub fn rounds(&self) -> &Vector<RoundSummary> {
        &self.rounds
    }

    #[must_use]
    pub fn turns(&self) -> &Vector<TurnRecord> {
        &self.turns
    }

    /// Lowest cumulative score; the earliest seat wins a tie.
    #[must_use]
    pub fn leader(&self) -> PlayerId {
        self.players
            .iter()
            .min_by_key(|(_, p)| p.score())
            .map(|(id, _)| id)
            .unwrap_or(PlayerId::new(0))
    }

    /// Play every remaining round with the engine's own seeded dice.
    pub fn play(
        &mut self,
        human: &mut dyn HumanInput,
        presenter: &mut dyn Presenter,
    ) -> Result<GameOutcome> {
        let mut dice = self.dice_rng.clone();
        let result = self.play_with_dice(&mut dice, human, presenter);
        self.dice_rng = dice;
        result
    }

    /// Play every remaining round with an external dice source.
    pub fn play_with_dice(
        &mut self,
        dice: &mut dyn DiceProvider,
        human: &mut dyn HumanInput,
        presenter: &mut dyn Presenter,
    ) -> Result<GameOutcome> {
        while !self.is_over() {
            self.play_round(dice, &mut *human, presenter)?;
        }

        let outcome = self.outcome()?;
        info!(
            "game over after {} rounds: {} wins with {:?}",
            self.rounds_played(),
            outcome.winner,
            outcome.scores
        );
        notify(
            presenter,
            &GameEvent::GameOver {
                winner: outcome.winner,
                scores: outcome.scores.clone(),
            },
        );
        Ok(outcome)
    }

    /// Play the next round.
    ///
    /// On error the round is not recorded: totals, turn history and the
    /// round count are as they were, so the round can be played again.
    pub fn play_round(
        &mut self,
        dice: &mut dyn DiceProvider,
        human: &mut dyn HumanInput,
        presenter: &mut dyn Presenter,
    ) -> Result<RoundSummary> {
        if self.is_over() {
            return Err(GameError::InvalidState {
                expected: "rounds remaining",
                found: "game over",
            });
        }
        let round = self.rounds_played() + 1;

        for (_, player) in self.players.iter_mut() {
            player.reset_board();
        }
        notify(presenter, &GameEvent::RoundStarted { round, rounds: self.config.rounds });

        let (starter, starting_rolls) = self.roll_for_start(dice, presenter)?;
        let mut outcomes = Vec::with_capacity(self.player_count());
        for id in starter.rotation(self.player_count()) {
            outcomes.push(self.take_turn(id, dice, &mut *human, presenter)?);
        }

        // Scores and history only change once every turn of the round is in.
        let mut scores = vec![0; self.player_count()];
        for outcome in outcomes {
            let player = &mut self.players[outcome.player];
            player.board = outcome.board;
            player.add_score(outcome.score);
            scores[outcome.player.index()] = outcome.score;
            self.turns.push_back(TurnRecord { round, outcome });
        }

        let summary = RoundSummary {
            round,
            starting_rolls,
            starter,
            scores,
            totals: self.scores(),
        };
        info!("round {round} done: {:?} (totals {:?})", summary.scores, summary.totals);
        notify(
            presenter,
            &GameEvent::RoundEnded {
                round,
                scores: summary.totals.clone(),
            },
        );
        self.rounds.push_back(summary.clone());
        Ok(summary)
    }

    /// Each seat rolls two dice; the strictly highest starts, the earliest
    /// seat taking any tie.
    pub fn roll_for_start(
        &self,
        dice: &mut dyn DiceProvider,
        presenter: &mut dyn Presenter,
    ) -> Result<(PlayerId, Vec<u8>)> {
        let mut rolls = Vec::with_capacity(self.player_count());
        let mut starter = PlayerId::new(0);
        let mut best = 0;

        for (id, _) in self.players.iter() {
            let sum = dice.roll(2)?;
            notify(presenter, &GameEvent::StartingRoll { player: id, sum });
            if sum > best {
                best = sum;
                starter = id;
            }
            rolls.push(sum);
        }

        debug!("starting rolls {rolls:?}, {starter} goes first");
        notify(presenter, &GameEvent::StartingPlayer { player: starter });
        Ok((starter, rolls))
    }

    /// Result of a finished game.
    pub fn outcome(&self) -> Result<GameOutcome> {
        if !self.is_over() {
            return Err(GameError::InvalidState {
                expected: "game over",
                found: "rounds remaining",
            });
        }
        Ok(GameOutcome {
            winner: self.leader(),
            names: self.players.values().map(|p| p.name.clone()).collect(),
            scores: self.scores(),
            rounds: self.rounds.clone(),
            turns: self.turns.clone(),
        })
    }

    fn take_turn(
        &mut self,
        id: PlayerId,
        dice: &mut dyn DiceProvider,
        human: &mut dyn HumanInput,
        presenter: &mut dyn Presenter,
    ) -> Result<TurnOutcome> {
        let board = self.players[id].board;
        match self.players[id].kind {
            PlayerKind::Human => {
                let mut decider = HumanDecider::new(human);
                play_turn(id, board, dice, &mut decider, presenter)
            }
            PlayerKind::Ai(difficulty) => {
                let mut decider = AiDecider::new(difficulty, &mut self.ai_rng);
                play_turn(id, board, dice, &mut decider, presenter)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::core::PlayerConfig;
    use crate::interface::{FixedDice, NoHumanInput, NullPresenter, RecordingPresenter};

    fn ai_config(rounds: u32, seed: u64) -> GameConfig {
        GameConfig::new(seed)
            .with_rounds(rounds)
            .with_player(PlayerConfig::ai("Easy", Difficulty::Easy))
            .with_player(PlayerConfig::ai("Hard", Difficulty::Hard))
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert!(GameEngine::new(ai_config(0, 1)).is_err());
    }

    #[test]
    fn test_start_roll_highest_wins() {
        let engine = GameEngine::new(ai_config(1, 1)).unwrap();
        let mut dice = FixedDice::new([4, 9]);
        let (starter, rolls) = engine.roll_for_start(&mut dice, &mut NullPresenter).unwrap();
        assert_eq!(starter, PlayerId::new(1));
        assert_eq!(rolls, vec![4, 9]);
    }

    #[test]
    fn test_start_roll_tie_goes_to_earliest_seat() {
        let engine = GameEngine::new(ai_config(1, 1)).unwrap();
        let mut dice = FixedDice::new([7, 7]);
        let (starter, _) = engine.roll_for_start(&mut dice, &mut NullPresenter).unwrap();
        assert_eq!(starter, PlayerId::new(0));
    }

    #[test]
    fn test_round_with_fixed_dice() {
        let mut engine = GameEngine::new(ai_config(1, 1)).unwrap();
        // start: 3 vs 10, seat 1 goes first
        // each seat: 2 closes [2], a second 2 has no answer, 43 left open
        let mut dice = FixedDice::new([3, 10, 2, 2, 2, 2]);
        let mut presenter = RecordingPresenter::default();

        let summary = engine
            .play_round(&mut dice, &mut NoHumanInput, &mut presenter)
            .unwrap();

        assert_eq!(summary.starter, PlayerId::new(1));
        assert_eq!(summary.scores, vec![43, 43]);
        assert_eq!(engine.scores(), vec![43, 43]);
        assert_eq!(engine.turns()[0].outcome.player, PlayerId::new(1));
        assert!(engine.is_over());
    }

    #[test]
    fn test_failed_round_leaves_totals_alone() {
        let mut engine = GameEngine::new(ai_config(1, 1)).unwrap();
        // seat 1 finishes its turn, seat 0 runs out of dice mid-turn
        let mut dice = FixedDice::new([3, 10, 2, 2, 2]);
        let err = engine
            .play_round(&mut dice, &mut NoHumanInput, &mut NullPresenter)
            .unwrap_err();
        assert!(matches!(err, GameError::DiceUnavailable(_)));
        assert_eq!(engine.scores(), vec![0, 0]);
        assert!(engine.turns().is_empty());
        assert_eq!(engine.rounds_played(), 0);
    }

    #[test]
    fn test_play_round_after_game_over() {
        let mut engine = GameEngine::new(ai_config(1, 1)).unwrap();
        engine.play(&mut NoHumanInput, &mut NullPresenter).unwrap();
        let err = engine
            .play_round(&mut FixedDice::new([6, 6]), &mut NoHumanInput, &mut NullPresenter)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidState { .. }));
    }

    #[test]
    fn test_outcome_before_end() {
        let engine = GameEngine::new(ai_config(2, 1)).unwrap();
        assert!(engine.outcome().is_err());
    }

    #[test]
    fn test_seeded_games_repeat() {
        let mut a = GameEngine::new(ai_config(3, 77)).unwrap();
        let mut b = GameEngine::new(ai_config(3, 77)).unwrap();

        let oa = a.play(&mut NoHumanInput, &mut NullPresenter).unwrap();
        let ob = b.play(&mut NoHumanInput, &mut NullPresenter).unwrap();
        assert_eq!(oa, ob);
    }

    #[test]
    fn test_human_seat_without_input_fails() {
        let config = GameConfig::new(3)
            .with_rounds(1)
            .with_player(PlayerConfig::human("Ada"))
            .with_player(PlayerConfig::ai("AI", Difficulty::Medium));
        let mut engine = GameEngine::new(config).unwrap();

        let err = engine.play(&mut NoHumanInput, &mut NullPresenter).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }
}
