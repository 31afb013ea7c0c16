//! AI policies for picking which combination to close.
//!
//! Policies are trait-based so each difficulty tier is its own type:
//! - `RandomChoice` (easy): any candidate, uniformly
//! - `MostTiles` (medium): a candidate closing the most numbers
//! - `HighFirst` (hard): deterministic, favours closing 7, 8 or 9
//!
//! A policy sees only the candidates and the RNG it is handed. It keeps no
//! memory of earlier turns.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Combination, GameError, GameRng, HIGH_NUMBERS};

// =============================================================================
// Difficulty
// =============================================================================

/// AI difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The policy implementing this tier.
    #[must_use]
    pub fn policy(self) -> &'static dyn ChoicePolicy {
        match self {
            Difficulty::Easy => &RandomChoice,
            Difficulty::Medium => &MostTiles,
            Difficulty::Hard => &HighFirst,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::InvalidConfig(format!("unknown difficulty '{other}'"))),
        }
    }
}

/// Pick a combination for `difficulty`, or `None` when there is nothing to
/// close and the turn must end.
pub fn choose(
    difficulty: Difficulty,
    candidates: &[Combination],
    rng: &mut GameRng,
) -> Option<Combination> {
    difficulty.policy().choose(candidates, rng)
}

// =============================================================================
// Policies
// =============================================================================

/// Strategy for choosing among candidate combinations.
pub trait ChoicePolicy: Send + Sync {
    /// Choose one of `candidates`, or `None` if it is empty.
    fn choose(&self, candidates: &[Combination], rng: &mut GameRng) -> Option<Combination>;
}

/// Easy tier: uniform over all candidates.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomChoice;

impl ChoicePolicy for RandomChoice {
    fn choose(&self, candidates: &[Combination], rng: &mut GameRng) -> Option<Combination> {
        rng.choose(candidates).copied()
    }
}

/// Medium tier: uniform over the candidates that close the most numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostTiles;

impl ChoicePolicy for MostTiles {
    fn choose(&self, candidates: &[Combination], rng: &mut GameRng) -> Option<Combination> {
        let best = largest(candidates);
        rng.choose(&best).copied()
    }
}

/// Hard tier.
///
/// 1. Keep only candidates containing 7, 8 or 9, if there are any.
/// 2. Of those, prefer the most numbers, then the highest sum.
/// 3. Remaining ties go to the lexicographically smallest combination.
///
/// Uses no randomness.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighFirst;

impl HighFirst {
    fn rank(a: &Combination, b: &Combination) -> Ordering {
        a.len()
            .cmp(&b.len())
            .then_with(|| a.sum().cmp(&b.sum()))
            .then_with(|| b.cmp(a))
    }
}

impl ChoicePolicy for HighFirst {
    fn choose(&self, candidates: &[Combination], _rng: &mut GameRng) -> Option<Combination> {
        let high: Vec<Combination> = candidates
            .iter()
            .copied()
            .filter(|c| c.contains_any(&HIGH_NUMBERS))
            .collect();
        let pool: &[Combination] = if high.is_empty() { candidates } else { &high };

        pool.iter().copied().max_by(Self::rank)
    }
}

fn largest(candidates: &[Combination]) -> Vec<Combination> {
    let Some(max_len) = candidates.iter().map(|c| c.len()).max() else {
        return Vec::new();
    };
    candidates
        .iter()
        .copied()
        .filter(|c| c.len() == max_len)
        .collect()
}
