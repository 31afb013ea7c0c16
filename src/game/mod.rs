//! Game orchestration: rounds, scores and the winner.
//!
//! Build a `GameEngine` with `GameBuilder` (or from a `GameConfig`), then
//! `play` it with a human input provider and a presenter.

mod builder;
mod engine;
mod history;

pub use builder::GameBuilder;
pub use engine::GameEngine;
pub use history::{GameOutcome, RoundSummary, TurnRecord};
