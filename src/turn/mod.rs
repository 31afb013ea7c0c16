//! Turn state machine and the deciders that drive it.
//!
//! - `machine`: the pure `TurnMachine`, fed dice sums and choices
//! - `decider`: the `Decider` capability with human and AI implementations
//! - `driver`: `play_turn`, which runs a machine against live collaborators

pub mod decider;
pub mod driver;
pub mod machine;

pub use decider::{AiDecider, Decider, HumanDecider};
pub use driver::play_turn;
pub use machine::{TurnEnd, TurnMachine, TurnOutcome, TurnState};
