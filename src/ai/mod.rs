//! Computer opponents.
//!
//! Three difficulty tiers, each a [`ChoicePolicy`] over the solver's
//! candidate list.

pub mod policy;

pub use policy::{choose, ChoicePolicy, Difficulty, HighFirst, MostTiles, RandomChoice};
