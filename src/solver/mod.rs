//! Combination solver.
//!
//! Given a dice sum and a board, lists the combinations of open numbers a
//! player may close. Pure: no randomness, no state.

pub mod combinations;

pub use combinations::solve;
