//! Events emitted by the engine for rendering.

pub mod event;

pub use event::GameEvent;
