//! Core engine types: configuration, RNG, events.
//!
//! These are the game-agnostic building blocks. The matching rules live in
//! `session`; the card data lives in `cards` and `board`.

pub mod config;
pub mod events;
pub mod rng;

pub use config::{GameConfig, DEFAULT_JUDGING_DELAY, DEFAULT_TICK_GRANULARITY};
pub use events::{EventSink, GameEvent, NullSink, RecordingSink, ScoredOutcome};
pub use rng::GameRng;
