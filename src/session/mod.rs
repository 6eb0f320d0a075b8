//! Session layer: the turn resolver and completion tracking.
//!
//! `MemoryGame` is the single owner of all mutable session state. The
//! flipped-card reference, pending judgment, counters, and timer are its
//! fields; nothing lives at module level.

pub mod completion;
pub mod resolver;

pub use completion::CompletionTracker;
pub use resolver::{
    FlipOutcome, JudgmentToken, MemoryGame, PopupRequest, Resolution, ResolverPhase,
};
