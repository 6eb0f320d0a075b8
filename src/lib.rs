//! # pair-match
//!
//! A pair-matching ("memory") card game engine: build a shuffled board of
//! face-down card pairs, run the turn-by-turn flip/match protocol, track
//! play time and card turns, and detect completion.
//!
//! ## Design Principles
//!
//! 1. **State machine over callbacks**: the flip-compare-resolve protocol
//!    is an explicit resolver with named phases (`Idle`, `Awaiting`,
//!    `Judging`, `Finished`), not closures over shared variables.
//!
//! 2. **One logical timeline**: the engine never reads a clock. Every
//!    entry point takes `now`; the deferred mismatch judgment is a value
//!    the host drives via `tick` or a judgment token.
//!
//! 3. **Silent tolerance**: invalid definitions shrink the deck, invalid
//!    flips do nothing. The player-facing contract is "nothing happens",
//!    never a visible error.
//!
//! 4. **Presentation stays outside**: rendering, the description popup,
//!    and analytics are collaborators. The engine emits events through an
//!    [`EventSink`] and returns popup requests as data.
//!
//! ## Modules
//!
//! - `core`: configuration, seedable RNG, events
//! - `cards`: pair definitions and card instances
//! - `board`: the card arena, deck building and the one-shot shuffle
//! - `session`: the turn resolver and completion tracking
//! - `stats`: play-time timer and card-turn counter
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use pair_match::cards::CardDefinition;
//! use pair_match::core::{GameConfig, GameRng, RecordingSink};
//! use pair_match::session::{MemoryGame, Resolution};
//!
//! let defs = vec![CardDefinition::new("a.png")];
//! let mut game = MemoryGame::new(
//!     &defs,
//!     0,
//!     GameConfig::default(),
//!     &mut GameRng::new(42),
//!     RecordingSink::new(),
//! );
//! game.present();
//!
//! let ids: Vec<_> = game.board().cards().map(|c| c.id).collect();
//! game.flip(ids[0], Duration::ZERO);
//! game.flip(ids[1], Duration::from_millis(300));
//!
//! // The judgment fires after the configured delay (800 ms by default).
//! let resolution = game.tick(Duration::from_millis(1100)).unwrap();
//! assert!(matches!(resolution, Resolution::Matched { finished: true, .. }));
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    EventSink, GameConfig, GameEvent, GameRng, NullSink, RecordingSink, ScoredOutcome,
};

pub use crate::cards::{Card, CardDefinition, CardId, FaceState, InvalidTransition, MatchKey};

pub use crate::board::Board;

pub use crate::session::{
    CompletionTracker, FlipOutcome, JudgmentToken, MemoryGame, PopupRequest, Resolution,
    ResolverPhase,
};

pub use crate::stats::{MoveCounter, Timer};
