//! Engine events and the sink capability they flow through.
//!
//! The engine never renders or reports anything itself; it emits events to
//! an [`EventSink`] the host supplies at construction. The sink is a plain
//! capability held by composition, so hosts can forward events to whatever
//! analytics or UI layer they have.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A scored terminal outcome.
///
/// A memory game is pass/fail: the only outcome is a full clear, reported
/// as 1 of 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredOutcome {
    /// Achieved score.
    pub score: u32,
    /// Maximum achievable score.
    pub max_score: u32,
    /// Result verb, e.g. "completed".
    pub verb: String,
}

impl ScoredOutcome {
    /// The full-clear outcome: 1 of 1, "completed".
    #[must_use]
    pub fn completed() -> Self {
        Self {
            score: 1,
            max_score: 1,
            verb: "completed".to_string(),
        }
    }
}

/// An event emitted by the engine for external collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The game was first presented to the player.
    Attempted,

    /// The player flipped a card.
    Interacted {
        /// The card that was flipped.
        card: CardId,
    },

    /// All pairs were matched. Fired exactly once per game.
    Scored(ScoredOutcome),
}

/// Capability for receiving engine events.
pub trait EventSink {
    /// Receive one event.
    fn emit(&mut self, event: GameEvent);
}

/// Sink that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Sink that records events in order.
///
/// Useful in tests and for hosts that batch-forward analytics.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Recorded events, oldest first.
    pub events: Vec<GameEvent>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count recorded events matching a predicate.
    #[must_use]
    pub fn count_matching(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
