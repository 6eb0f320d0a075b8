//! Completion tracking: removed cards against the board total.

use serde::{Deserialize, Serialize};

use crate::core::ScoredOutcome;

/// Derived completion state consulted by the turn resolver.
///
/// The scored outcome is yielded exactly once, the first time the finished
/// predicate becomes true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionTracker {
    total: usize,
    removed: usize,
    reported: bool,
}

impl CompletionTracker {
    /// Create a tracker for a board of `total` cards.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            removed: 0,
            reported: false,
        }
    }

    /// Record a matched pair leaving play.
    pub fn record_pair_removed(&mut self) {
        debug_assert!(self.removed + 2 <= self.total);
        self.removed += 2;
    }

    /// Cards removed so far. Increases only in pairs.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Have all pairs been matched?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.removed == self.total && self.total > 0
    }

    /// The scored outcome, the first time the game is finished.
    ///
    /// Returns `None` before completion and on every call after the first
    /// successful one.
    pub fn take_scored_outcome(&mut self) -> Option<ScoredOutcome> {
        if self.is_finished() && !self.reported {
            self.reported = true;
            Some(ScoredOutcome::completed())
        } else {
            None
        }
    }
}
