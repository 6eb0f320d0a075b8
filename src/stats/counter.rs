//! Card-turn counter.

use serde::{Deserialize, Serialize};

/// Counts individual card flips, regardless of match outcome.
///
/// A resolved pair contributes 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounter(u32);

impl MoveCounter {
    /// Create a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one card turn.
    pub fn increment(&mut self) {
        self.0 += 1;
    }

    /// Current count.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}
