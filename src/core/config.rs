//! Engine configuration.
//!
//! The protocol timings are configuration, not convention: hosts tune them
//! at construction and the engine never reads a clock of its own.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default judging window: long enough for the player to register both
/// faces before resolution.
pub const DEFAULT_JUDGING_DELAY: Duration = Duration::from_millis(800);

/// Default timer notification granularity for UI polling.
pub const DEFAULT_TICK_GRANULARITY: Duration = Duration::from_millis(100);

/// Tuning knobs for a game instance.
///
/// ```
/// use std::time::Duration;
/// use pair_match::core::GameConfig;
///
/// let config = GameConfig::new().with_judging_delay(Duration::from_millis(250));
/// assert_eq!(config.judging_delay, Duration::from_millis(250));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Delay between the second flip of a pair and automatic resolution.
    pub judging_delay: Duration,

    /// Granularity of the timer's periodic notification ticks.
    pub tick_granularity: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            judging_delay: DEFAULT_JUDGING_DELAY,
            tick_granularity: DEFAULT_TICK_GRANULARITY,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the judging delay (builder pattern).
    #[must_use]
    pub fn with_judging_delay(mut self, delay: Duration) -> Self {
        self.judging_delay = delay;
        self
    }

    /// Set the timer tick granularity (builder pattern).
    #[must_use]
    pub fn with_tick_granularity(mut self, granularity: Duration) -> Self {
        self.tick_granularity = granularity;
        self
    }
}
