//! Play-time tracking.
//!
//! The timer never reads a clock. Every operation takes `now`, a timestamp
//! on the host's monotonic timeline (e.g. `Instant::now() - game_start`).
//! That keeps the whole engine on one logical timeline and makes the
//! pause/resume semantics exactly testable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Accumulating play-time timer with pause/resume and a terminal stop.
///
/// ```
/// use std::time::Duration;
/// use pair_match::stats::Timer;
///
/// let ms = Duration::from_millis;
/// let mut timer = Timer::new(ms(100));
///
/// timer.play(ms(0));
/// timer.pause(ms(500));
/// timer.play(ms(2000)); // popup was open for 1.5s
/// assert_eq!(timer.elapsed(ms(2300)), ms(800));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    accumulated: Duration,
    running_since: Option<Duration>,
    stopped: bool,
    granularity: Duration,
}

impl Timer {
    /// Create a paused timer with the given notification granularity.
    #[must_use]
    pub fn new(granularity: Duration) -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: None,
            stopped: false,
            granularity,
        }
    }

    /// Start or resume accumulating. No-op if already running or stopped.
    pub fn play(&mut self, now: Duration) {
        if self.stopped || self.running_since.is_some() {
            return;
        }
        self.running_since = Some(now);
    }

    /// Stop accumulating, retaining the elapsed value. No-op if not
    /// running.
    pub fn pause(&mut self, now: Duration) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += now.saturating_sub(since);
        }
    }

    /// Terminal pause. The timer can no longer be resumed.
    pub fn stop(&mut self, now: Duration) {
        self.pause(now);
        self.stopped = true;
    }

    /// Total accumulated play time as of `now`.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + now.saturating_sub(since),
            None => self.accumulated,
        }
    }

    /// Is the timer currently accumulating?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Has the timer been terminally stopped?
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Number of whole granularity intervals of play time elapsed.
    ///
    /// Convenience for UI polling: redraw when the value changes.
    #[must_use]
    pub fn ticks(&self, now: Duration) -> u64 {
        let granularity = self.granularity.as_millis().max(1);
        (self.elapsed(now).as_millis() / granularity) as u64
    }
}
