//! Ancillary session statistics: play-time timer and card-turn counter.
//!
//! Both are driven only by the turn resolver; they hold no protocol logic
//! of their own.

pub mod counter;
pub mod timer;

pub use counter::MoveCounter;
pub use timer::Timer;
