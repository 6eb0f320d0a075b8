//! The flip-compare-resolve protocol.
//!
//! `MemoryGame` owns everything mutable in a play-through: the board, the
//! flipped-card reference, the pending judgment, timer, counter, and
//! completion tracker. All transitions happen on one logical timeline;
//! every entry point takes `now`, a timestamp on the host's monotonic
//! clock.
//!
//! ## Protocol
//!
//! - First flip of a pair: `Idle -> Awaiting`, the card is recorded.
//! - Second flip: `Awaiting -> Judging`, the recorded card is cleared
//!   immediately and a judgment is scheduled for `now + judging_delay`.
//! - When the judgment is due, [`MemoryGame::tick`] resolves it: a matched
//!   pair is removed, a mismatch flips both cards back. `Judging -> Idle`,
//!   or `-> Finished` on the last pair.
//!
//! Flips are sampled, not buffered: flipping an already-flipped or removed
//! card is dropped, never queued. A hidden card flipped during the judging
//! window is a new sample, though — it starts the next pair while the
//! in-flight judgment waits, so judgments can stack up and resolve in
//! scheduling order. Disallowed transitions never surface as errors; the
//! player-facing contract is "nothing happens".
//!
//! There is no cancellation primitive for a scheduled judgment. Hosts that
//! drive resolution through their own timeout use
//! [`MemoryGame::resolve_judgment`], where a stale [`JudgmentToken`] is
//! ignored, so a timeout firing into a game that already moved on is
//! harmless.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::Board;
use crate::cards::{CardDefinition, CardId};
use crate::core::{EventSink, GameConfig, GameEvent, GameRng};
use crate::stats::{MoveCounter, Timer};

use super::completion::CompletionTracker;

/// Phase of the turn resolver's state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolverPhase {
    /// No card flipped.
    #[default]
    Idle,
    /// One card flipped, waiting for its partner.
    Awaiting,
    /// At least one judgment scheduled, no card awaiting a partner.
    Judging,
    /// All pairs matched. Terminal.
    Finished,
}

/// Identity of one scheduled judgment.
///
/// Tokens increase monotonically per game; a token that no longer matches
/// the pending judgment is stale and gets ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JudgmentToken(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct PendingJudgment {
    token: JudgmentToken,
    first: CardId,
    second: CardId,
    due_at: Duration,
}

/// Result of a flip attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// The flip was rejected (wrong face state, game finished, or unknown
    /// card). Nothing changed.
    Ignored,
    /// First card of a pair; waiting for the second.
    Awaiting,
    /// Second card of a pair; judgment scheduled.
    Judging {
        /// Identity of the scheduled judgment.
        token: JudgmentToken,
        /// When the judgment becomes due.
        due_at: Duration,
    },
}

/// Request to show the description popup for a matched pair.
///
/// The engine pauses the timer when it hands this out; the host presents
/// the popup and calls [`MemoryGame::popup_closed`] as the continuation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupRequest {
    /// Description text of the matched pair.
    pub description: String,
    /// Image reference of the matched pair, if any.
    pub image: Option<String>,
}

/// Outcome of a resolved judgment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The two cards were mates; both removed.
    Matched {
        /// The first-flipped card.
        first: CardId,
        /// The second-flipped card.
        second: CardId,
        /// Did this pair finish the game?
        finished: bool,
        /// Present when the matched pair carries a description.
        popup: Option<PopupRequest>,
        /// Show the completion feedback now (finished, no popup pending).
        feedback: bool,
    },
    /// Not mates; both flipped back face down.
    Mismatched {
        /// The first-flipped card.
        first: CardId,
        /// The second-flipped card.
        second: CardId,
    },
}

/// One play-through of a pair-matching game.
///
/// ```
/// use std::time::Duration;
/// use pair_match::cards::CardDefinition;
/// use pair_match::core::{GameConfig, GameRng, NullSink};
/// use pair_match::session::{FlipOutcome, MemoryGame};
///
/// let defs = vec![CardDefinition::new("a.png"), CardDefinition::new("b.png")];
/// let mut game = MemoryGame::new(
///     &defs,
///     0,
///     GameConfig::default(),
///     &mut GameRng::new(42),
///     NullSink,
/// );
///
/// let first = game.board().cards().next().unwrap().id;
/// assert_eq!(game.flip(first, Duration::ZERO), FlipOutcome::Awaiting);
/// ```
pub struct MemoryGame<S: EventSink> {
    board: Board,
    config: GameConfig,
    phase: ResolverPhase,
    flipped: Option<CardId>,
    pending: VecDeque<PendingJudgment>,
    next_token: u64,
    popup_open: bool,
    presented: bool,
    timer: Timer,
    counter: MoveCounter,
    completion: CompletionTracker,
    events: S,
}

impl<S: EventSink> MemoryGame<S> {
    /// Build a game: validate definitions, pair and shuffle the deck, and
    /// wire up the session state.
    ///
    /// `instance_tag` is an opaque token threaded to every card for
    /// rendering collaborators. An input with no valid definitions yields
    /// an empty board; such a game never starts and never finishes.
    #[must_use]
    pub fn new(
        defs: &[CardDefinition],
        instance_tag: u32,
        config: GameConfig,
        rng: &mut GameRng,
        events: S,
    ) -> Self {
        let board = Board::build(defs, instance_tag, rng);
        let completion = CompletionTracker::new(board.len());
        let timer = Timer::new(config.tick_granularity);

        Self {
            board,
            config,
            phase: ResolverPhase::Idle,
            flipped: None,
            pending: VecDeque::new(),
            next_token: 0,
            popup_open: false,
            presented: false,
            timer,
            counter: MoveCounter::new(),
            completion,
            events,
        }
    }

    /// Mark the game as presented to the player.
    ///
    /// Emits `Attempted` the first time; idempotent on repeat.
    pub fn present(&mut self) {
        if !self.presented {
            self.presented = true;
            self.events.emit(GameEvent::Attempted);
        }
    }

    /// Attempt to flip a card.
    ///
    /// An accepted flip emits `Interacted`, starts or resumes the timer,
    /// and increments the move counter. Rejections are silent no-ops.
    ///
    /// A hidden card flipped while a judgment is pending is accepted as
    /// the first card of the next pair; the in-flight judgment is already
    /// detached from the flipped-card reference and cannot be disturbed.
    pub fn flip(&mut self, card: CardId, now: Duration) -> FlipOutcome {
        if self.phase == ResolverPhase::Finished {
            trace!(%card, "flip ignored: game finished");
            return FlipOutcome::Ignored;
        }

        let Some(target) = self.board.card_mut(card) else {
            debug!(%card, "flip ignored: no such card");
            return FlipOutcome::Ignored;
        };
        if let Err(err) = target.flip() {
            debug!(%err, "flip ignored");
            return FlipOutcome::Ignored;
        }

        self.events.emit(GameEvent::Interacted { card });
        self.timer.play(now);
        self.counter.increment();

        match self.flipped.take() {
            None => {
                self.flipped = Some(card);
                self.phase = ResolverPhase::Awaiting;
                FlipOutcome::Awaiting
            }
            Some(first) => {
                // Cleared above via take(); a stray flip during the
                // judging window cannot be attributed to this pair.
                let token = JudgmentToken(self.next_token);
                self.next_token += 1;
                let due_at = now + self.config.judging_delay;
                self.pending.push_back(PendingJudgment {
                    token,
                    first,
                    second: card,
                    due_at,
                });
                self.phase = ResolverPhase::Judging;
                debug!(token = token.0, %first, second = %card, "judgment scheduled");
                FlipOutcome::Judging { token, due_at }
            }
        }
    }

    /// Drive the deferred judgments.
    ///
    /// Resolves the oldest pending judgment once its delay has elapsed;
    /// returns `None` while nothing is due. Judgments resolve in
    /// scheduling order, one per call.
    pub fn tick(&mut self, now: Duration) -> Option<Resolution> {
        let front = self.pending.front()?;
        if now < front.due_at {
            return None;
        }
        let token = front.token;
        self.resolve_judgment(token, now)
    }

    /// Resolve the judgment identified by `token`.
    ///
    /// For hosts that schedule their own timeout instead of polling
    /// [`tick`](Self::tick). A token that matches no pending judgment is
    /// stale and ignored.
    pub fn resolve_judgment(&mut self, token: JudgmentToken, now: Duration) -> Option<Resolution> {
        let Some(index) = self.pending.iter().position(|p| p.token == token) else {
            debug!(token = token.0, "stale judgment token ignored");
            return None;
        };
        let PendingJudgment { first, second, .. } = self.pending.remove(index)?;

        let resolution = if self.board.are_mates(first, second) {
            self.resolve_match(first, second, now)
        } else {
            debug!(%first, %second, "mismatch, flipping back");
            if let Some(card) = self.board.card_mut(first) {
                card.flip_back();
            }
            if let Some(card) = self.board.card_mut(second) {
                card.flip_back();
            }
            Resolution::Mismatched { first, second }
        };
        self.settle_phase();
        Some(resolution)
    }

    /// Recompute the phase after a judgment resolves.
    fn settle_phase(&mut self) {
        self.phase = if self.completion.is_finished() {
            ResolverPhase::Finished
        } else if self.flipped.is_some() {
            ResolverPhase::Awaiting
        } else if !self.pending.is_empty() {
            ResolverPhase::Judging
        } else {
            ResolverPhase::Idle
        };
    }

    fn resolve_match(&mut self, first: CardId, second: CardId, now: Duration) -> Resolution {
        if let Some(card) = self.board.card_mut(first) {
            card.remove();
        }
        if let Some(card) = self.board.card_mut(second) {
            card.remove();
        }

        self.completion.record_pair_removed();
        let finished = self.completion.is_finished();
        if let Some(outcome) = self.completion.take_scored_outcome() {
            debug!("game completed");
            self.events.emit(GameEvent::Scored(outcome));
        }

        let description = self
            .board
            .card(first)
            .and_then(|c| c.description())
            .map(str::to_owned);

        let (popup, feedback) = if let Some(description) = description {
            // Timer pauses while the popup is visible; popup_closed is the
            // continuation.
            self.timer.pause(now);
            self.popup_open = true;
            let image = self
                .board
                .card(first)
                .and_then(|c| c.image())
                .map(str::to_owned);
            (Some(PopupRequest { description, image }), false)
        } else if finished {
            self.timer.stop(now);
            (None, true)
        } else {
            (None, false)
        };

        debug!(%first, %second, finished, "pair matched");
        Resolution::Matched {
            first,
            second,
            finished,
            popup,
            feedback,
        }
    }

    /// Continuation for the description popup.
    ///
    /// Resumes the timer, or stops it and returns `true` (show the
    /// completion feedback) when the game finished behind the popup.
    /// No-op when no popup is open.
    pub fn popup_closed(&mut self, now: Duration) -> bool {
        if !self.popup_open {
            return false;
        }
        self.popup_open = false;

        if self.phase == ResolverPhase::Finished {
            self.timer.stop(now);
            true
        } else {
            self.timer.play(now);
            false
        }
    }

    /// The board for this game.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current resolver phase.
    #[must_use]
    pub fn phase(&self) -> ResolverPhase {
        self.phase
    }

    /// Have all pairs been matched?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == ResolverPhase::Finished
    }

    /// Cards removed so far.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.completion.removed()
    }

    /// Number of individual card turns.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.counter.value()
    }

    /// Accumulated play time as of `now`.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        self.timer.elapsed(now)
    }

    /// The session timer.
    #[must_use]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// The oldest pending judgment, if any is scheduled.
    #[must_use]
    pub fn pending_judgment(&self) -> Option<(JudgmentToken, Duration)> {
        self.pending.front().map(|p| (p.token, p.due_at))
    }

    /// The event sink, for hosts that need it back.
    #[must_use]
    pub fn event_sink(&self) -> &S {
        &self.events
    }
}
