//! Memory cards and their bonus timer.
//!
//! A card earns bonus points for being matched quickly. The clock only runs
//! while the card is face-up and unmatched; every face-up stretch adds to
//! the total, so peeking at a card repeatedly eats into the same budget.
//!
//! Face changes go through [`MemoryCard::turn_face_up`] and
//! [`MemoryCard::turn_face_down`], which drive the timer explicitly.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Timestamp;

/// Bonus window granted to every card unless configured otherwise.
pub const DEFAULT_BONUS_TIME_LIMIT: Duration = Duration::from_secs(6);

/// One card of a memory game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryCard<C> {
    id: String,
    content: C,
    is_face_up: bool,
    is_matched: bool,
    has_been_seen: bool,

    bonus_time_limit: Duration,
    /// Set while the bonus clock is running.
    last_face_up: Option<Timestamp>,
    /// Face-up time accumulated over earlier stretches.
    past_face_up: Duration,
}

impl<C> MemoryCard<C> {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: impl Into<String>, content: C, bonus_time_limit: Duration) -> Self {
        Self {
            id: id.into(),
            content,
            is_face_up: false,
            is_matched: false,
            has_been_seen: false,
            bonus_time_limit,
            last_face_up: None,
            past_face_up: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    /// True once the card has been turned back face-down at least once.
    #[must_use]
    pub fn has_been_seen(&self) -> bool {
        self.has_been_seen
    }

    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    /// Total time spent face-up, including the running stretch.
    #[must_use]
    pub fn face_up_time(&self, now: Timestamp) -> Duration {
        let running = self
            .last_face_up
            .map_or(Duration::ZERO, |since| now.saturating_duration_since(since));
        self.past_face_up + running
    }

    /// Bonus time left before the card stops earning points.
    #[must_use]
    pub fn bonus_time_remaining(&self, now: Timestamp) -> Duration {
        self.bonus_time_limit.saturating_sub(self.face_up_time(now))
    }

    /// Fraction of the bonus window still available, in `0.0..=1.0`.
    #[must_use]
    pub fn bonus_remaining(&self, now: Timestamp) -> f64 {
        if self.bonus_time_limit.is_zero() {
            return 0.0;
        }
        self.bonus_time_remaining(now).as_secs_f64() / self.bonus_time_limit.as_secs_f64()
    }

    /// Points this card would add to a match made right now.
    ///
    /// Equal to `floor(limit * bonus_remaining)`, computed from the
    /// remaining duration directly to avoid float rounding.
    #[must_use]
    pub fn bonus_points(&self, now: Timestamp) -> i64 {
        self.bonus_time_remaining(now).as_secs() as i64
    }

    /// Matched while some bonus time was left.
    #[must_use]
    pub fn has_earned_bonus(&self, now: Timestamp) -> bool {
        self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    /// Unmatched with the bonus clock running and time left.
    ///
    /// A mismatched card that was hidden but not yet covered still counts.
    #[must_use]
    pub fn is_consuming_bonus_time(&self, now: Timestamp) -> bool {
        !self.is_matched && self.last_face_up.is_some() && !self.bonus_time_remaining(now).is_zero()
    }

    /// Flip face-up. Returns false if the card already was.
    pub(crate) fn turn_face_up(&mut self, now: Timestamp) -> bool {
        if self.is_face_up {
            return false;
        }
        self.is_face_up = true;
        self.on_face_up(now);
        true
    }

    /// Flip face-down, marking the card as seen. Returns false if the card
    /// already was face-down.
    pub(crate) fn turn_face_down(&mut self, now: Timestamp) -> bool {
        if !self.is_face_up {
            return false;
        }
        self.is_face_up = false;
        self.has_been_seen = true;
        self.on_face_down(now);
        true
    }

    /// Turn face-down but leave the bonus clock running until
    /// [`MemoryCard::settle_cover`]. Returns false if already face-down.
    pub(crate) fn hide(&mut self) -> bool {
        if !self.is_face_up {
            return false;
        }
        self.is_face_up = false;
        true
    }

    /// Finish covering a hidden card: mark it seen and stop its clock.
    pub(crate) fn settle_cover(&mut self, now: Timestamp) {
        self.has_been_seen = true;
        self.on_face_down(now);
    }

    /// Mark matched and freeze the bonus clock.
    pub(crate) fn mark_matched(&mut self, now: Timestamp) {
        self.is_matched = true;
        self.on_face_down(now);
    }

    fn on_face_up(&mut self, now: Timestamp) {
        if !self.is_matched
            && self.last_face_up.is_none()
            && !self.bonus_time_remaining(now).is_zero()
        {
            self.last_face_up = Some(now);
        }
    }

    fn on_face_down(&mut self, now: Timestamp) {
        if let Some(since) = self.last_face_up.take() {
            self.past_face_up += now.saturating_duration_since(since);
        }
    }
}

impl<C: fmt::Display> fmt::Display for MemoryCard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}{}",
            self.id,
            self.content,
            if self.is_face_up { "up" } else { "down" },
            if self.is_matched { " matched" } else { "" }
        )
    }
}
