//! Time source for the bonus timers.
//!
//! Engines never read a global clock. They are handed a [`Clock`] at
//! construction and ask it for "now" whenever a card changes face.
//!
//! - `SystemClock`: monotonic wall time, for real play
//! - `ManualClock`: time that only moves when told to, for tests and replays

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// A point in time, measured from the owning clock's origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// Timestamp at the given offset from the clock origin.
    #[must_use]
    pub const fn from_offset(offset: Duration) -> Self {
        Self(offset)
    }

    /// Offset from the clock origin.
    #[must_use]
    pub const fn offset(self) -> Duration {
        self.0
    }

    /// Time elapsed since `earlier`, or zero if `earlier` is later.
    #[must_use]
    pub fn saturating_duration_since(self, earlier: Timestamp) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

/// Source of the current time.
pub trait Clock {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// Monotonic clock backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.origin.elapsed())
    }
}

/// Hand-driven clock.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the engine:
///
/// ```
/// use std::time::Duration;
/// use card_table::core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let engine_handle = clock.clone();
///
/// clock.advance(Duration::from_secs(2));
/// assert_eq!(engine_handle.now().offset(), Duration::from_secs(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock at offset zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Jump to an absolute offset.
    pub fn set(&self, offset: Duration) {
        self.elapsed.set(offset);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.elapsed.get())
    }
}
