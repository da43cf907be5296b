//! Shared engine plumbing: RNG, clock and errors.
//!
//! None of this knows about any particular game. The engines in
//! `memorize` and `set_game` are built on top of it.

pub mod clock;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use error::{EngineError, Result};
pub use rng::GameRng;
