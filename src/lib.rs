//! # card-table
//!
//! Game-state engines for two table card games plus a layout helper.
//!
//! ## Design Principles
//!
//! 1. **Pure state**: No rendering, no I/O. Engines hold cards and rules;
//!    a presentation layer reads them and forwards player intents.
//!
//! 2. **Explicit change events**: Every mutating call returns the events it
//!    caused, so views never need to observe fields.
//!
//! 3. **Injected time and randomness**: Engines take a `Clock` and a seeded
//!    `GameRng`, which keeps games reproducible and testable.
//!
//! ## Modules
//!
//! - `core`: RNG, clock and error types
//! - `memorize`: memory card-matching game with time bonuses and themes
//! - `set_game`: the Set card game
//! - `layout`: aspect-ratio grid sizing

pub mod core;
pub mod layout;
pub mod memorize;
pub mod set_game;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, SystemClock, Timestamp,
    EngineError, Result,
    GameRng,
};

pub use crate::memorize::{MemoryCard, MemoryEvent, MemoryGame, MemoryGameConfig, Theme, ThemedGame};

pub use crate::set_game::{is_set, SetCard, SetEvent, SetGame};

pub use crate::layout::{grid_item_width_that_fits, GridLayout, Size};
