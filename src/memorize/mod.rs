//! Memorize: a memory card-matching game.
//!
//! ## Key Types
//!
//! - `MemoryCard`: a card with content, face state and bonus timer
//! - `MemoryGame`: the rules engine
//! - `MemoryGameConfig`: pair count and bonus window
//! - `MemoryEvent`: change notifications returned by every mutator
//! - `Theme` / `ThemedGame`: emoji themes and a game bound to one

pub mod card;
pub mod config;
pub mod event;
pub mod game;
pub mod theme;

pub use card::{MemoryCard, DEFAULT_BONUS_TIME_LIMIT};
pub use config::{MemoryGameConfig, MIN_PAIRS};
pub use event::MemoryEvent;
pub use game::{MemoryGame, MATCH_POINTS, MISMATCH_PENALTY};
pub use theme::{Theme, ThemedGame, FALLBACK_CONTENT};
