//! The Set card game.
//!
//! ## Key Types
//!
//! - `SetCard`: four three-valued attributes plus selection flags
//! - `SetGame`: deck, table, selection and found sets
//! - `SetEvent`: change notifications returned by every mutator
//! - `is_set`: the "all same or all different" rule

pub mod card;
pub mod event;
pub mod game;

pub use card::{generate_deck, Color, Number, SetCard, Shading, Symbol, DECK_SIZE};
pub use event::SetEvent;
pub use game::{is_set, SetGame, INITIAL_DEAL, SET_SIZE};
