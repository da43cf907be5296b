//! Change notifications emitted by the memory game.
//!
//! Every mutating call returns the events it caused, in order. A
//! presentation layer replays them instead of diffing the whole deck.

use serde::{Deserialize, Serialize};

/// Something that happened during a memory game call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryEvent {
    /// A card was turned face-up.
    TurnedFaceUp { id: String },
    /// A card was turned face-down.
    TurnedFaceDown { id: String },
    /// Two cards matched. `points` includes both cards' bonus.
    Matched { first: String, second: String, points: i64 },
    /// Two face-up cards did not match. `penalty` is the amount deducted.
    Mismatched { first: String, second: String, penalty: i64 },
    /// Card order changed.
    Shuffled,
    /// The last pair was matched.
    GameOver { score: i64 },
}
