//! Change notifications emitted by the Set game.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Something that happened during a Set game call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetEvent {
    /// Cards moved from the deck into play, in order.
    Dealt { ids: Vec<Uuid> },
    Selected { id: Uuid },
    Deselected { id: Uuid },
    /// Three selected cards formed a set.
    SetFound { ids: [Uuid; 3] },
    /// Three selected cards did not form a set and were deselected.
    NotASet { ids: [Uuid; 3] },
    /// A matched card was replaced in place by a card from the deck.
    Replaced { old: Uuid, new: Uuid },
    /// A matched card left play with no replacement.
    Removed { id: Uuid },
    /// A new game was dealt.
    NewGame,
}
