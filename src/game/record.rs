//! Per-turn history.

use serde::{Deserialize, Serialize};

use crate::boxes::BoxKind;
use crate::core::PlayerId;

/// Record of one turn, in the order turns were played.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 0-based turn index; also the token's position in the input.
    pub turn: usize,

    /// Player who took the turn.
    pub player: PlayerId,

    /// Position of the box that absorbed the token.
    pub box_index: usize,

    /// Kind of that box.
    pub box_kind: BoxKind,

    /// Token weight absorbed.
    pub token: f64,

    /// Score credited to `player`.
    pub score: f64,
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "turn {}: {} fed {} to box {} ({}) for {}",
            self.turn, self.player, self.token, self.box_index, self.box_kind, self.score
        )
    }
}
