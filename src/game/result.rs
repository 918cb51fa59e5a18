//! Final scores and who won.

use serde::{Deserialize, Serialize};

use super::record::TurnRecord;
use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher final score.
    Winner(PlayerId),
    /// Equal final scores.
    Draw,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<f64>) -> Self {
        let (a, b) = (scores[PlayerId::A], scores[PlayerId::B]);
        if a > b {
            GameResult::Winner(PlayerId::A)
        } else if b > a {
            GameResult::Winner(PlayerId::B)
        } else {
            GameResult::Draw
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Everything a finished session produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Final score per player.
    pub scores: PlayerMap<f64>,

    /// Winner or draw.
    pub result: GameResult,

    /// Turn history; empty when the session did not record it.
    pub history: Vec<TurnRecord>,
}

impl GameOutcome {
    /// Final scores as `(player A, player B)`.
    #[must_use]
    pub fn score_pair(&self) -> (f64, f64) {
        (self.scores[PlayerId::A], self.scores[PlayerId::B])
    }
}
