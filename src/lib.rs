//! # box-game
//!
//! A two-player scoring game played against weight-absorbing boxes.
//!
//! ## Rules
//!
//! - Four boxes start on the table: green 0.0, green 0.1, blue 0.2, blue 0.3.
//! - Players A and B alternate, A first. Each turn consumes one input token.
//! - The mover feeds the token to the lightest box (earliest box on ties)
//!   and is credited with the score the box returns.
//! - Green boxes score the square of the mean of their last three tokens.
//! - Blue boxes score Cantor's pairing of their smallest and largest token.
//! - When the input runs out, the higher score wins.
//!
//! ## Modules
//!
//! - `core`: Player identity, per-player storage, scores, configuration
//! - `boxes`: The scoring contract, both box kinds, and the box set
//! - `game`: Sessions, turn records, outcomes, and `play`
//! - `error`: Token parsing errors

pub mod boxes;
pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Player, PlayerId, PlayerMap, SessionConfig, TurnOutcome};

pub use crate::boxes::{
    cantor_pairing, mean, BlueBox, BoxKind, BoxSet, GameBox, GreenBox, ScoringBox,
    STANDARD_LAYOUT,
};

pub use crate::game::{play, GameOutcome, GameResult, GameSession, TurnRecord};

pub use crate::error::{parse_token, parse_tokens, GameError};
