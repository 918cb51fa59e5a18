//! Core game types: players, per-player storage, session configuration.

pub mod config;
pub mod player;

pub use config::SessionConfig;
pub use player::{Player, PlayerId, PlayerMap, TurnOutcome};
