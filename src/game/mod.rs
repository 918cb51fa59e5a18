//! The turn loop: sessions, turn records, and outcomes.
//!
//! `play` is the one-call entry point; `GameSession` exposes the same game
//! one turn at a time.

pub mod record;
pub mod result;
pub mod session;

pub use record::TurnRecord;
pub use result::{GameOutcome, GameResult};
pub use session::{play, GameSession};
