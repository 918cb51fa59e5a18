//! Boxes: weight accumulators that score every token they absorb.
//!
//! ## Key Types
//!
//! - `ScoringBox`: The absorb/weight contract
//! - `GreenBox`: Square of the mean of the last three tokens
//! - `BlueBox`: Cantor pairing of the smallest and largest token
//! - `GameBox`: Owned variant of either kind
//! - `BoxSet`: Ordered collection with lightest-box selection

pub mod blue;
pub mod green;
pub mod scoring;
pub mod set;

pub use blue::{BlueBox, TokenRange};
pub use green::{GreenBox, GREEN_WINDOW};
pub use scoring::{cantor_pairing, mean, BoxWeight, ScoringBox};
pub use set::{BoxKind, BoxSet, GameBox, STANDARD_LAYOUT};
