//! The absorb-and-score contract shared by every box, plus the pure
//! scoring functions the variants are built from.

use serde::{Deserialize, Serialize};

/// A stateful accumulator that absorbs token weights and scores each
/// absorption.
///
/// `absorb` returns the score of that single absorption, not a running
/// total. Token weights must be finite and non-negative; anything else is
/// a caller bug.
pub trait ScoringBox {
    /// Add `token` to the box's weight and score the absorption.
    fn absorb(&mut self, token: f64) -> f64;

    /// Initial weight plus every token absorbed so far.
    fn weight(&self) -> f64;

    /// Strict weight comparison used for box selection.
    fn is_lighter_than(&self, other: &dyn ScoringBox) -> bool {
        self.weight() < other.weight()
    }
}

/// Cumulative weight of a box.
///
/// Only grows: every token added is non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxWeight(f64);

impl BoxWeight {
    /// Start from an initial weight.
    #[must_use]
    pub const fn new(initial: f64) -> Self {
        Self(initial)
    }

    /// Add one absorbed token.
    pub fn add(&mut self, token: f64) {
        debug_assert!(
            token.is_finite() && token >= 0.0,
            "token weight must be finite and non-negative, got {token}"
        );
        self.0 += token;
    }

    /// Current total.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Arithmetic mean; 0.0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

/// Cantor's pairing function: `(x + y)(x + y + 1) / 2 + y`.
///
/// ```
/// use box_game::boxes::cantor_pairing;
///
/// assert_eq!(cantor_pairing(0.0, 1.0), 2.0);
/// ```
#[must_use]
pub fn cantor_pairing(x: f64, y: f64) -> f64 {
    (x + y) * (x + y + 1.0) / 2.0 + y
}
