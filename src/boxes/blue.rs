//! Blue box: scores Cantor's pairing of the smallest and largest token it
//! has absorbed.

use serde::{Deserialize, Serialize};

use super::scoring::{cantor_pairing, BoxWeight, ScoringBox};

/// Smallest and largest absorbed token. `min <= max` always.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenRange {
    pub min: f64,
    pub max: f64,
}

impl TokenRange {
    fn single(token: f64) -> Self {
        Self { min: token, max: token }
    }

    fn include(&mut self, token: f64) {
        self.min = self.min.min(token);
        self.max = self.max.max(token);
    }
}

/// Box scoring `cantor_pairing(min, max)` over the tokens it has absorbed.
///
/// The initial weight counts toward `weight()` but never toward the range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlueBox {
    weight: BoxWeight,
    /// `None` until the first absorption.
    range: Option<TokenRange>,
}

impl BlueBox {
    /// Create a blue box with the given initial weight.
    #[must_use]
    pub fn new(initial_weight: f64) -> Self {
        Self {
            weight: BoxWeight::new(initial_weight),
            range: None,
        }
    }

    /// Range of absorbed tokens, if any have been absorbed.
    #[must_use]
    pub fn range(&self) -> Option<TokenRange> {
        self.range
    }
}

impl ScoringBox for BlueBox {
    fn absorb(&mut self, token: f64) -> f64 {
        self.weight.add(token);
        let range = match self.range {
            Some(mut range) => {
                range.include(token);
                range
            }
            None => TokenRange::single(token),
        };
        self.range = Some(range);
        cantor_pairing(range.min, range.max)
    }

    fn weight(&self) -> f64 {
        self.weight.get()
    }
}
