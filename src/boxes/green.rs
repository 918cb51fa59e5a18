//! Green box: scores the square of the mean of its most recent tokens.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::scoring::{mean, BoxWeight, ScoringBox};

/// Number of recent tokens a green box remembers.
pub const GREEN_WINDOW: usize = 3;

/// Box scoring `mean(last 3 tokens)^2`, or the mean of all tokens while
/// fewer than three have been absorbed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GreenBox {
    weight: BoxWeight,
    /// Oldest first. Holds `min(GREEN_WINDOW, absorptions)` tokens.
    recent: SmallVec<[f64; GREEN_WINDOW]>,
}

impl GreenBox {
    /// Create an empty green box with the given initial weight.
    #[must_use]
    pub fn new(initial_weight: f64) -> Self {
        Self {
            weight: BoxWeight::new(initial_weight),
            recent: SmallVec::new(),
        }
    }

    /// The remembered tokens, oldest first.
    #[must_use]
    pub fn recent(&self) -> &[f64] {
        &self.recent
    }
}

impl ScoringBox for GreenBox {
    fn absorb(&mut self, token: f64) -> f64 {
        self.weight.add(token);
        if self.recent.len() == GREEN_WINDOW {
            self.recent.remove(0);
        }
        self.recent.push(token);

        let m = mean(&self.recent);
        m * m
    }

    fn weight(&self) -> f64 {
        self.weight.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_absorption_sequence() {
        let mut green = GreenBox::new(1.0);

        assert_eq!(green.absorb(1.0), 1.0);
        assert_eq!(green.absorb(2.0), 1.5 * 1.5);
        assert_eq!(green.absorb(3.0), 2.0 * 2.0);
        assert_eq!(green.absorb(4.0), 3.0 * 3.0);
        assert_eq!(green.weight(), 11.0);
    }

    #[test]
    fn test_green_window_evicts_oldest() {
        let mut green = GreenBox::new(0.0);
        assert!(green.recent().is_empty());

        for token in [1.0, 2.0, 3.0, 4.0, 5.0] {
            green.absorb(token);
        }

        assert_eq!(green.recent(), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_green_window_length_tracks_absorptions() {
        let mut green = GreenBox::new(0.0);
        for (i, token) in [7.0, 0.0, 2.0, 9.0].into_iter().enumerate() {
            green.absorb(token);
            assert_eq!(green.recent().len(), (i + 1).min(GREEN_WINDOW));
        }
    }

    #[test]
    fn test_green_initial_weight_not_scored() {
        let mut green = GreenBox::new(100.0);
        assert_eq!(green.absorb(2.0), 4.0);
        assert_eq!(green.weight(), 102.0);
    }
}
