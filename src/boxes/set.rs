//! Box variants and the ordered, owning box collection a session plays on.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use tracing::trace;

use super::blue::BlueBox;
use super::green::GreenBox;
use super::scoring::ScoringBox;

/// Which scoring rule a box follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxKind {
    Green,
    Blue,
}

impl std::fmt::Display for BoxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoxKind::Green => write!(f, "green"),
            BoxKind::Blue => write!(f, "blue"),
        }
    }
}

/// Boxes every game starts with, in selection order.
pub const STANDARD_LAYOUT: [(BoxKind, f64); 4] = [
    (BoxKind::Green, 0.0),
    (BoxKind::Green, 0.1),
    (BoxKind::Blue, 0.2),
    (BoxKind::Blue, 0.3),
];

/// A box owned by a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameBox {
    Green(GreenBox),
    Blue(BlueBox),
}

impl GameBox {
    /// Create a green box.
    #[must_use]
    pub fn green(initial_weight: f64) -> Self {
        GameBox::Green(GreenBox::new(initial_weight))
    }

    /// Create a blue box.
    #[must_use]
    pub fn blue(initial_weight: f64) -> Self {
        GameBox::Blue(BlueBox::new(initial_weight))
    }

    /// Create a box of the given kind.
    #[must_use]
    pub fn new(kind: BoxKind, initial_weight: f64) -> Self {
        match kind {
            BoxKind::Green => Self::green(initial_weight),
            BoxKind::Blue => Self::blue(initial_weight),
        }
    }

    #[must_use]
    pub fn kind(&self) -> BoxKind {
        match self {
            GameBox::Green(_) => BoxKind::Green,
            GameBox::Blue(_) => BoxKind::Blue,
        }
    }
}

impl ScoringBox for GameBox {
    fn absorb(&mut self, token: f64) -> f64 {
        match self {
            GameBox::Green(b) => b.absorb(token),
            GameBox::Blue(b) => b.absorb(token),
        }
    }

    fn weight(&self) -> f64 {
        match self {
            GameBox::Green(b) => b.weight(),
            GameBox::Blue(b) => b.weight(),
        }
    }
}

/// Non-empty, ordered collection of boxes.
///
/// Order is construction order and decides ties in `lightest`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSet {
    boxes: Vec<GameBox>,
}

impl BoxSet {
    /// Create a box set from boxes in selection order.
    ///
    /// # Panics
    ///
    /// Panics if `boxes` is empty.
    #[must_use]
    pub fn new(boxes: Vec<GameBox>) -> Self {
        assert!(!boxes.is_empty(), "A box set needs at least one box");
        Self { boxes }
    }

    /// The four boxes of `STANDARD_LAYOUT`.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            STANDARD_LAYOUT
                .iter()
                .map(|&(kind, weight)| GameBox::new(kind, weight))
                .collect(),
        )
    }

    /// Index of the box with the smallest weight.
    ///
    /// Linear scan with a strict comparison, so the earliest box wins a tie.
    #[must_use]
    pub fn lightest(&self) -> usize {
        let mut best = 0;
        for (i, candidate) in self.boxes.iter().enumerate().skip(1) {
            if candidate.is_lighter_than(&self.boxes[best]) {
                best = i;
            }
        }
        trace!(
            box_index = best,
            weight = self.boxes[best].weight(),
            "selected lightest box"
        );
        best
    }

    /// Number of boxes (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Never true for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameBox> {
        self.boxes.iter()
    }

    /// Current weight of every box, in order.
    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.boxes.iter().map(ScoringBox::weight).collect()
    }
}

impl Index<usize> for BoxSet {
    type Output = GameBox;

    fn index(&self, index: usize) -> &Self::Output {
        &self.boxes[index]
    }
}

impl IndexMut<usize> for BoxSet {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.boxes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let boxes = BoxSet::standard();
        let kinds: Vec<_> = boxes.iter().map(GameBox::kind).collect();

        assert_eq!(
            kinds,
            vec![BoxKind::Green, BoxKind::Green, BoxKind::Blue, BoxKind::Blue]
        );
        assert_eq!(boxes.weights(), vec![0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_lightest_picks_minimum() {
        let boxes = BoxSet::new(vec![
            GameBox::blue(3.0),
            GameBox::green(1.0),
            GameBox::green(2.0),
        ]);
        assert_eq!(boxes.lightest(), 1);
    }

    #[test]
    fn test_lightest_tie_goes_to_first() {
        let boxes = BoxSet::new(vec![
            GameBox::blue(5.0),
            GameBox::green(1.0),
            GameBox::blue(1.0),
            GameBox::green(1.0),
        ]);
        assert_eq!(boxes.lightest(), 1);
    }

    #[test]
    fn test_lightest_follows_absorption() {
        let mut boxes = BoxSet::standard();
        assert_eq!(boxes.lightest(), 0);

        boxes[0].absorb(1.0);
        assert_eq!(boxes.lightest(), 1);

        boxes[1].absorb(1.0);
        assert_eq!(boxes.lightest(), 2);
    }

    #[test]
    fn test_game_box_dispatch() {
        let mut green = GameBox::green(0.0);
        let mut blue = GameBox::blue(0.0);

        assert_eq!(green.absorb(2.0), 4.0);
        assert_eq!(blue.absorb(2.0), 12.0);
        assert!(green.is_lighter_than(&GameBox::green(2.5)));
        assert!(!blue.is_lighter_than(&green));
    }

    #[test]
    fn test_game_box_serialization() {
        let mut boxes = BoxSet::standard();
        boxes[2].absorb(4.0);

        let json = serde_json::to_string(&boxes).unwrap();
        let deserialized: BoxSet = serde_json::from_str(&json).unwrap();
        assert_eq!(boxes, deserialized);
    }

    #[test]
    #[should_panic(expected = "at least one box")]
    fn test_empty_box_set() {
        let _ = BoxSet::new(Vec::new());
    }
}
