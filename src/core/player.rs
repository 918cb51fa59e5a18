//! Player identification, per-player storage, and score accumulation.
//!
//! ## PlayerId
//!
//! The game always has exactly two players, `A` and `B`. Player A moves
//! first and the two alternate strictly.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! A running score that only ever grows by the scores its turns produce.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::boxes::{BoxSet, ScoringBox};

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    A,
    B,
}

impl PlayerId {
    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::A, PlayerId::B];

    /// Get the raw player index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::A => 0,
            PlayerId::B => 1,
        }
    }

    /// The player who moves after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }

    /// The player whose turn it is at a 0-based turn index.
    ///
    /// ```
    /// use box_game::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_turn(0), PlayerId::A);
    /// assert_eq!(PlayerId::for_turn(1), PlayerId::B);
    /// assert_eq!(PlayerId::for_turn(6), PlayerId::A);
    /// ```
    #[must_use]
    pub const fn for_turn(turn: usize) -> Self {
        if turn.is_multiple_of(2) {
            PlayerId::A
        } else {
            PlayerId::B
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::A => write!(f, "player A"),
            PlayerId::B => write!(f, "player B"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use box_game::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<f64> = PlayerMap::with_default();
/// scores[PlayerId::B] += 2.5;
///
/// assert_eq!(scores[PlayerId::A], 0.0);
/// assert_eq!(scores[PlayerId::B], 2.5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::ALL.map(factory),
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Map every entry into a new PlayerMap.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|player| f(self.get(player)))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// What a single turn did: which box absorbed the token and what it scored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnOutcome {
    /// Position of the chosen box in the box set.
    pub box_index: usize,
    /// Score returned by the box for this absorption.
    pub score: f64,
}

/// A player's running score.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    score: f64,
}

impl Player {
    /// Create a player with a score of 0.0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed `token` to the lightest box and bank the score it returns.
    pub fn take_turn(&mut self, token: f64, boxes: &mut BoxSet) -> TurnOutcome {
        let box_index = boxes.lightest();
        let score = boxes[box_index].absorb(token);
        self.score += score;
        TurnOutcome { box_index, score }
    }

    /// Current accumulated score.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }
}
