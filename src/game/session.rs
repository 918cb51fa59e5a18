//! A single play-through: four boxes, two players, strict alternation.

use tracing::{debug, info};

use super::record::TurnRecord;
use super::result::{GameOutcome, GameResult};
use crate::boxes::BoxSet;
use crate::core::{Player, PlayerId, PlayerMap, SessionConfig};

/// Owns the boxes and players of one game.
///
/// Turns alternate A, B, A, ... starting with A. Each turn feeds one
/// token to the currently lightest box and credits the mover.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    boxes: BoxSet,
    players: PlayerMap<Player>,
    to_move: PlayerId,
    turns_played: usize,
    history: Vec<TurnRecord>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    /// Start a game on the standard box layout.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            boxes: BoxSet::standard(),
            players: PlayerMap::with_default(),
            to_move: PlayerId::A,
            turns_played: 0,
            history: Vec::new(),
        }
    }

    /// Play one token for the player to move.
    pub fn take_turn(&mut self, token: f64) -> TurnRecord {
        let player = self.to_move;
        let outcome = self.players[player].take_turn(token, &mut self.boxes);

        let record = TurnRecord {
            turn: self.turns_played,
            player,
            box_index: outcome.box_index,
            box_kind: self.boxes[outcome.box_index].kind(),
            token,
            score: outcome.score,
        };
        debug!(
            turn = record.turn,
            %player,
            box_index = record.box_index,
            token,
            score = record.score,
            "turn played"
        );

        if self.config.record_history {
            self.history.push(record.clone());
        }
        self.turns_played += 1;
        self.to_move = player.next();
        record
    }

    /// Play every token in order.
    pub fn run<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = f64>,
    {
        for token in tokens {
            self.take_turn(token);
        }
    }

    /// Player whose turn is next.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    #[must_use]
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    #[must_use]
    pub fn boxes(&self) -> &BoxSet {
        &self.boxes
    }

    /// Current score of a player.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> f64 {
        self.players[player].score()
    }

    /// Current scores of both players.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<f64> {
        self.players.map(Player::score)
    }

    /// Turns recorded so far (empty if history is off).
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// End the game and report the outcome.
    #[must_use]
    pub fn finish(self) -> GameOutcome {
        let scores = self.scores();
        let result = GameResult::from_scores(&scores);

        if self.config.report_status {
            info!(
                "Scores: player A {}, player B {}",
                scores[PlayerId::A],
                scores[PlayerId::B]
            );
        }

        GameOutcome {
            scores,
            result,
            history: self.history,
        }
    }
}

/// Play a full game over `tokens` and return `(player A, player B)` scores.
///
/// ```
/// assert_eq!(box_game::play(&[1u32, 1, 2, 3]), (13.0, 25.0));
/// ```
pub fn play<T>(tokens: &[T]) -> (f64, f64)
where
    T: Copy + Into<f64>,
{
    let mut session = GameSession::new(SessionConfig::default().with_history(false));
    session.run(tokens.iter().map(|&token| token.into()));
    session.finish().score_pair()
}
