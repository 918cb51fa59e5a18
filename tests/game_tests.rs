//! End-to-end games through the public API.

use box_game::{play, BoxKind, GameResult, GameSession, PlayerId, SessionConfig, TurnRecord};

// =============================================================================
// Final Scores
// =============================================================================

/// First four Fibonacci numbers.
#[test]
fn test_fibonacci_4() {
    assert_eq!(play(&[1u32, 1, 2, 3]), (13.0, 25.0));
}

/// First eight Fibonacci numbers.
#[test]
fn test_fibonacci_8() {
    assert_eq!(play(&[1u32, 1, 2, 3, 5, 8, 13, 21]), (155.0, 366.25));
}

#[test]
fn test_single_token_goes_to_player_a() {
    assert_eq!(play(&[5u32]), (25.0, 0.0));
}

#[test]
fn test_empty_game_is_a_draw() {
    let outcome = GameSession::default().finish();
    assert_eq!(outcome.score_pair(), (0.0, 0.0));
    assert_eq!(outcome.result, GameResult::Draw);
    assert!(outcome.history.is_empty());
}

// =============================================================================
// Turn History
// =============================================================================

#[test]
fn test_fibonacci_8_turn_by_turn() {
    let mut session = GameSession::default();
    session.run([1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0]);
    let outcome = session.finish();

    let boxes: Vec<_> = outcome.history.iter().map(|r| r.box_index).collect();
    let scores: Vec<_> = outcome.history.iter().map(|r| r.score).collect();

    assert_eq!(boxes, vec![0, 1, 2, 3, 0, 1, 2, 3]);
    assert_eq!(
        scores,
        vec![1.0, 1.0, 12.0, 24.0, 9.0, 20.25, 133.0, 321.0]
    );
    assert_eq!(outcome.result, GameResult::Winner(PlayerId::B));
}

#[test]
fn test_players_alternate_by_turn_parity() {
    let mut session = GameSession::default();
    session.run((0..9).map(f64::from));

    for record in session.history() {
        assert_eq!(record.player, PlayerId::for_turn(record.turn));
    }
}

#[test]
fn test_scores_are_sums_of_turn_scores() {
    let mut session = GameSession::default();
    session.run([4.0, 0.5, 7.0, 2.0, 2.0, 9.0, 1.0]);

    for player in [PlayerId::A, PlayerId::B] {
        let total: f64 = session
            .history()
            .iter()
            .filter(|r| r.player == player)
            .map(|r| r.score)
            .sum();
        assert_eq!(session.score(player), total);
    }
}

#[test]
fn test_take_turn_returns_the_record() {
    let mut session = GameSession::new(SessionConfig::new().with_status_report(false));

    let record = session.take_turn(2.0);
    assert_eq!(
        record,
        TurnRecord {
            turn: 0,
            player: PlayerId::A,
            box_index: 0,
            box_kind: BoxKind::Green,
            token: 2.0,
            score: 4.0,
        }
    );
    assert_eq!(session.history(), &[record]);
}

// =============================================================================
// Box Selection
// =============================================================================

/// Green 0.1 catches up with blue 0.2 exactly; the green box is earlier.
#[test]
fn test_tie_goes_to_earlier_box() {
    let mut session = GameSession::default();
    session.run([5.0, 0.1]);
    assert_eq!(session.boxes().weights(), vec![5.0, 0.2, 0.2, 0.3]);

    let record = session.take_turn(1.0);
    assert_eq!(record.box_index, 1);
    assert_eq!(record.box_kind, BoxKind::Green);
}

#[test]
fn test_tie_with_first_box() {
    let mut session = GameSession::default();
    session.run([0.1]);
    assert_eq!(session.boxes().weights(), vec![0.1, 0.1, 0.2, 0.3]);

    assert_eq!(session.take_turn(1.0).box_index, 0);
    assert_eq!(session.take_turn(1.0).box_index, 1);
}

#[test]
fn test_outcome_serialization() {
    let mut session = GameSession::default();
    session.run([1.0, 1.0, 2.0, 3.0]);
    let outcome = session.finish();

    let json = serde_json::to_string(&outcome).unwrap();
    let deserialized: box_game::GameOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome, deserialized);
}
