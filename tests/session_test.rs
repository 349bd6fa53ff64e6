//! Tests for the human-versus-opponent session.

use alligator_chess::{
    GameConfig, GameState, Move, MoveError, OpponentError, Outcome, Session, SessionError, Side,
    WinReason,
};
use std::time::Duration;

fn mv(from: (i8, i8), to: (i8, i8)) -> Move {
    Move::new(from.into(), to.into())
}

#[tokio::test]
async fn test_reply_is_applied_after_delay() {
    let mut session = Session::with_delay(Duration::from_millis(5));
    let state = session.human_move(mv((2, 0), (1, 0))).unwrap();
    assert!(state.opponent_thinking());
    assert!(session.has_pending_reply());

    let state = session.wait_for_opponent().await.unwrap().unwrap();
    assert_eq!(state.board().to_string(), "A.A/A../.MM");
    assert_eq!(state.to_move(), Side::Monkey);
    assert!(!session.has_pending_reply());
    assert!(session.is_humans_turn());
}

#[tokio::test]
async fn test_reset_discards_pending_reply() {
    let mut session = Session::with_delay(Duration::from_millis(10));
    session.human_move(mv((2, 1), (1, 1))).unwrap();
    session.reset();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(session.state(), &GameState::new());
    assert_eq!(session.wait_for_opponent().await, Ok(None));
    assert!(session.is_humans_turn());
}

#[tokio::test]
async fn test_cancel_then_resume() {
    let mut session = Session::with_delay(Duration::from_millis(1));
    session.human_move(mv((2, 2), (1, 2))).unwrap();
    assert!(session.cancel_pending());
    assert!(!session.cancel_pending());
    assert_eq!(session.state().to_move(), Side::Alligator);

    session.request_reply().unwrap();
    let state = session.wait_for_opponent().await.unwrap().unwrap();
    assert_eq!(state.to_move(), Side::Monkey);
}

#[tokio::test]
async fn test_request_reply_out_of_turn() {
    let mut session = Session::with_delay(Duration::from_millis(1));
    assert_eq!(
        session.request_reply(),
        Err(SessionError::Opponent(OpponentError::NotOpponentsTurn))
    );
}

#[tokio::test]
async fn test_full_game_through_session() {
    let config = GameConfig::default().with_opponent_delay_ms(0);
    let mut session = Session::new(&config);

    for human in [mv((2, 1), (1, 1)), mv((2, 2), (1, 1)), mv((2, 0), (1, 1))] {
        session.human_move(human).unwrap();
        session.wait_for_opponent().await.unwrap();
    }

    // Neither survivor can move; Monkey is checked first and loses.
    let state = session.state();
    assert_eq!(state.board().to_string(), ".A./.M./...");
    assert_eq!(
        state.outcome(),
        Some(Outcome::new(Side::Alligator, WinReason::Stalemate))
    );
    assert!(!session.has_pending_reply());
    assert!(!session.is_humans_turn());
    assert_eq!(
        session.human_move(mv((1, 1), (0, 1))).unwrap_err(),
        SessionError::Move(MoveError::GameOver)
    );
    assert_eq!(
        session.request_reply(),
        Err(SessionError::Opponent(OpponentError::GameOver))
    );

    session.reset();
    assert_eq!(session.state(), &GameState::new());
}
