//! Game session: a human playing Monkey against the scripted Alligator.
//!
//! The session owns the current snapshot, the human's piece selection and
//! at most one pending opponent reply. The reply runs as a tokio task that
//! sleeps for the pacing delay and then computes the opponent's move on the
//! snapshot it was given. Resetting aborts the task, so a stale reply is
//! never applied.

use crate::config::GameConfig;
use crate::games::alligator::{GameState, Move, MoveError, OpponentError, Position, Side};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Errors surfaced by a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The human's move was rejected.
    #[display("{}", _0)]
    Move(MoveError),

    /// The opponent was invoked out of turn.
    #[display("{}", _0)]
    Opponent(OpponentError),

    /// The human tried to move while the opponent's reply is pending.
    #[display("Wait for the opponent's reply")]
    ReplyPending,

    /// The opponent task panicked.
    #[display("Opponent task failed: {}", _0)]
    Task(String),
}

impl std::error::Error for SessionError {}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

impl From<OpponentError> for SessionError {
    fn from(err: OpponentError) -> Self {
        Self::Opponent(err)
    }
}

/// A scheduled opponent reply.
#[derive(Debug)]
struct PendingReply {
    handle: JoinHandle<Result<GameState, OpponentError>>,
}

/// One game between the human (Monkey) and the opponent (Alligator).
#[derive(Debug)]
pub struct Session {
    state: GameState,
    selected: Option<Position>,
    delay: Duration,
    pending: Option<PendingReply>,
}

impl Session {
    /// Creates a session using the configured opponent delay.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_delay(config.opponent_delay())
    }

    /// Creates a session with an explicit opponent delay.
    #[instrument]
    pub fn with_delay(delay: Duration) -> Self {
        info!(delay_ms = delay.as_millis() as u64, "Creating session");
        Self {
            state: GameState::new(),
            selected: None,
            delay,
            pending: None,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Currently selected piece, if any.
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Whether an opponent reply is scheduled.
    pub fn has_pending_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the human may act right now.
    pub fn is_humans_turn(&self) -> bool {
        !self.state.is_over() && self.state.to_move() == Side::Monkey && self.pending.is_none()
    }

    /// Selects the Monkey on `pos`.
    ///
    /// Returns `false` and clears the selection if `pos` holds no Monkey or
    /// it is not the human's turn.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> bool {
        let ok = self.is_humans_turn() && self.state.board().is_occupied_by(pos, Side::Monkey);
        self.selected = ok.then_some(pos);
        debug!(selected = ok, "Selection updated");
        ok
    }

    /// Legal destinations for the selected piece.
    pub fn highlighted(&self) -> Vec<Position> {
        self.selected
            .map(|from| self.state.legal_targets(from))
            .unwrap_or_default()
    }

    /// Plays the human's move and schedules the opponent's reply.
    ///
    /// The selection is cleared whether or not the move is accepted. Must be
    /// called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ReplyPending`] while the opponent owes a move,
    /// or [`SessionError::Move`] if the move is rejected. The snapshot is
    /// unchanged in both cases.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, mv: Move) -> Result<&GameState, SessionError> {
        self.selected = None;
        if self.pending.is_some() {
            warn!("Move attempted while opponent reply is pending");
            return Err(SessionError::ReplyPending);
        }

        self.state = self.state.attempt_move(mv)?;
        if self.state.opponent_thinking() {
            self.schedule_reply();
        } else if let Some(outcome) = self.state.outcome() {
            info!(%outcome, "Game finished on human move");
        }
        Ok(&self.state)
    }

    /// Schedules the opponent's reply for the current snapshot.
    ///
    /// Used to resume after [`Session::cancel_pending`]. A reply that is
    /// already pending is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Opponent`] when the opponent does not owe a move.
    #[instrument(skip(self))]
    pub fn request_reply(&mut self) -> Result<(), SessionError> {
        if self.pending.is_some() {
            return Ok(());
        }
        if self.state.is_over() {
            return Err(OpponentError::GameOver.into());
        }
        if self.state.to_move() != Side::Alligator {
            return Err(OpponentError::NotOpponentsTurn.into());
        }
        self.schedule_reply();
        Ok(())
    }

    fn schedule_reply(&mut self) {
        let snapshot = self.state.clone();
        let delay = self.delay;
        debug!(delay_ms = delay.as_millis() as u64, "Scheduling opponent reply");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            snapshot.opponent_move()
        });
        self.pending = Some(PendingReply { handle });
    }

    /// Waits for the scheduled reply and applies it.
    ///
    /// Returns `Ok(None)` when nothing is pending.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Opponent`] on a contract violation and
    /// [`SessionError::Task`] if the task panicked.
    #[instrument(skip(self))]
    pub async fn wait_for_opponent(&mut self) -> Result<Option<&GameState>, SessionError> {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };

        match pending.handle.await {
            Ok(reply) => {
                self.state = reply?;
                if let Some(outcome) = self.state.outcome() {
                    info!(%outcome, "Game finished on opponent move");
                }
                Ok(Some(&self.state))
            }
            Err(err) if err.is_cancelled() => {
                debug!("Opponent reply was cancelled");
                Ok(None)
            }
            Err(err) => Err(SessionError::Task(err.to_string())),
        }
    }

    /// Cancels the pending reply, if any. Returns whether one was cancelled.
    #[instrument(skip(self))]
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.handle.abort();
                debug!("Cancelled pending opponent reply");
                true
            }
            None => false,
        }
    }

    /// Starts a fresh game, dropping any pending reply.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        self.cancel_pending();
        self.selected = None;
        self.state = GameState::new();
        info!("Session reset");
        &self.state
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
