//! Per-round state machine.
//!
//! A round moves through `Setup -> InProgress -> Decided`. It owns the
//! board and the side to move; statistics live with the session.

use crate::error::{MoveError, MoveErrorKind};
use crate::outcome::RoundOutcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Created but not started.
    Setup,
    /// Accepting moves.
    InProgress,
    /// Finished with the given result.
    Decided(RoundOutcome),
}

/// One game from an empty board to a result.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    to_move: Player,
    phase: RoundPhase,
}

impl Round {
    /// Creates a round in the setup phase.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            phase: RoundPhase::Setup,
        }
    }

    /// Clears the board, gives X the move and starts accepting moves.
    #[instrument(skip(self))]
    pub fn begin(&mut self) {
        self.board.reset();
        self.to_move = Player::X;
        self.phase = RoundPhase::InProgress;
        info!("Round started");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Plays `pos` for the side to move and evaluates the board.
    ///
    /// On [`RoundOutcome::Ongoing`] the move passes to the opponent;
    /// otherwise the round becomes decided.
    ///
    /// # Errors
    ///
    /// Returns [`MoveErrorKind::NotInProgress`] outside the in-progress
    /// phase and [`MoveErrorKind::Occupied`] for a taken square. The round
    /// is unchanged on error.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> Result<RoundOutcome, MoveError> {
        if self.phase != RoundPhase::InProgress {
            return Err(MoveError::new(MoveErrorKind::NotInProgress));
        }

        let mover = self.to_move;
        self.board.place(pos, mover)?;

        let outcome = rules::evaluate(&self.board, mover);
        match outcome {
            RoundOutcome::Ongoing => self.to_move = mover.opponent(),
            decided => {
                info!(outcome = %decided, "Round decided");
                self.phase = RoundPhase::Decided(decided);
            }
        }
        Ok(outcome)
    }

    /// Hands the move to the opponent without placing a mark.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn pass_turn(&mut self) {
        if self.phase == RoundPhase::InProgress {
            debug!("Turn passed without a move");
            self.to_move = self.to_move.opponent();
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
