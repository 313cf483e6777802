//! Rule-based AI opponent.
//!
//! The policy looks exactly one move ahead: take a winning square, else
//! block the opponent's winning square, else fall back to center, corners
//! and edges in that order. It is deterministic and beatable.

use crate::error::SessionError;
use crate::mover::{Mover, MoverKind};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player};
use std::time::Duration;
use tracing::{debug, instrument};

/// Chooses a move for `ai` against `opponent`.
///
/// Returns `None` only when the board has no empty square. The board is
/// never modified; lookahead runs on a private copy.
#[instrument(skip(board))]
pub fn select_move(board: &Board, ai: Player, opponent: Player) -> Option<Position> {
    let mut scratch = board.clone();

    if let Some(pos) = winning_square(&mut scratch, ai) {
        debug!(?pos, "Taking winning square");
        return Some(pos);
    }
    if let Some(pos) = winning_square(&mut scratch, opponent) {
        debug!(?pos, "Blocking opponent");
        return Some(pos);
    }

    let fallback = std::iter::once(Position::Center)
        .chain(Position::CORNERS)
        .chain(Position::EDGES)
        .find(|&pos| board.is_empty(pos));
    debug!(pos = ?fallback, "Heuristic move");
    fallback
}

/// Lowest empty square where `player` would complete a line.
fn winning_square(scratch: &mut Board, player: Player) -> Option<Position> {
    for pos in Position::ALL {
        if let Some(trial) = scratch.trial(pos, player)
            && rules::has_winning_line(&trial)
        {
            return Some(pos);
        }
    }
    None
}

/// AI player backed by [`select_move`].
#[derive(Debug, Clone)]
pub struct RuleBasedAi {
    name: String,
    think_delay: Duration,
}

impl RuleBasedAi {
    /// Creates an AI that answers immediately.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            think_delay: Duration::ZERO,
        }
    }

    /// Pauses for `delay` after announcing each move.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }
}

impl Mover for RuleBasedAi {
    #[instrument(skip(self, board), fields(ai = %self.name))]
    fn next_move(&mut self, board: &Board, side: Player) -> Result<Option<Position>, SessionError> {
        let choice = select_move(board, side, side.opponent());
        debug!(ai = %self.name, position = ?choice, "AI chose position");
        Ok(choice)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> MoverKind {
        MoverKind::Computer
    }

    fn deliberate(&mut self) {
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }
    }
}
