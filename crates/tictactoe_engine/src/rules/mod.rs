//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the AI can run them against simulated positions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_winning_line, winner};

use crate::outcome::RoundOutcome;
use crate::types::{Board, Player};
use tracing::instrument;

/// Evaluates the board after `last_mover` has played.
///
/// A completed line is credited to `last_mover`, since only the side that
/// just moved can have created it. A win found on a full board is still a
/// win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last_mover: Player) -> RoundOutcome {
    if has_winning_line(board) {
        RoundOutcome::Win(last_mover)
    } else if is_full(board) {
        RoundOutcome::Draw
    } else {
        RoundOutcome::Ongoing
    }
}
