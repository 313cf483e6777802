//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight lines that win when uniformly occupied.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if any line holds three marks of the same player.
pub fn has_winning_line(board: &Board) -> bool {
    winner(board).is_some()
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    })
}
