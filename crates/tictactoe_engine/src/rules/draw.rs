//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::has_winning_line;
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && !has_winning_line(board)
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_eight_marks_not_full() {
        let mut board = Board::new();
        for pos in Position::ALL.into_iter().take(8) {
            board.place(pos, Player::O).unwrap();
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, player).unwrap();
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.place(pos, Player::X).unwrap();
        }
        board.place(Position::MiddleLeft, Player::O).unwrap();
        board.place(Position::Center, Player::O).unwrap();
        assert!(!is_draw(&board));
    }
}
