//! Core domain types for tic-tac-toe.

use crate::error::{MoveError, MoveErrorKind};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first, the human seat).
    X,
    /// Player O (goes second, the AI seat).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the marker drawn on the board for this player.
    pub fn marker(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if a square holds a mark.
    pub fn is_occupied(&self, pos: Position) -> bool {
        !self.is_empty(pos)
    }

    /// Places `player` on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveErrorKind::Occupied`] if the square already holds a
    /// mark. The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if self.is_occupied(pos) {
            return Err(MoveError::new(MoveErrorKind::Occupied(pos)));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Applies a test move that is undone when the returned guard drops.
    ///
    /// Returns `None` if the square is already occupied.
    pub fn trial(&mut self, pos: Position, player: Player) -> Option<TrialMove<'_>> {
        if self.is_occupied(pos) {
            return None;
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Some(TrialMove { board: self, pos })
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }
}

/// A test move applied to a board, reverted on drop.
#[derive(Debug)]
pub struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.squares[self.pos.to_index()] = Square::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_marks_square() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        assert!(board.is_occupied(Position::Center));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_place_refuses_occupied_square() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        let err = board.place(Position::TopLeft, Player::O).unwrap_err();
        assert_eq!(err.kind, MoveErrorKind::Occupied(Position::TopLeft));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::BottomRight, Player::O).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_trial_reverts_on_drop() {
        let mut board = Board::new();
        {
            let trial = board.trial(Position::Center, Player::O).unwrap();
            assert_eq!(trial.get(Position::Center), Square::Occupied(Player::O));
        }
        assert!(board.is_empty(Position::Center));
    }

    #[test]
    fn test_trial_rejects_occupied_square() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        assert!(board.trial(Position::Center, Player::O).is_none());
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_empty_positions_ascending() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::Center, Player::O).unwrap();
        let empties: Vec<usize> = board.empty_positions().map(Position::to_index).collect();
        assert_eq!(empties, vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
