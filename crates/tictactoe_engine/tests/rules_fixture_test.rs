//! Worked board fixtures for every win line, draws and AI decisions.

use tictactoe_engine::rules::{evaluate, has_winning_line, is_full, winner};
use tictactoe_engine::{Board, Player, Position, RoundOutcome, Square, select_move};

const E: Square = Square::Empty;
const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);

fn board(squares: [Square; 9]) -> Board {
    Board::from_squares(squares)
}

#[test]
fn test_top_row() {
    let b = board([X, X, X, O, O, E, E, E, E]);
    assert_eq!(evaluate(&b, Player::X), RoundOutcome::Win(Player::X));
}

#[test]
fn test_middle_row() {
    let b = board([X, X, E, O, O, O, X, E, E]);
    assert_eq!(evaluate(&b, Player::O), RoundOutcome::Win(Player::O));
}

#[test]
fn test_bottom_row() {
    let b = board([O, O, E, E, E, E, X, X, X]);
    assert_eq!(evaluate(&b, Player::X), RoundOutcome::Win(Player::X));
}

#[test]
fn test_left_column() {
    let b = board([O, X, X, O, X, E, O, E, E]);
    assert_eq!(evaluate(&b, Player::O), RoundOutcome::Win(Player::O));
}

#[test]
fn test_middle_column() {
    let b = board([O, X, E, E, X, O, E, X, E]);
    assert_eq!(evaluate(&b, Player::X), RoundOutcome::Win(Player::X));
}

#[test]
fn test_right_column() {
    let b = board([X, X, O, E, E, O, X, E, O]);
    assert_eq!(evaluate(&b, Player::O), RoundOutcome::Win(Player::O));
}

#[test]
fn test_main_diagonal() {
    let b = board([X, O, E, E, X, O, E, E, X]);
    assert_eq!(evaluate(&b, Player::X), RoundOutcome::Win(Player::X));
}

#[test]
fn test_anti_diagonal() {
    let b = board([X, X, O, E, O, E, O, E, X]);
    assert_eq!(evaluate(&b, Player::O), RoundOutcome::Win(Player::O));
}

#[test]
fn test_full_board_draw() {
    let b = board([X, O, X, O, X, O, O, X, O]);
    assert!(is_full(&b));
    assert!(!has_winning_line(&b));
    assert_eq!(evaluate(&b, Player::O), RoundOutcome::Draw);
}

#[test]
fn test_second_full_board_draw() {
    let b = board([O, X, O, X, X, O, X, O, X]);
    assert_eq!(evaluate(&b, Player::X), RoundOutcome::Draw);
}

#[test]
fn test_full_board_with_line_is_a_win() {
    let b = board([X, O, X, X, O, O, X, X, O]);
    assert!(is_full(&b));
    assert_eq!(winner(&b), Some(Player::X));
    assert_eq!(evaluate(&b, Player::X), RoundOutcome::Win(Player::X));
}

#[test]
fn test_ongoing_board() {
    let b = board([X, O, E, E, X, E, E, E, O]);
    assert_eq!(evaluate(&b, Player::O), RoundOutcome::Ongoing);
}

#[test]
fn test_ai_prefers_its_own_win_over_block() {
    // X holds 0,1 and threatens 2; O holds 3,4 and can finish the middle row.
    let b = board([X, X, E, O, O, E, E, E, E]);
    assert_eq!(select_move(&b, Player::O, Player::X), Some(Position::MiddleRight));
}

#[test]
fn test_ai_blocks_top_row() {
    let b = board([X, X, E, O, E, E, E, E, E]);
    assert_eq!(select_move(&b, Player::O, Player::X), Some(Position::TopRight));
}

#[test]
fn test_ai_blocks_diagonal() {
    let b = board([X, O, E, E, X, E, E, E, E]);
    assert_eq!(select_move(&b, Player::O, Player::X), Some(Position::BottomRight));
}

#[test]
fn test_ai_plays_x_side_too() {
    // Seats swapped: X is the AI and finishes the left column.
    let b = board([X, O, O, X, O, E, E, E, E]);
    assert_eq!(select_move(&b, Player::X, Player::O), Some(Position::BottomLeft));
}
