//! Parsing of typed moves and play-again answers.

use derive_more::{Display, Error};
use tictactoe_engine::Position;

/// Why a typed move was not understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveInputError {
    /// The text is not an integer.
    #[display("Invalid input. Please enter a number.")]
    NotANumber,
    /// The number is outside 1-9.
    #[display("Invalid number. Please enter a number between 1 and 9.")]
    OutOfRange,
}

/// Parses the first token of `line` as a cell number 1-9.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_move(line: &str) -> Result<Option<Position>, MoveInputError> {
    let Some(token) = line.split_whitespace().next() else {
        return Ok(None);
    };
    let number: i64 = token.parse().map_err(|_| MoveInputError::NotANumber)?;
    usize::try_from(number)
        .ok()
        .and_then(Position::from_number)
        .map(Some)
        .ok_or(MoveInputError::OutOfRange)
}

/// Reads a play-again answer. `None` for a blank line.
///
/// Only a leading `y` or `Y` continues.
pub fn parse_play_again(line: &str) -> Option<bool> {
    line.trim()
        .chars()
        .next()
        .map(|c| c.eq_ignore_ascii_case(&'y'))
}
