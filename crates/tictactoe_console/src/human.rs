//! Human player that types moves at the console.

use crate::console::SharedConsole;
use crate::input::parse_move;
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Mover, MoverKind, Player, Position, SessionError};
use tracing::{debug, instrument};

/// Message shown when the typed square is already taken.
pub const SPOT_TAKEN: &str = "Spot already taken. Try again.";

/// Human player reading cell numbers from the console.
pub struct HumanMover<R, W> {
    name: String,
    console: SharedConsole<R, W>,
}

impl<R, W> HumanMover<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, console: SharedConsole<R, W>) -> Self {
        Self {
            name: name.into(),
            console,
        }
    }
}

impl<R: BufRead, W: Write> Mover for HumanMover<R, W> {
    /// Prompts until the player names an empty square.
    #[instrument(skip(self, board), fields(human = %self.name))]
    fn next_move(&mut self, board: &Board, side: Player) -> Result<Option<Position>, SessionError> {
        let mut console = self.console.borrow_mut();
        let prompt = format!("Player {side}, enter a number (1-9): ");

        loop {
            let line = console.ask(&prompt)?.ok_or(SessionError::InputClosed)?;
            match parse_move(&line) {
                Ok(None) => continue,
                Ok(Some(pos)) if board.is_occupied(pos) => {
                    debug!(?pos, "Square taken");
                    console.write_line(SPOT_TAKEN)?;
                }
                Ok(Some(pos)) => {
                    debug!(?pos, "Human chose position");
                    return Ok(Some(pos));
                }
                Err(e) => {
                    debug!(input = %line, error = ?e, "Rejected input");
                    console.write_line(&e.to_string())?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> MoverKind {
        MoverKind::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use std::io::Cursor;

    fn typed(input: &str) -> (HumanMover<Cursor<String>, Vec<u8>>, SharedConsole<Cursor<String>, Vec<u8>>) {
        let console = Console::shared(Cursor::new(input.to_string()), Vec::new());
        (HumanMover::new("You", console.clone()), console)
    }

    fn output(console: &SharedConsole<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.borrow().writer().clone()).unwrap()
    }

    #[test]
    fn test_valid_move_first_try() {
        let (mut human, console) = typed("5\n");
        let pos = human.next_move(&Board::new(), Player::X).unwrap();
        assert_eq!(pos, Some(Position::Center));
        assert_eq!(output(&console), "Player X, enter a number (1-9): ");
    }

    #[test]
    fn test_reprompts_with_distinct_messages() {
        let mut board = Board::new();
        board.place(Position::Center, Player::O).unwrap();
        let (mut human, console) = typed("abc\n12\n5\n\n1\n");

        let pos = human.next_move(&board, Player::X).unwrap();
        assert_eq!(pos, Some(Position::TopLeft));

        let text = output(&console);
        assert!(text.contains("Invalid input. Please enter a number.\n"));
        assert!(text.contains("Invalid number. Please enter a number between 1 and 9.\n"));
        assert!(text.contains("Spot already taken. Try again.\n"));
        assert_eq!(text.matches("enter a number (1-9): ").count(), 5);
    }

    #[test]
    fn test_end_of_input_is_input_closed() {
        let (mut human, _console) = typed("abc\n");
        let err = human.next_move(&Board::new(), Player::X).unwrap_err();
        assert!(matches!(err, SessionError::InputClosed));
    }
}
