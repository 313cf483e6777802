//! Console presentation of a session.

use crate::console::SharedConsole;
use crate::input::parse_play_again;
use crate::render::{render_board, render_stats};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Frontend, Player, Position, RoundOutcome, SessionError, Statistics};
use tracing::instrument;

/// Writes the game to the console and asks about further rounds.
pub struct ConsoleFrontend<R, W> {
    console: SharedConsole<R, W>,
}

impl<R, W> ConsoleFrontend<R, W> {
    /// Creates a frontend over a shared console.
    pub fn new(console: SharedConsole<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    fn print(&self, text: &str) -> Result<(), SessionError> {
        self.console.borrow_mut().write(text)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    #[instrument(skip(self))]
    fn session_started(&mut self, x_name: &str, o_name: &str) -> Result<(), SessionError> {
        self.print(&format!(
            "--- Console Tic-Tac-Toe (vs AI) ---\nPlayer X ({x_name}) vs Player O (AI)\n"
        ))
    }

    #[instrument(skip(self))]
    fn round_started(&mut self, round: u32) -> Result<(), SessionError> {
        self.print(&format!(
            "\n================ ROUND {round} START =============\n"
        ))
    }

    #[instrument(skip_all)]
    fn show_board(&mut self, board: &Board) -> Result<(), SessionError> {
        self.print(&render_board(board))
    }

    #[instrument(skip(self))]
    fn thinking(&mut self, side: Player) -> Result<(), SessionError> {
        self.print(&format!("\nPlayer {side} (AI) is calculating...\n"))
    }

    #[instrument(skip(self))]
    fn move_announced(&mut self, side: Player, position: Position) -> Result<(), SessionError> {
        self.print(&format!(
            "Player {side} chooses position {}.\n",
            position.number()
        ))
    }

    #[instrument(skip(self, stats))]
    fn round_decided(
        &mut self,
        outcome: RoundOutcome,
        winner_name: Option<&str>,
        stats: &Statistics,
    ) -> Result<(), SessionError> {
        let headline = match outcome {
            RoundOutcome::Win(side) => {
                format!("\n*** Player {side} WINS! ({}) ***\n", winner_name.unwrap_or("?"))
            }
            RoundOutcome::Draw => "\n*** It's a DRAW! ***\n".to_string(),
            RoundOutcome::Ongoing => String::new(),
        };
        self.print(&headline)?;
        self.print(&render_stats(stats))
    }

    #[instrument(skip(self))]
    fn play_again(&mut self) -> Result<bool, SessionError> {
        let mut console = self.console.borrow_mut();
        console.write("\nDo you want to play another round? (y/n): ")?;
        loop {
            match console.read_line()? {
                None => return Ok(false),
                Some(line) => {
                    if let Some(answer) = parse_play_again(&line) {
                        return Ok(answer);
                    }
                }
            }
        }
    }

    #[instrument(skip_all)]
    fn session_finished(&mut self, stats: &Statistics) -> Result<(), SessionError> {
        self.print("\nThank you for playing! Final statistics recorded.\n")?;
        self.print(&render_stats(stats))
    }
}
