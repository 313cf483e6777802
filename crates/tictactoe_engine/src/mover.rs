//! Move sources for the two seats at the table.

use crate::error::SessionError;
use crate::position::Position;
use crate::types::{Board, Player};

/// Who is behind a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverKind {
    /// A person typing at the console.
    Human,
    /// The rule-based AI.
    Computer,
}

/// Trait for players that can make moves.
pub trait Mover {
    /// Gets a move for `side` on `board`.
    ///
    /// Returns `Ok(None)` when the mover has nothing to play. Human movers
    /// keep asking until they have a legal square and only fail when the
    /// input ends.
    fn next_move(&mut self, board: &Board, side: Player) -> Result<Option<Position>, SessionError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns who is making the moves.
    fn kind(&self) -> MoverKind {
        MoverKind::Human
    }

    /// Pause between announcing a computer move and playing it.
    fn deliberate(&mut self) {}
}

