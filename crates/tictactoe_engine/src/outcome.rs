//! Round outcome derived from board state.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// State of a round as read off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// No line is complete and empty squares remain.
    Ongoing,
    /// The given player completed a line.
    Win(Player),
    /// The board is full with no completed line.
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundOutcome::Win(player) => Some(*player),
            RoundOutcome::Ongoing | RoundOutcome::Draw => None,
        }
    }

    /// Returns true once the round has a result.
    pub fn is_decided(&self) -> bool {
        !matches!(self, RoundOutcome::Ongoing)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Ongoing => write!(f, "In progress"),
            RoundOutcome::Win(player) => write!(f, "Player {} wins", player),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}
