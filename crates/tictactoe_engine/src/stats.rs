//! Running statistics for a session.

use crate::outcome::RoundOutcome;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Counters kept for the lifetime of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Statistics {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Rounds ending with a full board and no line.
    draws: u32,
    /// Rounds decided so far.
    rounds_played: u32,
}

impl Statistics {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a decided round.
    ///
    /// Returns false and changes nothing for [`RoundOutcome::Ongoing`].
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: RoundOutcome) -> bool {
        match outcome {
            RoundOutcome::Ongoing => return false,
            RoundOutcome::Win(Player::X) => self.x_wins += 1,
            RoundOutcome::Win(Player::O) => self.o_wins += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
        self.rounds_played += 1;
        debug!(stats = ?self, "Round recorded");
        true
    }

    /// Wins for the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}
