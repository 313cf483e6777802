//! Session orchestration between the two seats.
//!
//! A [`Session`] plays rounds until the frontend declines another one. It
//! owns the round, the statistics and both movers; everything the user
//! sees goes through a [`Frontend`].

use crate::error::{MoveErrorKind, SessionError};
use crate::mover::{Mover, MoverKind};
use crate::outcome::RoundOutcome;
use crate::position::Position;
use crate::round::Round;
use crate::stats::Statistics;
use crate::types::{Board, Player};
use tracing::{error, info, instrument, warn};

/// Presentation and play-again decisions for a session.
pub trait Frontend {
    /// Called once before the first round.
    fn session_started(&mut self, x_name: &str, o_name: &str) -> Result<(), SessionError>;

    /// A new round is about to start. `round` counts from 1.
    fn round_started(&mut self, round: u32) -> Result<(), SessionError>;

    /// Shows the current board.
    fn show_board(&mut self, board: &Board) -> Result<(), SessionError>;

    /// The computer seat is choosing a move.
    fn thinking(&mut self, side: Player) -> Result<(), SessionError>;

    /// The computer seat played `position`.
    fn move_announced(&mut self, side: Player, position: Position) -> Result<(), SessionError>;

    /// The round ended. `winner_name` is set for wins.
    fn round_decided(
        &mut self,
        outcome: RoundOutcome,
        winner_name: Option<&str>,
        stats: &Statistics,
    ) -> Result<(), SessionError>;

    /// Asks whether to play another round.
    fn play_again(&mut self) -> Result<bool, SessionError>;

    /// Called once when the session ends.
    fn session_finished(&mut self, stats: &Statistics) -> Result<(), SessionError>;
}

/// Orchestrates rounds between the X and O seats.
pub struct Session<F: Frontend> {
    round: Round,
    stats: Statistics,
    player_x: Box<dyn Mover>,
    player_o: Box<dyn Mover>,
    frontend: F,
}

impl<F: Frontend> Session<F> {
    /// Creates a session with fresh statistics.
    pub fn new(player_x: Box<dyn Mover>, player_o: Box<dyn Mover>, frontend: F) -> Self {
        Self {
            round: Round::new(),
            stats: Statistics::new(),
            player_x,
            player_o,
            frontend,
        }
    }

    /// Returns the statistics so far.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the frontend.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Consumes the session and returns the frontend.
    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Plays rounds until the frontend declines or the input ends.
    ///
    /// End of input is a normal way to leave: the interrupted round is not
    /// counted and the farewell is still shown.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Statistics, SessionError> {
        info!("Starting session");
        self.frontend
            .session_started(self.player_x.name(), self.player_o.name())?;

        loop {
            match self.play_round() {
                Ok(_) => {}
                Err(SessionError::InputClosed) => {
                    info!("Input closed during round");
                    break;
                }
                Err(e) => return Err(e),
            }
            match self.frontend.play_again() {
                Ok(true) => continue,
                Ok(false) | Err(SessionError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }

        info!(stats = ?self.stats, "Session finished");
        self.frontend.session_finished(&self.stats)?;
        Ok(self.stats)
    }

    /// Plays one round to a result and records it.
    #[instrument(skip(self), fields(round = *self.stats.rounds_played() + 1))]
    pub fn play_round(&mut self) -> Result<RoundOutcome, SessionError> {
        self.round.begin();
        self.frontend
            .round_started(*self.stats.rounds_played() + 1)?;

        let outcome = loop {
            self.frontend.show_board(self.round.board())?;
            if let Some(outcome) = self.take_turn()? {
                break outcome;
            }
        };

        self.stats.record(outcome);
        self.frontend.show_board(self.round.board())?;
        let winner_name = outcome.winner().map(|side| match side {
            Player::X => self.player_x.name(),
            Player::O => self.player_o.name(),
        });
        self.frontend
            .round_decided(outcome, winner_name, &self.stats)?;
        Ok(outcome)
    }

    /// Plays one turn. Returns the outcome once the round is decided.
    ///
    /// A human seat that picks a taken square is asked again. A computer
    /// seat that does so, or has no move, loses the turn.
    fn take_turn(&mut self) -> Result<Option<RoundOutcome>, SessionError> {
        let side = self.round.to_move();
        let computer = self.seat(side).kind() == MoverKind::Computer;
        let mover = match side {
            Player::X => &mut self.player_x,
            Player::O => &mut self.player_o,
        };

        loop {
            let Some(position) = mover.next_move(self.round.board(), side)? else {
                warn!(?side, "No move available, passing turn");
                self.round.pass_turn();
                return Ok(None);
            };
            if computer {
                self.frontend.thinking(side)?;
                mover.deliberate();
            }

            match self.round.apply_move(position) {
                Ok(outcome) => {
                    if computer {
                        self.frontend.move_announced(side, position)?;
                    }
                    return Ok(outcome.is_decided().then_some(outcome));
                }
                Err(e) if !computer && matches!(e.kind, MoveErrorKind::Occupied(_)) => {
                    warn!(?side, ?position, "Square taken, asking again");
                }
                Err(e) => {
                    error!(?side, ?position, error = %e, "Mover proposed an illegal square");
                    self.round.pass_turn();
                    return Ok(None);
                }
            }
        }
    }

    fn seat(&self, side: Player) -> &dyn Mover {
        match side {
            Player::X => self.player_x.as_ref(),
            Player::O => self.player_o.as_ref(),
        }
    }
}
