//! Tic-tac-toe engine: board, rules, a rule-based AI and round control.
//!
//! # Architecture
//!
//! - **Board**: nine squares and their mutation primitives ([`Board`])
//! - **Rules**: win and draw detection ([`rules`])
//! - **AI**: depth-one heuristic move selection ([`select_move`])
//! - **Session**: turn order, statistics and the play-again loop
//!   ([`Session`])
//!
//! Console I/O lives outside this crate behind the [`Mover`] and
//! [`Frontend`] traits.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Player, Position, select_move};
//!
//! let mut board = Board::new();
//! board.place(Position::TopLeft, Player::X).unwrap();
//! assert_eq!(select_move(&board, Player::O, Player::X), Some(Position::Center));
//! ```

mod ai;
mod error;
mod mover;
mod outcome;
mod position;
mod round;
mod session;
mod stats;
mod types;

pub mod rules;

pub use ai::{RuleBasedAi, select_move};
pub use error::{MoveError, MoveErrorKind, SessionError};
pub use mover::{Mover, MoverKind};
pub use outcome::RoundOutcome;
pub use position::Position;
pub use round::{Round, RoundPhase};
pub use session::{Frontend, Session};
pub use stats::Statistics;
pub use types::{Board, Player, Square, TrialMove};
