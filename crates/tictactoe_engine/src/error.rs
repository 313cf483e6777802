//! Error types for moves and sessions.

use crate::position::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveErrorKind {
    /// The target square already holds a mark.
    #[display("square {} ({_0}) is already occupied", _0.number())]
    Occupied(Position),
    /// The round is not accepting moves (not started or already decided).
    #[display("round is not in progress")]
    NotInProgress,
}

/// Move error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Move error: {} at {}:{}", kind, file, line)]
pub struct MoveError {
    /// What went wrong.
    pub kind: MoveErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MoveError {
    /// Creates a new move error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: MoveErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Errors that end a session early.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// The input stream closed while a decision was pending.
    #[display("input closed")]
    InputClosed,
    /// Reading from or writing to the console failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::InputClosed
        } else {
            Self::Io(err)
        }
    }
}
