//! Console collaborators for the tic-tac-toe engine.
//!
//! - [`Console`]: shared line reader and writer
//! - [`HumanMover`]: the X seat, typed at the keyboard
//! - [`ConsoleFrontend`]: board, announcements, statistics and the
//!   play-again prompt

mod cli;
mod console;
mod frontend;
mod human;
mod input;
mod render;

pub use cli::Cli;
pub use console::{Console, SharedConsole};
pub use frontend::ConsoleFrontend;
pub use human::{HumanMover, SPOT_TAKEN};
pub use input::{MoveInputError, parse_move, parse_play_again};
pub use render::{render_board, render_stats};

use std::io::{BufRead, Write};
use std::time::Duration;
use tictactoe_engine::{RuleBasedAi, Session};

/// Name shown for the human seat.
pub const HUMAN_NAME: &str = "You";

/// Name shown for the AI seat.
pub const AI_NAME: &str = "The AI";

/// Builds the standard human-versus-AI session over a console.
pub fn console_session<R, W>(
    console: SharedConsole<R, W>,
    ai_delay: Duration,
) -> Session<ConsoleFrontend<R, W>>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    Session::new(
        Box::new(HumanMover::new(HUMAN_NAME, console.clone())),
        Box::new(RuleBasedAi::new(AI_NAME).with_think_delay(ai_delay)),
        ConsoleFrontend::new(console),
    )
}
