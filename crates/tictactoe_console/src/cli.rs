//! Command-line interface for the console game.

use clap::Parser;
use std::time::Duration;

/// Play tic-tac-toe against a rule-based AI in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe against a rule-based AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pause before each AI move, in milliseconds
    #[arg(long, env = "TICTACTOE_AI_DELAY_MS", default_value_t = 500)]
    pub ai_delay_ms: u64,

    /// Tracing filter directive (falls back to RUST_LOG, then "warn")
    #[arg(long, env = "TICTACTOE_LOG")]
    pub log_filter: Option<String>,
}

impl Cli {
    /// The AI think delay as a duration.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}
