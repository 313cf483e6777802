//! Console tic-tac-toe: a human (X) against the rule-based AI (O).

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, Console, console_session};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_filter.as_deref());

    run(&cli)
}

#[instrument(skip_all, fields(ai_delay_ms = cli.ai_delay_ms))]
fn run(cli: &Cli) -> Result<()> {
    info!("Starting console session");

    let console = Console::shared(std::io::stdin().lock(), std::io::stdout());
    let mut session = console_session(console, cli.ai_delay());
    let stats = session.run()?;

    info!(
        rounds = *stats.rounds_played(),
        x_wins = *stats.x_wins(),
        o_wins = *stats.o_wins(),
        draws = *stats.draws(),
        "Session complete"
    );
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
