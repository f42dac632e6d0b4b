//! utictac - ultimate tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use utictac::GameSession;
use utictac_cli::{Cli, Console, Settings};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    if let Some(first) = cli.first {
        settings.rules = settings.rules.with_first_player(first.into());
    }
    let color = settings.color && !cli.plain;

    info!(rules = ?settings.rules, color, "Starting game");
    let mut session = GameSession::with_rules(settings.rules);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), color);
    let status = console.run(&mut session)?;

    info!(%status, "Session ended");
    Ok(())
}
