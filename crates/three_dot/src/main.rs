//! 3 Dot - console game
//!
//! Two or more players take turns placing dots on a grid; line up three to
//! win.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use three_dot::{Cli, Console, GameSession, LineInput, Settings, SleepPacer};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let settings = load_settings(&cli)?;
    let config = settings.game_config()?;

    let stdin = io::stdin();
    let input = LineInput::new(stdin.lock(), io::stdout());
    let console = Console::new(io::stdout(), SleepPacer, *settings.pacing(), *settings.screen());

    let outcome = GameSession::new(config, input, console)
        .run()
        .context("Game session ended unexpectedly")?;

    info!(%outcome, "Exiting");
    Ok(())
}

/// Loads the settings file and applies command-line overrides.
#[instrument(skip(cli))]
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.override_game(cli.rows, cli.cols, cli.players);
    if cli.no_pause {
        settings.disable_pauses();
    }
    Ok(settings)
}

/// Logs go to stderr so they never interleave with the game screen.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Tracing initialized");
}
