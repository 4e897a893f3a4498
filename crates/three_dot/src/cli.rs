//! Command-line interface for three_dot.

use clap::Parser;
use std::path::PathBuf;

/// 3 Dot - place dots next to each other, line up three to win
#[derive(Parser, Debug)]
#[command(name = "three_dot")]
#[command(about = "Play the 3 Dot game in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of board rows (overrides the settings file)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of board columns (overrides the settings file)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Number of players, 1 to 9 (overrides the settings file)
    #[arg(short, long)]
    pub players: Option<u8>,

    /// Skip the pauses after the welcome screen and rejected moves
    #[arg(long)]
    pub no_pause: bool,

    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
