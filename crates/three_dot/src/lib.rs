//! Console front end for the 3 Dot game.
//!
//! Wires the pure engine from `three_dot_core` to a terminal:
//!
//! - **Cli/Settings**: command-line flags layered over an optional TOML file
//! - **Console**: renders the grid and the game messages
//! - **Input**: prompts for 1-based row and column numbers until valid
//! - **Pacing**: injectable pauses between screens
//! - **Session**: the turn loop from welcome screen to outcome

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod input;
mod pacing;
mod session;
mod settings;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Settings
pub use settings::{GameSection, PacingSettings, ScreenSettings, Settings, SettingsError};

// Crate-level exports - Presentation
pub use console::{Console, cell_glyph, render_board, spacing};

// Crate-level exports - Input
pub use input::{InputSource, LineInput};

// Crate-level exports - Pacing
pub use pacing::{NoPause, Pacer, SleepPacer};

// Crate-level exports - Session loop
pub use session::GameSession;
