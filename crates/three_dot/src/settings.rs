//! Settings loaded from an optional TOML file and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use three_dot_core::{ConfigError, GameConfig};
use tracing::{debug, info, instrument};

/// All user-tunable settings.
///
/// Every section is optional in the file; missing keys fall back to the
/// defaults of the classic game (5x5 board, two players).
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board and player count.
    game: GameSection,
    /// Pause lengths.
    pacing: PacingSettings,
    /// Screen handling.
    screen: ScreenSettings,
}

/// `[game]` section. Validated into a [`GameConfig`] on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSection {
    /// Board rows.
    rows: usize,
    /// Board columns.
    cols: usize,
    /// Players taking turns.
    players: u8,
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            rows: GameConfig::DEFAULT_ROWS,
            cols: GameConfig::DEFAULT_COLS,
            players: GameConfig::DEFAULT_PLAYERS,
        }
    }
}

/// `[pacing]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingSettings {
    /// Seconds the welcome screen stays up.
    welcome_secs: u64,
    /// Seconds a rejected-move message stays up.
    rejection_secs: u64,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            welcome_secs: 4,
            rejection_secs: 3,
        }
    }
}

impl PacingSettings {
    /// Pause after the welcome screen.
    pub fn welcome(&self) -> Duration {
        Duration::from_secs(self.welcome_secs)
    }

    /// Pause after a rejected placement.
    pub fn rejection(&self) -> Duration {
        Duration::from_secs(self.rejection_secs)
    }

    /// No pauses at all.
    pub fn none() -> Self {
        Self {
            welcome_secs: 0,
            rejection_secs: 0,
        }
    }
}

/// `[screen]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSettings {
    /// Blank lines printed to push the previous screen out of view.
    clear_lines: usize,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self { clear_lines: 50 }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings from `path` if given, defaults otherwise.
    ///
    /// A named file that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No settings file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the game values that were given on the command line.
    #[instrument(skip(self))]
    pub fn override_game(&mut self, rows: Option<usize>, cols: Option<usize>, players: Option<u8>) {
        if let Some(rows) = rows {
            self.game.rows = rows;
        }
        if let Some(cols) = cols {
            self.game.cols = cols;
        }
        if let Some(players) = players {
            self.game.players = players;
        }
        debug!(game = ?self.game, "Game settings after overrides");
    }

    /// Turns every pause off.
    pub fn disable_pauses(&mut self) {
        self.pacing = PacingSettings::none();
    }

    /// Validates the `[game]` section.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, SettingsError> {
        Ok(GameConfig::new(self.game.rows, self.game.cols, self.game.players)?)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<ConfigError> for SettingsError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        Self::new(err.message)
    }
}
