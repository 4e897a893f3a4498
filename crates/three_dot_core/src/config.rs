//! Immutable game configuration.

use crate::types::PlayerId;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board dimensions and player count for one game.
///
/// Fixed at construction. Both dimensions are at least one, the board
/// holds at most [`GameConfig::MAX_CELLS`] cells and the player count is in
/// `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    players: u8,
}

impl GameConfig {
    /// Default board height.
    pub const DEFAULT_ROWS: usize = 5;
    /// Default board width.
    pub const DEFAULT_COLS: usize = 5;
    /// Default number of players.
    pub const DEFAULT_PLAYERS: u8 = 2;
    /// Largest board accepted, counted in cells.
    pub const MAX_CELLS: usize = 1 << 16;

    /// Creates a validated configuration.
    #[instrument]
    pub fn new(rows: usize, cols: usize, players: u8) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::new(format!(
                "Board must be at least 1x1, got {}x{}",
                rows, cols
            )));
        }
        match rows.checked_mul(cols) {
            Some(cells) if cells <= Self::MAX_CELLS => {}
            _ => {
                return Err(ConfigError::new(format!(
                    "Board of {}x{} exceeds the limit of {} cells",
                    rows,
                    cols,
                    Self::MAX_CELLS
                )));
            }
        }
        if PlayerId::new(players).is_none() {
            return Err(ConfigError::new(format!(
                "Player count must be between 1 and {}, got {}",
                PlayerId::MAX,
                players
            )));
        }

        debug!(rows, cols, players, "Game config validated");
        Ok(Self {
            rows,
            cols,
            players,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of players taking turns.
    pub fn players(&self) -> u8 {
        self.players
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
            players: Self::DEFAULT_PLAYERS,
        }
    }
}

/// Unvalidated shape used for deserialization.
#[derive(Deserialize)]
struct RawGameConfig {
    #[serde(default = "default_rows")]
    rows: usize,
    #[serde(default = "default_cols")]
    cols: usize,
    #[serde(default = "default_players")]
    players: u8,
}

fn default_rows() -> usize {
    GameConfig::DEFAULT_ROWS
}

fn default_cols() -> usize {
    GameConfig::DEFAULT_COLS
}

fn default_players() -> u8 {
    GameConfig::DEFAULT_PLAYERS
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        GameConfig::new(raw.rows, raw.cols, raw.players)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_five_by_five_two_players() {
        let config = GameConfig::default();
        assert_eq!((config.rows(), config.cols(), config.players()), (5, 5, 2));
    }

    #[test]
    fn test_rejects_zero_dimension() {
        assert!(GameConfig::new(0, 5, 2).is_err());
        assert!(GameConfig::new(5, 0, 2).is_err());
        assert!(GameConfig::new(1, 1, 1).is_ok());
    }

    #[test]
    fn test_rejects_oversized_board() {
        let err = GameConfig::new(usize::MAX / 2, 3, 2).unwrap_err();
        assert!(err.message.contains("exceeds the limit"));
        assert!(GameConfig::new(usize::MAX, usize::MAX, 2).is_err());
        assert!(GameConfig::new(GameConfig::MAX_CELLS + 1, 1, 2).is_err());
    }

    #[test]
    fn test_accepts_board_at_cell_limit() {
        let config = GameConfig::new(256, 256, 2).unwrap();
        assert_eq!(config.rows() * config.cols(), GameConfig::MAX_CELLS);
    }

    #[test]
    fn test_rejects_player_count() {
        assert!(GameConfig::new(3, 3, 0).is_err());
        assert!(GameConfig::new(3, 3, 10).is_err());
        assert!(GameConfig::new(3, 3, 9).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let config: GameConfig = toml::from_str("rows = 4\nplayers = 3").unwrap();
        assert_eq!((config.rows(), config.cols(), config.players()), (4, 5, 3));

        let bad: Result<GameConfig, _> = toml::from_str("players = 12");
        assert!(bad.is_err());
    }
}
