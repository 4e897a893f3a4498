//! Runtime view of the game phase and its outcome.

use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// Phase of a game session.
///
/// `NotStarted -> InProgress -> {Won, Drawn}`; rejected placements never
/// change the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No dot has been placed yet.
    NotStarted,
    /// At least one dot placed, no winner, board not full.
    InProgress,
    /// A player completed a line of three.
    Won(PlayerId),
    /// The board filled without a line of three.
    Drawn,
}

impl Phase {
    /// Returns true for the terminal phases.
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Drawn)
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(PlayerId),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

impl From<Outcome> for Phase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => Phase::Won(player),
            Outcome::Draw => Phase::Drawn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_maps_to_terminal_phase() {
        let p2 = PlayerId::new(2).unwrap();
        assert_eq!(Phase::from(Outcome::Winner(p2)), Phase::Won(p2));
        assert_eq!(Phase::from(Outcome::Draw), Phase::Drawn);
        assert!(Phase::from(Outcome::Draw).is_over());
    }
}
