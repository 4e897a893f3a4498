//! First-class placement events and their outcomes.

use crate::types::{Coord, PlayerId};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A dot placed on the board: who placed it and where.
///
/// The engine records every successful placement so that invariants can
/// replay the game from an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player who placed the dot.
    pub player: PlayerId,
    /// Where the dot went.
    pub coord: Coord,
}

impl Placement {
    /// Creates a placement record.
    pub fn new(player: PlayerId, coord: Coord) -> Self {
        Self { player, coord }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} -> {}", self.player, self.coord)
    }
}

/// Closed result set of [`GameEngine::place_dot`](crate::GameEngine::place_dot).
///
/// None of these are faults. A rejected placement leaves the board and the
/// turn untouched so the same player can try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// The dot was placed.
    Success,
    /// The target cell already holds a dot.
    AlreadyFilled,
    /// None of the target's neighbours holds a dot.
    NoAdjacentDot,
    /// The target lies outside the board.
    OutOfBounds,
}

impl PlacementOutcome {
    /// Returns true for [`PlacementOutcome::Success`].
    pub fn is_success(self) -> bool {
        matches!(self, PlacementOutcome::Success)
    }

    /// Converts a rejection into a [`PlaceError`] for the given target.
    pub fn into_result(self, coord: Coord) -> Result<(), PlaceError> {
        match self {
            PlacementOutcome::Success => Ok(()),
            PlacementOutcome::AlreadyFilled => Err(PlaceError::AlreadyFilled(coord)),
            PlacementOutcome::NoAdjacentDot => Err(PlaceError::NoAdjacentDot(coord)),
            PlacementOutcome::OutOfBounds => Err(PlaceError::OutOfBounds(coord)),
        }
    }
}

/// Reason a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum PlaceError {
    /// The target cell already holds a dot.
    #[display("Cell {} is already filled", _0)]
    AlreadyFilled(#[error(not(source))] Coord),

    /// None of the target's neighbours holds a dot.
    #[display("Cell {} has no adjacent dot", _0)]
    NoAdjacentDot(#[error(not(source))] Coord),

    /// The target lies outside the board.
    #[display("Cell {} is outside the board", _0)]
    OutOfBounds(#[error(not(source))] Coord),
}

impl PlaceError {
    /// The coordinate that was rejected.
    pub fn coord(self) -> Coord {
        match self {
            PlaceError::AlreadyFilled(c)
            | PlaceError::NoAdjacentDot(c)
            | PlaceError::OutOfBounds(c) => c,
        }
    }
}
