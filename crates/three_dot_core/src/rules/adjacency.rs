//! Neighbour lookup and the adjacency placement rule.

use crate::types::{Board, Coord};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight compass steps from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
    /// Up and to the left.
    UpLeft,
    /// Up and to the right.
    UpRight,
    /// Down and to the left.
    DownLeft,
    /// Down and to the right.
    DownRight,
}

impl Direction {
    /// Signed `(row, col)` step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Steps `steps` times from `from`, staying on the board.
    ///
    /// Returns `None` when the destination is off the board.
    pub fn walk(self, board: &Board, from: Coord, steps: isize) -> Option<Coord> {
        let (d_row, d_col) = self.delta();
        from.offset(d_row * steps, d_col * steps)
            .filter(|c| board.contains(*c))
    }
}

/// Iterates the on-board neighbours of a cell (at most eight).
pub fn neighbors(board: &Board, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
    Direction::iter().filter_map(move |dir| dir.walk(board, coord, 1))
}

/// Returns true if any neighbour of `coord` holds a dot, whoever owns it.
///
/// Neighbours off the board are absent, not a violation.
#[instrument(skip(board))]
pub fn has_occupied_neighbor(board: &Board, coord: Coord) -> bool {
    neighbors(board, coord).any(|n| board.get(n).is_some_and(|c| c.is_occupied()))
}
