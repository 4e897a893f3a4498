//! Win detection: three consecutive dots of one player.

use super::adjacency::Direction;
use crate::types::{Board, Cell, Coord, PlayerId};
use tracing::instrument;

/// Length of a winning line.
pub const LINE_LENGTH: isize = 3;

/// Forward axes scanned from each dot.
///
/// Every line of three is found from its top-most (then left-most) end, so
/// the four backward directions never need checking.
pub const AXES: [Direction; 4] = [
    Direction::Down,
    Direction::Right,
    Direction::DownLeft,
    Direction::DownRight,
];

/// Returns the first line of three held by `player`, scanning row-major.
///
/// Lookups that leave the board never match.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: PlayerId) -> Option<[Coord; 3]> {
    let mine = Cell::Occupied(player);

    board
        .cells()
        .filter(|(_, cell)| *cell == mine)
        .find_map(|(origin, _)| {
            AXES.into_iter().find_map(|axis| {
                let second = axis.walk(board, origin, 1)?;
                let third = axis.walk(board, origin, LINE_LENGTH - 1)?;
                (board.get(second) == Some(mine) && board.get(third) == Some(mine))
                    .then_some([origin, second, third])
            })
        })
}

/// Returns true if `player` holds three dots in a row anywhere.
#[instrument(skip(board))]
pub fn has_line_of_three(board: &Board, player: PlayerId) -> bool {
    winning_line(board, player).is_some()
}
