//! Draw detection.

use super::win::has_line_of_three;
use crate::types::{Board, PlayerId};
use tracing::instrument;

/// Checks if every cell holds a dot.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| cell.is_occupied())
}

/// A full board on which the player who just moved has no line of three.
///
/// Only the last mover needs checking: no other player's dots changed.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, last_mover: PlayerId) -> bool {
    is_full(board) && !has_line_of_three(board, last_mover)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;

    fn fill(board: &mut Board, pattern: &[&[u8]]) {
        for (row, ids) in pattern.iter().enumerate() {
            for (col, id) in ids.iter().enumerate() {
                board.place(Coord::new(row, col), PlayerId::new(*id).unwrap());
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3, 3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(2, 2);
        board.place(Coord::new(0, 0), PlayerId::FIRST);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new(3, 3);
        fill(&mut board, &[&[1, 2, 1], &[1, 2, 2], &[2, 1, 1]]);
        assert!(is_full(&board));
        assert!(is_draw(&board, PlayerId::FIRST));
        assert!(is_draw(&board, PlayerId::new(2).unwrap()));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(3, 3);
        fill(&mut board, &[&[1, 1, 1], &[2, 2, 1], &[2, 1, 2]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board, PlayerId::FIRST));
    }
}
