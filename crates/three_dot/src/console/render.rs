//! Text rendering of the board.

use three_dot_core::{Board, Cell};

/// Glyph for an empty cell.
pub const EMPTY_GLYPH: char = '.';

/// Spaces between glyphs: one more than the widest header number.
pub fn spacing(board: &Board) -> usize {
    1 + digits(board.rows().max(board.cols()))
}

fn digits(number: usize) -> usize {
    number.to_string().len()
}

/// Glyph for one cell: `.` when empty, the owner's digit otherwise.
pub fn cell_glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_GLYPH,
        Cell::Occupied(player) => player.glyph(),
    }
}

/// Renders the grid with 1-based row and column headers.
///
/// Header numbers are padded so each glyph sits under its column number
/// whatever the number of digits.
pub fn render_board(board: &Board) -> String {
    let gap = spacing(board);
    let mut out = String::new();

    out.push_str(&" ".repeat(gap + 1));
    for col in 1..=board.cols() {
        out.push_str(&col.to_string());
        out.push_str(&" ".repeat(gap - (digits(col) - 1)));
    }
    out.push('\n');

    for row in 0..board.rows() {
        out.push_str(&(row + 1).to_string());
        out.push_str(&" ".repeat(gap - (digits(row + 1) - 1)));
        for cell in board.row(row) {
            out.push(cell_glyph(cell));
            out.push_str(&" ".repeat(gap));
        }
        out.push('\n');
    }

    out
}
