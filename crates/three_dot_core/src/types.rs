//! Core domain types for the 3 Dot game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Identifier of a player, always in `1..=9`.
///
/// The upper bound keeps every identifier renderable as a single digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who opens every game.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Largest identifier that still renders as one glyph.
    pub const MAX: u8 = 9;

    /// Creates a player id, or `None` outside `1..=9`.
    pub fn new(id: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&id).then_some(Self(id))
    }

    /// Returns the raw identifier.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the player that moves after this one in a game of `players`.
    pub fn next(self, players: u8) -> Self {
        if self.0 < players {
            Self(self.0 + 1)
        } else {
            Self::FIRST
        }
    }

    /// Single-digit glyph used on the board.
    pub fn glyph(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id).ok_or_else(|| format!("player id {} is outside 1..={}", id, Self::MAX))
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No dot here yet.
    #[default]
    Empty,
    /// Holds a dot of the given player.
    Occupied(PlayerId),
}

impl Cell {
    /// Returns true if a dot has been placed here.
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Returns the owner of the dot, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }
}

/// Zero-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves by a signed step. Returns `None` when either index would go
    /// below zero; the upper bound is the board's concern.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size grid of cells, stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `rows x cols` board.
    ///
    /// Only reached with dimensions validated by
    /// [`GameConfig`](crate::GameConfig), so the cell count cannot overflow.
    #[instrument]
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Bounds-checked lookup. `None` means there is no such cell.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Returns true if the cell exists and is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Writes a dot into an empty cell.
    ///
    /// Returns false and leaves the board untouched when the cell is off the
    /// board or already occupied.
    pub(crate) fn place(&mut self, coord: Coord, player: PlayerId) -> bool {
        match self.index(coord) {
            Some(i) if self.cells[i] == Cell::Empty => {
                self.cells[i] = Cell::Occupied(player);
                true
            }
            _ => false,
        }
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Coord::new(i / self.cols, i % self.cols), *cell))
    }

    /// Iterates one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .skip(row * self.cols)
            .take(if row < self.rows { self.cols } else { 0 })
            .copied()
    }

    /// Number of cells holding a dot.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }
}
