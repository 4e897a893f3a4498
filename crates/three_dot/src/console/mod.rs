//! Console presentation: the grid, turn prompts and game messages.

mod render;

pub use render::{cell_glyph, render_board, spacing};

use crate::pacing::Pacer;
use crate::settings::{PacingSettings, ScreenSettings};
use anyhow::Result;
use std::io::Write;
use three_dot_core::{Board, Outcome, PlaceError, PlayerId};
use tracing::instrument;

/// Writes game screens to a terminal-like sink.
pub struct Console<W, P> {
    out: W,
    pacer: P,
    pacing: PacingSettings,
    clear_lines: usize,
}

impl<W: Write, P: Pacer> Console<W, P> {
    /// Creates a console over `out`, pausing through `pacer`.
    pub fn new(out: W, pacer: P, pacing: PacingSettings, screen: ScreenSettings) -> Self {
        Self {
            out,
            pacer,
            pacing,
            clear_lines: *screen.clear_lines(),
        }
    }

    /// Title and rules, then the welcome pause.
    #[instrument(skip(self))]
    pub fn welcome(&mut self) -> Result<()> {
        writeln!(self.out, ">!>!> Welcome to the 3 Dot Game <!<!<")?;
        writeln!(self.out, "\nGame Description :")?;
        writeln!(
            self.out,
            "The first player to place 3 consecutive dots in any direction wins!"
        )?;
        writeln!(
            self.out,
            "After the first dot, every dot must touch another dot (diagonals count)."
        )?;
        self.out.flush()?;
        self.pacer.pause(self.pacing.welcome());
        Ok(())
    }

    /// Prints the grid.
    pub fn board(&mut self, board: &Board) -> Result<()> {
        write!(self.out, "{}", render_board(board))?;
        Ok(())
    }

    /// Announces whose turn it is.
    pub fn turn(&mut self, player: PlayerId) -> Result<()> {
        writeln!(self.out, "\n>>Now, Player {}'s turn.", player)?;
        self.out.flush()?;
        Ok(())
    }

    /// Explains a refused placement, then pauses so it can be read.
    #[instrument(skip(self))]
    pub fn rejection(&mut self, error: PlaceError) -> Result<()> {
        let coord = error.coord();
        let reason = match error {
            PlaceError::AlreadyFilled(_) => "This location is already filled!",
            PlaceError::NoAdjacentDot(_) => "There was no adjacent dot!",
            PlaceError::OutOfBounds(_) => "That location is outside the board!",
        };
        writeln!(
            self.out,
            "\n>>{} Row[{}] Column[{}]",
            reason,
            coord.row + 1,
            coord.col + 1
        )?;
        self.out.flush()?;
        self.pacer.pause(self.pacing.rejection());
        Ok(())
    }

    /// Announces the end of the game.
    pub fn outcome(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Winner(player) => writeln!(self.out, "\n>!>!> Player {} win! <!<!<", player)?,
            Outcome::Draw => writeln!(self.out, "\n>!>!> Draw <!<!<")?,
        }
        self.out.flush()?;
        Ok(())
    }

    /// Pushes the previous screen out of view with blank lines.
    pub fn clear(&mut self) -> Result<()> {
        write!(self.out, "{}", "\n".repeat(self.clear_lines))?;
        Ok(())
    }

    /// Consumes the console, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
