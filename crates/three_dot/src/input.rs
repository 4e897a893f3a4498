//! Reading board coordinates from the player.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use three_dot_core::Coord;
use tracing::{debug, instrument};

/// Supplies the next coordinate to play.
///
/// Implementations only return coordinates inside `rows x cols`.
pub trait InputSource {
    /// Blocks until the player has chosen a cell on a `rows x cols` board.
    fn read_coord(&mut self, rows: usize, cols: usize) -> Result<Coord>;
}

/// Line-oriented prompt: asks for a 1-based row, then a 1-based column.
///
/// Anything that is not a number in range is refused and asked again.
pub struct LineInput<R, W> {
    reader: R,
    prompt: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Reads lines from `reader`, writing prompts to `prompt`.
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }

    /// Asks for one number in `1..=limit` and returns it zero-based.
    #[instrument(skip(self))]
    fn read_index(&mut self, label: &str, limit: usize) -> Result<usize> {
        loop {
            write!(self.prompt, "\n>Please enter a {} number : ", label)?;
            self.prompt.flush()?;

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .with_context(|| format!("Failed to read the {} number", label))?;
            if read == 0 {
                bail!("Input closed while waiting for a {} number", label);
            }

            // Unparseable input counts as 0, which is always out of range.
            let number = line.trim().parse::<usize>().unwrap_or(0);
            if (1..=limit).contains(&number) {
                return Ok(number - 1);
            }

            debug!(input = line.trim(), "Rejected {} input", label);
            writeln!(
                self.prompt,
                "\n>!>Please enter a {} number between 1 and {}.",
                label, limit
            )?;
        }
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_coord(&mut self, rows: usize, cols: usize) -> Result<Coord> {
        let row = self.read_index("row", rows)?;
        let col = self.read_index("column", cols)?;
        Ok(Coord::new(row, col))
    }
}
