//! The turn loop of one game session.

use crate::console::Console;
use crate::input::InputSource;
use crate::pacing::Pacer;
use anyhow::Result;
use std::io::Write;
use three_dot_core::{AnyGame, Board, Game, GameConfig, Outcome, Transition};
use tracing::{debug, info, instrument};

/// Plays one game from the welcome screen to its outcome.
pub struct GameSession<I, W, P> {
    config: GameConfig,
    input: I,
    console: Console<W, P>,
}

impl<I, W, P> GameSession<I, W, P>
where
    I: InputSource,
    W: Write,
    P: Pacer,
{
    /// Creates a session; nothing is shown until [`run`](Self::run).
    pub fn new(config: GameConfig, input: I, console: Console<W, P>) -> Self {
        Self {
            config,
            input,
            console,
        }
    }

    /// Runs the game and returns its outcome.
    ///
    /// Rejected placements are reported and the same player is asked
    /// again. Errors only come from the terminal (closed input, failed
    /// writes).
    #[instrument(
        skip(self),
        fields(
            rows = self.config.rows(),
            cols = self.config.cols(),
            players = self.config.players()
        )
    )]
    pub fn run(mut self) -> Result<Outcome> {
        info!("Game session started");
        self.console.welcome()?;
        self.console.clear()?;

        let mut game = AnyGame::from(Game::new(self.config));
        loop {
            let player = match &game {
                AnyGame::Won(won) => {
                    return self.finish(won.board(), won.outcome(), won.history().len());
                }
                AnyGame::Drawn(drawn) => {
                    return self.finish(drawn.board(), drawn.outcome(), drawn.history().len());
                }
                AnyGame::NotStarted(g) => g.current_player(),
                AnyGame::InProgress(g) => g.current_player(),
            };

            self.console.board(game.board())?;
            self.console.turn(player)?;

            let coord = self.input.read_coord(self.config.rows(), self.config.cols())?;
            debug!(%player, %coord, "Placement requested");

            game = match game {
                AnyGame::NotStarted(g) => self.resolve(g.place(coord))?,
                AnyGame::InProgress(g) => self.resolve(g.place(coord))?,
                finished => finished,
            };
        }
    }

    /// Reports a rejection and clears the screen before the next turn.
    fn resolve<S>(&mut self, transition: Transition<S>) -> Result<AnyGame>
    where
        Game<S>: Into<AnyGame>,
    {
        if let Transition::Rejected { error, .. } = &transition {
            self.console.rejection(*error)?;
        }

        let game = AnyGame::from(transition);
        if !game.is_over() {
            self.console.clear()?;
        }
        Ok(game)
    }

    fn finish(&mut self, board: &Board, outcome: Outcome, moves: usize) -> Result<Outcome> {
        self.console.clear()?;
        self.console.board(board)?;
        self.console.outcome(outcome)?;
        info!(%outcome, moves, "Game session finished");
        Ok(outcome)
    }
}
