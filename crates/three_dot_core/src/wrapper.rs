//! Phase-erased wrapper around [`Game<S>`](Game).

use crate::phases::{Outcome, Phase};
use crate::types::{Board, PlayerId};
use crate::typestate::{Drawn, Game, InProgress, NotStarted, Transition, Won};
use tracing::debug;

/// A game in any phase.
///
/// Typestate phases are distinct types; this enum lets a loop hold
/// whichever one it currently has.
#[derive(Debug, Clone)]
pub enum AnyGame {
    /// No dot placed yet.
    NotStarted(Game<NotStarted>),
    /// Game under way.
    InProgress(Game<InProgress>),
    /// Finished with a winner.
    Won(Game<Won>),
    /// Finished in a draw.
    Drawn(Game<Drawn>),
}

impl From<Game<NotStarted>> for AnyGame {
    fn from(game: Game<NotStarted>) -> Self {
        AnyGame::NotStarted(game)
    }
}

impl From<Game<InProgress>> for AnyGame {
    fn from(game: Game<InProgress>) -> Self {
        AnyGame::InProgress(game)
    }
}

impl From<Game<Won>> for AnyGame {
    fn from(game: Game<Won>) -> Self {
        AnyGame::Won(game)
    }
}

impl From<Game<Drawn>> for AnyGame {
    fn from(game: Game<Drawn>) -> Self {
        AnyGame::Drawn(game)
    }
}

impl<S> From<Transition<S>> for AnyGame
where
    Game<S>: Into<AnyGame>,
{
    fn from(transition: Transition<S>) -> Self {
        match transition {
            Transition::Continue(game) => game.into(),
            Transition::Rejected { game, error } => {
                debug!(%error, "Placement rejected, phase unchanged");
                game.into()
            }
            Transition::Won(game) => game.into(),
            Transition::Drawn(game) => game.into(),
        }
    }
}

impl AnyGame {
    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::NotStarted(game) => game.board(),
            AnyGame::InProgress(game) => game.board(),
            AnyGame::Won(game) => game.board(),
            AnyGame::Drawn(game) => game.board(),
        }
    }

    /// Runtime phase.
    pub fn phase(&self) -> Phase {
        match self {
            AnyGame::NotStarted(_) => Phase::NotStarted,
            AnyGame::InProgress(_) => Phase::InProgress,
            AnyGame::Won(game) => game.outcome().into(),
            AnyGame::Drawn(game) => game.outcome().into(),
        }
    }

    /// The player to move, while the game accepts placements.
    pub fn current_player(&self) -> Option<PlayerId> {
        match self {
            AnyGame::NotStarted(game) => Some(game.current_player()),
            AnyGame::InProgress(game) => Some(game.current_player()),
            AnyGame::Won(_) | AnyGame::Drawn(_) => None,
        }
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            AnyGame::Won(game) => Some(game.outcome()),
            AnyGame::Drawn(game) => Some(game.outcome()),
            AnyGame::NotStarted(_) | AnyGame::InProgress(_) => None,
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.phase().is_over()
    }
}
