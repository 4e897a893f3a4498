//! Typestate phases for a 3 Dot game session.
//!
//! The phase is the type parameter of [`Game<S>`], so the calls that only
//! make sense in one phase exist only on that phase:
//! - `Game<NotStarted>` and `Game<InProgress>` can [`place`](Game::place)
//! - only `Game<Won>` has a winner
//! - terminal games have no `place`
//!
//! Turn advancement and the win/draw checks happen inside `place`, in the
//! one order that is correct, so callers cannot sequence them wrongly.

use crate::action::{PlaceError, Placement};
use crate::config::GameConfig;
#[cfg(debug_assertions)]
use crate::contracts::{Contract, PlacementContract};
use crate::engine::GameEngine;
use crate::phases::Outcome;
use crate::rules;
use crate::types::{Board, Coord, PlayerId};
use tracing::{info, instrument};

// ─────────────────────────────────────────────────────────────
//  Phase markers
// ─────────────────────────────────────────────────────────────

/// Phase: no dot has been placed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotStarted;

/// Phase: the game is under way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InProgress;

/// Phase: a player completed a line of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Won {
    winner: PlayerId,
    line: [Coord; 3],
}

/// Phase: the board filled up with no line of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawn;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::NotStarted {}
    impl Sealed for super::InProgress {}
}

/// Phases that accept placements.
pub trait Playable: sealed::Sealed {}

impl Playable for NotStarted {}
impl Playable for InProgress {}

// ─────────────────────────────────────────────────────────────
//  Game
// ─────────────────────────────────────────────────────────────

/// A game session in phase `S`.
#[derive(Debug, Clone)]
pub struct Game<S> {
    engine: GameEngine,
    state: S,
}

/// Result of a placement: explicit state transition.
#[derive(Debug)]
pub enum Transition<S> {
    /// The dot was placed and the next player is up.
    Continue(Game<InProgress>),
    /// The placement was refused; the same player tries again.
    Rejected {
        /// The unchanged game.
        game: Game<S>,
        /// Why the placement was refused.
        error: PlaceError,
    },
    /// The dot completed a line of three.
    Won(Game<Won>),
    /// The dot filled the last cell without completing a line.
    Drawn(Game<Drawn>),
}

impl Game<NotStarted> {
    /// Starts a session on an empty board.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(config),
            state: NotStarted,
        }
    }
}

impl<S: Playable> Game<S> {
    /// Places the current player's dot, consuming the game and returning
    /// the next phase.
    ///
    /// A winning placement keeps the turn with the winner; otherwise the
    /// turn passes on unless the board is full.
    #[instrument(skip(self), fields(player = %self.engine.current_player()))]
    pub fn place(mut self, coord: Coord) -> Transition<S> {
        #[cfg(debug_assertions)]
        let before = self.engine.clone();

        if let Err(error) = self.engine.place_dot(coord).into_result(coord) {
            return Transition::Rejected { game: self, error };
        }

        let mover = self.engine.current_player();
        let won = self.engine.winning_line().map(|line| Won { winner: mover, line });
        let drawn = rules::is_draw(self.engine.board(), mover);
        if won.is_none() && !drawn {
            self.engine.advance_turn();
        }

        #[cfg(debug_assertions)]
        assert_contract(&before, &self.engine);

        match (won, drawn) {
            (Some(state), _) => {
                info!(winner = %state.winner, "Line of three completed");
                Transition::Won(Game {
                    engine: self.engine,
                    state,
                })
            }
            (None, true) => {
                info!("Board full, game drawn");
                Transition::Drawn(Game {
                    engine: self.engine,
                    state: Drawn,
                })
            }
            (None, false) => Transition::Continue(Game {
                engine: self.engine,
                state: InProgress,
            }),
        }
    }

    /// The player whose dot the next placement writes.
    pub fn current_player(&self) -> PlayerId {
        self.engine.current_player()
    }
}

#[cfg(debug_assertions)]
fn assert_contract(before: &GameEngine, after: &GameEngine) {
    let result = PlacementContract::post(before, after);
    debug_assert!(result.is_ok(), "{:?}", result);
}

// ─────────────────────────────────────────────────────────────
//  Common methods available on all phases
// ─────────────────────────────────────────────────────────────

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    /// The configuration of this session.
    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// Successful placements, oldest first.
    pub fn history(&self) -> &[Placement] {
        self.engine.history()
    }

    /// Read-only access to the underlying engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}

// ─────────────────────────────────────────────────────────────
//  Terminal phases
// ─────────────────────────────────────────────────────────────

impl Game<Won> {
    /// The player who completed the line.
    pub fn winner(&self) -> PlayerId {
        self.state.winner
    }

    /// The completed line, top-most end first.
    pub fn winning_line(&self) -> [Coord; 3] {
        self.state.line
    }

    /// Always [`Outcome::Winner`].
    pub fn outcome(&self) -> Outcome {
        Outcome::Winner(self.state.winner)
    }
}

impl Game<Drawn> {
    /// Always [`Outcome::Draw`].
    pub fn outcome(&self) -> Outcome {
        Outcome::Draw
    }
}
