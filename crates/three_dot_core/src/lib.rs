//! Pure game logic for the 3 Dot game.
//!
//! Players take turns placing dots on a grid. The opening dot may go
//! anywhere; every later dot must touch (orthogonally or diagonally) a dot
//! that is already on the board. The first player to line up three of their
//! own dots wins, and a full board without such a line is a draw.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Coord`], [`PlayerId`]
//! - **Config**: [`GameConfig`], validated once at construction
//! - **Rules**: pure functions for adjacency, win and draw detection
//! - **Engine**: [`GameEngine`], the mutable placement/turn engine
//! - **Typestate**: [`Game<S>`](Game) phases that make misuse unrepresentable
//! - **Invariants/Contracts**: first-class checks run in debug builds
//!
//! # Example
//!
//! ```
//! use three_dot_core::{Coord, Game, GameConfig, Transition};
//!
//! let game = Game::new(GameConfig::default());
//! match game.place(Coord::new(2, 2)) {
//!     Transition::Continue(game) => assert_eq!(game.current_player().get(), 2),
//!     _ => unreachable!("the opening dot never ends a 5x5 game"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod engine;
mod invariants;
mod phases;
pub mod rules;
mod types;
mod typestate;
mod wrapper;

pub use action::{PlaceError, Placement, PlacementOutcome};
pub use config::{ConfigError, GameConfig};
pub use contracts::{Contract, ContractViolation, PlacementContract};
pub use engine::GameEngine;
pub use invariants::{
    AdjacencyInvariant, DotGameInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, TurnRotationInvariant,
};
pub use phases::{Outcome, Phase};
pub use rules::Direction;
pub use types::{Board, Cell, Coord, PlayerId};
pub use typestate::{Drawn, Game, InProgress, NotStarted, Playable, Transition, Won};
pub use wrapper::AnyGame;
