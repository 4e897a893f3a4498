//! The placement and turn engine.

use crate::action::{Placement, PlacementOutcome};
use crate::config::GameConfig;
use crate::rules;
use crate::types::{Board, Coord, PlayerId};
use tracing::{debug, instrument};

/// Owns the board, the turn counter and the first-move flag.
///
/// This is the raw engine: it answers every query at any time and leaves
/// sequencing to the caller. [`Game`](crate::Game) wraps it in typestate
/// phases so that turn advancement and end-of-game checks can only happen
/// in the right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    current_player: PlayerId,
    has_first_move_happened: bool,
    history: Vec<Placement>,
}

impl GameEngine {
    /// Creates an engine with an empty board; player 1 moves first.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.rows(), config.cols()),
            config,
            current_player: PlayerId::FIRST,
            has_first_move_happened: false,
            history: Vec::new(),
        }
    }

    /// Places the current player's dot at `coord`.
    ///
    /// The opening dot may go on any cell. After that the target must be
    /// empty and touch an occupied cell. Only [`PlacementOutcome::Success`]
    /// mutates the engine; the turn does not advance here.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_dot(&mut self, coord: Coord) -> PlacementOutcome {
        let outcome = self.check(coord);
        if outcome.is_success() {
            self.board.place(coord, self.current_player);
            self.history.push(Placement::new(self.current_player, coord));
            self.has_first_move_happened = true;
        }
        debug!(?outcome, "Placement resolved");
        outcome
    }

    /// Outcome `place_dot` would produce, without mutating anything.
    pub fn check(&self, coord: Coord) -> PlacementOutcome {
        if !self.board.contains(coord) {
            PlacementOutcome::OutOfBounds
        } else if !self.has_first_move_happened {
            // An empty engine has no dots to be adjacent to.
            PlacementOutcome::Success
        } else if !self.board.is_empty(coord) {
            PlacementOutcome::AlreadyFilled
        } else if !rules::has_occupied_neighbor(&self.board, coord) {
            PlacementOutcome::NoAdjacentDot
        } else {
            PlacementOutcome::Success
        }
    }

    /// Passes the turn to the next player, wrapping back to player 1.
    #[instrument(skip(self))]
    pub fn advance_turn(&mut self) {
        let next = self.current_player.next(self.config.players());
        debug!(from = %self.current_player, to = %next, "Turn advanced");
        self.current_player = next;
    }

    /// Returns true if the current player has three dots in a row.
    ///
    /// Only the player who just moved can have completed a line, so this is
    /// the only win check the game loop needs.
    pub fn has_current_player_won(&self) -> bool {
        rules::has_line_of_three(&self.board, self.current_player)
    }

    /// The current player's first winning line in row-major order, if any.
    pub fn winning_line(&self) -> Option<[Coord; 3]> {
        rules::winning_line(&self.board, self.current_player)
    }

    /// Returns true if every cell holds a dot.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The player whose dot the next placement writes.
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Whether the opening dot has been placed.
    pub fn has_first_move_happened(&self) -> bool {
        self.has_first_move_happened
    }

    /// Successful placements, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<Placement> {
        &mut self.history
    }
}
