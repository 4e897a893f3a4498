//! Adjacency invariant: every dot after the first touched an earlier dot.

use super::Invariant;
use crate::{Board, GameEngine, rules};

/// Invariant: each placement after the opening one had an occupied
/// neighbour at the moment it was made.
pub struct AdjacencyInvariant;

impl Invariant<GameEngine> for AdjacencyInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut replayed = Board::new(engine.board().rows(), engine.board().cols());

        for (i, placement) in engine.history().iter().enumerate() {
            if i > 0 && !rules::has_occupied_neighbor(&replayed, placement.coord) {
                return false;
            }
            replayed.place(placement.coord, placement.player);
        }
        true
    }

    fn description() -> &'static str {
        "Every dot after the first is adjacent to an earlier dot"
    }
}
