//! Monotonic board invariant: dots are never overwritten or lost.

use super::Invariant;
use crate::{Board, GameEngine};

/// Invariant: replaying the history onto an empty board reproduces the
/// board, and no replayed placement lands on an occupied cell.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut replayed = Board::new(engine.board().rows(), engine.board().cols());

        for placement in engine.history() {
            if !replayed.place(placement.coord, placement.player) {
                return false;
            }
        }

        replayed == *engine.board()
            && engine.has_first_move_happened() != engine.history().is_empty()
    }

    fn description() -> &'static str {
        "Board dots are monotonic (never overwritten) and match the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, GameConfig, Placement, PlayerId};

    #[test]
    fn test_empty_game_holds() {
        let engine = GameEngine::new(GameConfig::default());
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_rejections_keep_it() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.place_dot(Coord::new(0, 0));
        engine.place_dot(Coord::new(0, 0));
        engine.place_dot(Coord::new(4, 4));
        assert!(MonotonicBoardInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.place_dot(Coord::new(1, 1));
        engine
            .history_mut()
            .push(Placement::new(PlayerId::new(2).unwrap(), Coord::new(1, 1)));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
