//! Contract-based validation for placements.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}

use crate::action::PlaceError;
use crate::engine::GameEngine;
use crate::invariants::{DotGameInvariants, InvariantSet};
use crate::types::Coord;
use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Error returned when the precondition fails.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// A postcondition did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Postcondition failed: {}", message)]
pub struct ContractViolation {
    /// Which checks failed.
    pub message: String,
}

/// Contract for placing a dot.
///
/// Preconditions:
/// - Target is on the board
/// - Target is empty, unless this is the opening dot
/// - Target touches an existing dot, unless this is the opening dot
///
/// Postconditions:
/// - Exactly one more dot than before
/// - Board remains monotonic and matches the history
/// - Every dot after the first touched an earlier one
/// - Players keep their rotation
pub struct PlacementContract;

impl Contract<GameEngine, Coord> for PlacementContract {
    type Rejection = PlaceError;

    fn pre(engine: &GameEngine, coord: &Coord) -> Result<(), PlaceError> {
        engine.check(*coord).into_result(*coord)
    }

    #[instrument(skip_all)]
    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), ContractViolation> {
        let mut failures = Vec::new();

        let added =
            after.board().occupied_count() as isize - before.board().occupied_count() as isize;
        if added != 1 {
            failures.push(format!("expected exactly one new dot, found {}", added));
        }

        if let Err(violations) = DotGameInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            warn!(?failures, "Placement postcondition violated");
            Err(ContractViolation {
                message: failures.join("; "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, PlayerId};

    #[test]
    fn test_precondition_first_move_anywhere() {
        let engine = GameEngine::new(GameConfig::default());
        assert!(PlacementContract::pre(&engine, &Coord::new(3, 4)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.place_dot(Coord::new(2, 2));
        assert_eq!(
            PlacementContract::pre(&engine, &Coord::new(2, 2)),
            Err(PlaceError::AlreadyFilled(Coord::new(2, 2)))
        );
    }

    #[test]
    fn test_precondition_detached_cell() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.place_dot(Coord::new(0, 0));
        assert_eq!(
            PlacementContract::pre(&engine, &Coord::new(4, 4)),
            Err(PlaceError::NoAdjacentDot(Coord::new(4, 4)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameEngine::new(GameConfig::default());
        let mut after = before.clone();
        after.place_dot(Coord::new(1, 1));
        after.advance_turn();
        assert!(PlacementContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameEngine::new(GameConfig::default());
        let mut after = before.clone();
        after.place_dot(Coord::new(1, 1));
        after.advance_turn();
        after.board_mut().place(Coord::new(4, 4), PlayerId::FIRST);

        let violation = PlacementContract::post(&before, &after).unwrap_err();
        assert!(violation.message.contains("exactly one new dot"));
    }
}
