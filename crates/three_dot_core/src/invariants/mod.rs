//! First-class invariants for the 3 Dot game.
//!
//! Invariants are logical properties that must hold after every successful
//! placement. They are testable on their own and are checked by
//! [`PlacementContract`](crate::PlacementContract) in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod adjacency;
pub mod monotonic_board;
pub mod turn_rotation;

pub use adjacency::AdjacencyInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use turn_rotation::TurnRotationInvariant;

/// All 3 Dot invariants as a composable set.
pub type DotGameInvariants = (
    MonotonicBoardInvariant,
    AdjacencyInvariant,
    TurnRotationInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, GameConfig, GameEngine, PlayerId};

    fn played(coords: &[(usize, usize)]) -> GameEngine {
        let mut engine = GameEngine::new(GameConfig::default());
        for &(row, col) in coords {
            assert!(engine.place_dot(Coord::new(row, col)).is_success());
            engine.advance_turn();
        }
        engine
    }

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let engine = GameEngine::new(GameConfig::default());
        assert!(DotGameInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let engine = played(&[(2, 2), (1, 1), (3, 3)]);
        assert!(DotGameInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut engine = played(&[(2, 2)]);
        // A dot that never went through place_dot.
        engine.board_mut().place(Coord::new(0, 4), PlayerId::FIRST);

        let violations = DotGameInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MonotonicBoardInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = played(&[(0, 0), (0, 1)]);
        type TwoInvariants = (MonotonicBoardInvariant, TurnRotationInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
