//! Turn rotation invariant: players move 1, 2, .., N, 1, ..

use super::Invariant;
use crate::{GameEngine, PlayerId, rules};

/// Invariant: the history follows the player rotation, and the current
/// player is the next in rotation, except after a game-ending placement
/// where the last mover keeps the turn.
pub struct TurnRotationInvariant;

impl Invariant<GameEngine> for TurnRotationInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let players = engine.config().players();
        let mut expected = PlayerId::FIRST;

        for placement in engine.history() {
            if placement.player != expected {
                return false;
            }
            expected = expected.next(players);
        }

        match engine.history().last() {
            Some(last)
                if rules::has_line_of_three(engine.board(), last.player)
                    || rules::is_full(engine.board()) =>
            {
                engine.current_player() == last.player
            }
            _ => engine.current_player() == expected,
        }
    }

    fn description() -> &'static str {
        "Players take turns in rotation starting from player 1"
    }
}
