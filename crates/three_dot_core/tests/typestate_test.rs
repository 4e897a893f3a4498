//! Tests for the typestate game phases.

use three_dot_core::{
    AnyGame, Coord, DotGameInvariants, Game, GameConfig, InProgress, InvariantSet, Outcome,
    Phase, PlaceError, PlayerId, Transition,
};

fn continued<S>(transition: Transition<S>) -> Game<InProgress>
where
    Game<S>: Into<AnyGame>,
{
    match transition {
        Transition::Continue(game) => game,
        other => panic!("expected the game to continue, got {:?}", AnyGame::from(other).phase()),
    }
}

#[test]
fn test_lifecycle_to_win() {
    let game = Game::new(GameConfig::default());
    assert_eq!(game.current_player(), PlayerId::FIRST);

    let game = continued(game.place(Coord::new(0, 0)));
    assert_eq!(game.current_player().get(), 2);
    let game = continued(game.place(Coord::new(1, 1)));
    let game = continued(game.place(Coord::new(0, 1)));
    let game = continued(game.place(Coord::new(1, 0)));

    match game.place(Coord::new(0, 2)) {
        Transition::Won(game) => {
            assert_eq!(game.winner(), PlayerId::FIRST);
            assert_eq!(game.outcome(), Outcome::Winner(PlayerId::FIRST));
            assert_eq!(
                game.winning_line(),
                [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
            );
            assert_eq!(game.history().len(), 5);
        }
        other => panic!("expected a win, got {:?}", AnyGame::from(other).phase()),
    }
}

#[test]
fn test_rejection_keeps_phase_and_player() {
    let game = continued(Game::new(GameConfig::default()).place(Coord::new(0, 0)));

    let game = match game.place(Coord::new(4, 4)) {
        Transition::Rejected { game, error } => {
            assert_eq!(error, PlaceError::NoAdjacentDot(Coord::new(4, 4)));
            game
        }
        other => panic!("expected a rejection, got {:?}", AnyGame::from(other).phase()),
    };
    assert_eq!(game.current_player().get(), 2);

    match game.place(Coord::new(0, 0)) {
        Transition::Rejected { game, error } => {
            assert_eq!(error, PlaceError::AlreadyFilled(Coord::new(0, 0)));
            assert_eq!(game.current_player().get(), 2);
            assert_eq!(game.history().len(), 1);
        }
        other => panic!("expected a rejection, got {:?}", AnyGame::from(other).phase()),
    }
}

#[test]
fn test_out_of_bounds_before_start() {
    let game = Game::new(GameConfig::new(2, 2, 2).unwrap());
    match game.place(Coord::new(2, 0)) {
        Transition::Rejected { game, error } => {
            assert_eq!(error, PlaceError::OutOfBounds(Coord::new(2, 0)));
            assert!(!game.engine().has_first_move_happened());
            assert_eq!(AnyGame::from(game).phase(), Phase::NotStarted);
        }
        other => panic!("expected a rejection, got {:?}", AnyGame::from(other).phase()),
    }
}

#[test]
fn test_draw_detection() {
    let mut game: AnyGame = Game::new(GameConfig::new(3, 3, 2).unwrap()).into();
    let order = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];

    for (row, col) in order {
        let coord = Coord::new(row, col);
        game = match game {
            AnyGame::NotStarted(g) => g.place(coord).into(),
            AnyGame::InProgress(g) => g.place(coord).into(),
            finished => panic!("game ended early: {:?}", finished.phase()),
        };
    }

    assert_eq!(game.phase(), Phase::Drawn);
    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert_eq!(game.current_player(), None);
    assert!(game.is_over());
}

#[test]
fn test_three_players_rotate() {
    let game = Game::new(GameConfig::new(5, 5, 3).unwrap());
    let game = continued(game.place(Coord::new(2, 2)));
    let game = continued(game.place(Coord::new(2, 3)));
    assert_eq!(game.current_player().get(), 3);
    let game = continued(game.place(Coord::new(3, 3)));
    assert_eq!(game.current_player(), PlayerId::FIRST);
    assert!(DotGameInvariants::check_all(game.engine()).is_ok());
}

#[test]
fn test_single_cell_board_draws_immediately() {
    let game = Game::new(GameConfig::new(1, 1, 2).unwrap());
    assert!(matches!(game.place(Coord::new(0, 0)), Transition::Drawn(_)));
}

#[test]
fn test_vertical_win_on_narrow_board() {
    // One column and one player: every dot is the same player's.
    let game = Game::new(GameConfig::new(3, 1, 1).unwrap());
    let game = continued(game.place(Coord::new(1, 0)));
    let game = continued(game.place(Coord::new(0, 0)));
    match game.place(Coord::new(2, 0)) {
        Transition::Won(game) => assert_eq!(game.winner(), PlayerId::FIRST),
        other => panic!("expected a win, got {:?}", AnyGame::from(other).phase()),
    }
}

#[test]
fn test_line_on_last_cell_is_a_win_not_a_draw() {
    let game = Game::new(GameConfig::new(1, 3, 1).unwrap());
    let game = continued(game.place(Coord::new(0, 0)));
    let game = continued(game.place(Coord::new(0, 1)));

    match game.place(Coord::new(0, 2)) {
        Transition::Won(game) => {
            assert!(game.board().cells().all(|(_, cell)| cell.is_occupied()));
            assert_eq!(AnyGame::from(game).phase(), Phase::Won(PlayerId::FIRST));
        }
        other => panic!("expected a win, got {:?}", AnyGame::from(other).phase()),
    }
}
