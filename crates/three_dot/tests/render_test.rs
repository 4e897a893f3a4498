//! Tests for the board renderer.

use three_dot::{render_board, spacing};
use three_dot_core::{Coord, Game, GameConfig, Transition};

#[test]
fn test_empty_five_by_five() {
    let game = Game::new(GameConfig::default());
    let expected = [
        "   1  2  3  4  5  ",
        "1  .  .  .  .  .  ",
        "2  .  .  .  .  .  ",
        "3  .  .  .  .  .  ",
        "4  .  .  .  .  .  ",
        "5  .  .  .  .  .  ",
    ]
    .map(|line| format!("{}\n", line))
    .concat();
    assert_eq!(render_board(game.board()), expected);
}

#[test]
fn test_dots_show_player_digit() {
    let game = Game::new(GameConfig::new(2, 2, 2).unwrap());
    let game = match game.place(Coord::new(0, 1)) {
        Transition::Continue(game) => game,
        _ => panic!("opening dot should not end a 2x2 game"),
    };
    let game = match game.place(Coord::new(1, 1)) {
        Transition::Continue(game) => game,
        _ => panic!("second dot should not end a 2x2 game"),
    };

    let rendered = render_board(game.board());
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], "1  .  1  ");
    assert_eq!(lines[2], "2  .  2  ");
}

#[test]
fn test_two_digit_headers_stay_aligned() {
    let game = Game::new(GameConfig::new(10, 3, 2).unwrap());
    assert_eq!(spacing(game.board()), 3);

    let rendered = render_board(game.board());
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "    1   2   3   ");
    assert_eq!(lines[1], "1   .   .   .   ");
    assert_eq!(lines[10], "10  .   .   .   ");

    // Every glyph sits under its column number.
    for line in &lines[1..] {
        assert_eq!(line.find('.'), lines[0].find('1'));
    }
}
