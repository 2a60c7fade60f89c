//! Capture behavior through the public session API.

use area::{AreaConfig, AreaGame, Color, Coord, GameResult, MoveError, Palette, PlayerId, TurnState};

const A: Color = Color(0);
const B: Color = Color(1);
const C: Color = Color(2);

fn rows(layout: &[&[Color]]) -> Vec<Vec<Color>> {
    layout.iter().map(|r| r.to_vec()).collect()
}

fn abc_game(layout: &[&[Color]]) -> AreaGame {
    let config = AreaConfig::default().with_palette(Palette::new(["A", "B", "C"]).unwrap());
    AreaGame::from_rows(config, &rows(layout)).unwrap()
}

/// One C-colored path runs from player 0's corner into the board.
#[test]
fn test_single_path_capture_on_4x4() {
    let mut game = abc_game(&[
        &[A, C, C, B],
        &[B, A, C, B],
        &[B, B, C, A],
        &[A, B, A, B],
    ]);
    assert_eq!(game.color(PlayerId::P0), A);
    assert_eq!(game.color(PlayerId::P1), B);

    let outcome = game.command(PlayerId::P0, C).unwrap();

    let mut absorbed = outcome.capture.absorbed.clone();
    absorbed.sort();
    assert_eq!(
        absorbed,
        vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)]
    );
    assert_eq!(game.territory_len(PlayerId::P0), 5);
    assert_eq!(game.color(PlayerId::P0), C);

    // player 1 untouched
    assert_eq!(game.territory_len(PlayerId::P1), 1);
    assert_eq!(game.color(PlayerId::P1), B);
    assert_eq!(game.owner(Coord::new(3, 3)), Some(PlayerId::P1));
    assert_eq!(game.turn(), TurnState::AwaitingPlayer1);
}

/// With only two colors both are held from the start, so nobody can move.
#[test]
fn test_two_color_palette_has_no_moves() {
    let config = AreaConfig::default().with_palette(Palette::new(["A", "B"]).unwrap());
    let mut game = AreaGame::from_rows(
        config,
        &rows(&[
            &[A, B, B, B],
            &[B, A, B, B],
            &[B, B, B, A],
            &[A, B, A, B],
        ]),
    )
    .unwrap();

    assert!(game.is_over());
    assert_eq!(game.winner(), Some(GameResult::Draw));
    assert_eq!(game.command(PlayerId::P0, B), Err(MoveError::GameOver));
}

#[test]
fn test_capture_repaints_whole_territory() {
    let mut game = abc_game(&[
        &[A, C, B, B],
        &[C, C, B, A],
        &[B, B, A, B],
    ]);

    game.command(PlayerId::P0, C).unwrap();
    assert_eq!(game.territory_len(PlayerId::P0), 4);
    game.command(PlayerId::P1, A).unwrap();
    assert_eq!(game.territory_len(PlayerId::P1), 3);

    // B is the only color neither side wears now
    assert_eq!(game.legal_colors(PlayerId::P0), vec![B]);
    let outcome = game.command(PlayerId::P0, B).unwrap();
    assert_eq!(outcome.gained(), 5);
    for cell in game.territories().territory(PlayerId::P0).cells() {
        assert_eq!(game.cell(cell), B);
    }

    assert!(outcome.ended());
    assert_eq!(game.winner(), Some(GameResult::Winner(PlayerId::P0)));
}

#[test]
fn test_deep_chain_absorbed_in_one_turn() {
    // a snake of Cs winding through the board
    let mut game = abc_game(&[
        &[A, C, C, C, C],
        &[A, A, A, A, C],
        &[C, C, C, C, C],
        &[C, A, A, A, A],
        &[C, C, C, C, B],
    ]);

    let outcome = game.command(PlayerId::P0, C).unwrap();
    assert_eq!(outcome.gained(), 15);
    assert_eq!(game.owner(Coord::new(4, 3)), Some(PlayerId::P0));
}
