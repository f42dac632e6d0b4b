//! Tests for win propagation from sub-boards to the meta-board.

use utictac::{Board, Cell, GameError, MetaGame, Player, Position};

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

#[test]
fn test_three_moves_win_centre_board() {
    let mut game = MetaGame::new();
    assert_eq!(game.play(p(1, 1), p(0, 0), Player::O), Ok(Cell::Empty));
    assert_eq!(game.play(p(1, 1), p(1, 1), Player::O), Ok(Cell::Empty));
    assert_eq!(game.play(p(1, 1), p(2, 2), Player::O), Ok(Cell::Empty));

    assert_eq!(game.cell_at(p(1, 1)), Ok(Cell::O));
    assert_eq!(game.board_at(p(1, 1)).unwrap().winner(), Cell::O);
    for inner in Position::all() {
        assert!(matches!(
            game.play(p(1, 1), inner, Player::X),
            Err(GameError::GameAlreadyDecided { winner: Cell::O, .. })
        ));
    }
}

#[test]
fn test_diagonal_sub_boards_decide_game() {
    let mut game = MetaGame::new();
    for outer in [p(0, 0), p(1, 1)] {
        for row in 0..3 {
            game.play(outer, p(row, 1), Player::X).unwrap();
        }
        assert_eq!(game.winner(), Cell::Empty);
    }
    game.play(p(2, 2), p(0, 0), Player::X).unwrap();
    game.play(p(2, 2), p(1, 0), Player::X).unwrap();
    assert_eq!(game.play(p(2, 2), p(2, 0), Player::X), Ok(Cell::X));
    assert_eq!(game.winner(), Cell::X);
    assert_eq!(game.meta_board(), &"X--\n-X-\n--X".parse::<Board>().unwrap());
}

#[test]
fn test_first_winner_of_sub_board_is_kept() {
    let mut game = MetaGame::new();
    for col in 0..3 {
        game.play(p(0, 2), p(1, col), Player::X).unwrap();
    }
    // O can no longer play there to claim it.
    assert!(game.play(p(0, 2), p(0, 0), Player::O).is_err());
    assert_eq!(game.cell_at(p(0, 2)), Ok(Cell::X));
}

#[test]
fn test_drawn_sub_board_is_decided_but_unclaimed() {
    let mut game = MetaGame::new();
    let plays = [
        (Player::X, p(0, 0)),
        (Player::O, p(0, 1)),
        (Player::X, p(0, 2)),
        (Player::X, p(1, 0)),
        (Player::O, p(1, 1)),
        (Player::O, p(1, 2)),
        (Player::O, p(2, 0)),
        (Player::X, p(2, 1)),
        (Player::X, p(2, 2)),
    ];
    for (player, inner) in plays {
        game.play(p(2, 0), inner, player).unwrap();
    }
    assert_eq!(game.cell_at(p(2, 0)), Ok(Cell::Empty));
    assert_eq!(game.is_decided(p(2, 0)), Ok(true));
    assert_eq!(game.is_decided(p(0, 0)), Ok(false));
    assert_eq!(
        game.play(p(2, 0), p(1, 1), Player::X),
        Err(GameError::CellOccupied(p(1, 1)))
    );
}

#[test]
fn test_render_places_sub_boards() {
    let mut game = MetaGame::new();
    let fixtures = [(p(1, 2), "XXO\nO-O\nX-O"), (p(2, 2), "X-O\n-XO\nXOX")];
    for (outer, fixture) in fixtures {
        let board: Board = fixture.parse().unwrap();
        for inner in Position::all() {
            if let Some(player) = board.cell_at(inner).unwrap().player() {
                game.play(outer, inner, player).unwrap();
            }
        }
    }
    let expected = "\
+-----++-----++-----+
| --- || --- || --- |
| --- || --- || --- |
| --- || --- || --- |
+-----++-----++-----+
| --- || --- || XXO |
| --- || --- || O-O |
| --- || --- || X-O |
+-----++-----++-----+
| --- || --- || X-O |
| --- || --- || -XO |
| --- || --- || XOX |
+-----++-----++-----+
";
    assert_eq!(game.to_string(), expected);
}
