use quoridor_core::{
    check_wall, Board, Game, IllegalMove, Move, Snapshot, SnapshotError, Square, Wall,
    WALL_CANDIDATES,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("valid square")
}

fn board_with(
    pawns: [(u8, u8); 2],
    walls: &[(u8, u8, u8)],
    walls_remaining: [u8; 2],
) -> Result<Board, SnapshotError> {
    Board::from_snapshot(&Snapshot {
        pawns,
        walls: walls.to_vec(),
        walls_remaining,
        current_player: 0,
    })
}

/// Rows 4 and 5 walled apart except column 8, which drops into a two-square pocket
/// whose last exit is the edge under (6, 8).
fn nearly_sealed_game() -> Game {
    let mut game = Game::new();
    for wall in [
        Wall::horizontal(5, 0),
        Wall::horizontal(5, 2),
        Wall::horizontal(5, 4),
        Wall::horizontal(5, 6),
        Wall::vertical(6, 7),
    ] {
        game.apply(Move::Wall(wall)).expect("wall keeps a path open");
    }
    game
}

#[test]
fn fresh_board_pawn_moves() {
    let board = Board::new();
    assert_eq!(
        board.legal_pawn_moves().as_slice(),
        &[sq(7, 4), sq(8, 3), sq(8, 5)]
    );
}

#[test]
fn adjacent_opponent_can_be_jumped() {
    let board = board_with([(4, 4), (3, 4)], &[], [10, 10]).unwrap();
    let moves = board.legal_pawn_moves();
    assert!(moves.contains(&sq(2, 4)));
    assert!(!moves.contains(&sq(3, 4)));
    assert_eq!(
        moves.as_slice(),
        &[sq(2, 4), sq(5, 4), sq(4, 3), sq(4, 5)]
    );
}

#[test]
fn walled_jump_turns_into_side_steps() {
    // The edge between (3, 4) and (2, 4) is the one a horizontal wall anchored at (3, 4) covers.
    let board = board_with([(4, 4), (3, 4)], &[(3, 4, 0)], [10, 9]).unwrap();
    let moves = board.legal_pawn_moves();
    assert!(!moves.contains(&sq(2, 4)));
    assert!(moves.contains(&sq(3, 3)));
    assert!(moves.contains(&sq(3, 5)));
    assert_eq!(
        moves.as_slice(),
        &[sq(3, 3), sq(3, 5), sq(5, 4), sq(4, 3), sq(4, 5)]
    );
}

#[test]
fn wall_above_the_jump_edge_does_not_block_it() {
    let board = board_with([(4, 4), (3, 4)], &[(2, 4, 0)], [10, 9]).unwrap();
    assert!(board.legal_pawn_moves().contains(&sq(2, 4)));
}

#[test]
fn sealing_wall_is_rejected_but_neighbour_is_not() {
    let game = nearly_sealed_game();
    assert_eq!(
        check_wall(game.board(), Wall::horizontal(7, 7)),
        Err(IllegalMove::WallBlocksPath)
    );
    assert!(!game.is_legal_wall(Wall::horizontal(7, 7)));
    assert!(!game.is_legal_wall(Wall::horizontal(6, 7)));
    assert!(game.is_legal_wall(Wall::horizontal(7, 6)));
    assert!(!game.legal_wall_moves().contains(&Wall::horizontal(7, 7)));
    assert!(game.legal_wall_moves().contains(&Wall::horizontal(7, 6)));
}

#[test]
fn wall_checks_have_no_effect_on_the_board() {
    let game = nearly_sealed_game();
    let before = game.board().clone();
    for _ in 0..3 {
        for wall in WALL_CANDIDATES {
            let _ = game.is_legal_wall(wall);
        }
    }
    assert_eq!(game.board(), &before);
    assert_eq!(game.snapshot(), before.snapshot());
}

#[test]
fn boxed_in_pawn_keeps_a_side_step() {
    let board = board_with([(8, 0), (7, 0)], &[(7, 0, 0)], [10, 9]).unwrap();
    assert_eq!(board.legal_pawn_moves().as_slice(), &[sq(7, 1), sq(8, 1)]);
}

#[test]
fn pocket_without_exit_cannot_exist() {
    assert_eq!(
        board_with([(8, 0), (7, 0)], &[(7, 0, 0), (8, 1, 1)], [9, 9]),
        Err(SnapshotError::NoPath(0))
    );
}

#[test]
fn wall_moves_follow_anchor_order() {
    let game = nearly_sealed_game();
    let walls = game.legal_wall_moves();
    let mut sorted = walls.clone();
    sorted.sort();
    assert_eq!(walls, sorted);
    assert!(walls.iter().all(|wall| wall.in_bounds()));
    assert!(walls.len() < WALL_CANDIDATES.len());
}
