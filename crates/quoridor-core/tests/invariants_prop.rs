//! Invariants over reachable positions, driven by seeded random games:
//! every placed wall leaves both players a route to goal, the side to move
//! always has a pawn move, wall budgets only shrink, turns alternate until the
//! game ends, and wall checks never disturb the board.

use proptest::prelude::*;
use quoridor_core::{
    has_path, play_random_game, wall_path_exists, Game, GameStatus, Move, Player, PlayoutConfig,
    WALL_CANDIDATES, WALLS_PER_PLAYER,
};

fn assert_walls_leave_routes(game: &Game) {
    let board = game.board();
    for player in Player::ALL {
        assert!(
            wall_path_exists(board.walls(), board.pawn(player), player),
            "{player:?} walled off after {} plies",
            game.ply()
        );
    }
}

fn assert_reachable(game: &Game) {
    let board = game.board();
    for player in Player::ALL {
        assert!(
            has_path(board.walls(), board.pawns(), player),
            "{player:?} cut off after {} plies",
            game.ply()
        );
    }
}

fn assert_wall_checks_are_pure(game: &Game) {
    let before = game.board().clone();
    for wall in WALL_CANDIDATES {
        let _ = game.is_legal_wall(wall);
    }
    assert_eq!(game.board(), &before);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn random_games_keep_every_invariant(seed in any::<u64>(), wall_pct in 0u32..=100) {
        let record = play_random_game(&PlayoutConfig {
            seed,
            max_plies: 150,
            wall_probability: f64::from(wall_pct) / 100.0,
        });

        let mut game = Game::new();
        assert_reachable(&game);
        assert_walls_leave_routes(&game);
        for mv in &record.moves {
            let mover = game.current_player();
            let budget = game.board().walls_remaining();
            prop_assert!(!game.legal_pawn_moves().is_empty());

            let status = game.apply(*mv).expect("recorded move replays");
            let after = game.board().walls_remaining();
            for player in Player::ALL {
                prop_assert!(after[player.index()] <= budget[player.index()]);
            }
            let spent = budget[mover.index()] - after[mover.index()];
            prop_assert_eq!(spent, u8::from(matches!(mv, Move::Wall(_))));
            prop_assert_eq!(after[mover.opponent().index()], budget[mover.opponent().index()]);

            match status {
                GameStatus::InProgress => {
                    prop_assert_eq!(game.current_player(), mover.opponent());
                }
                GameStatus::Over { winner } => {
                    prop_assert_eq!(winner, mover);
                    prop_assert_eq!(game.current_player(), mover);
                }
            }
            assert_walls_leave_routes(&game);
            if matches!(mv, Move::Wall(_)) {
                assert_reachable(&game);
            }
        }

        let board = game.board();
        let placed = board.walls().len();
        let left: usize = board.walls_remaining().iter().map(|&n| usize::from(n)).sum();
        prop_assert_eq!(placed + left, 2 * usize::from(WALLS_PER_PLAYER));
        prop_assert_eq!(game.snapshot(), record.final_state);
        prop_assert_eq!(game.winner(), record.winner);
        assert_wall_checks_are_pure(&game);
    }
}
