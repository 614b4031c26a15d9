use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game::{Game, GameStatus};
use crate::snapshot::Snapshot;
use crate::types::{Move, Player};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: u32,
    /// Chance of placing a wall instead of moving, when any wall is legal.
    pub wall_probability: f64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plies: 400,
            wall_probability: 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayoutRecord {
    pub moves: Vec<Move>,
    pub winner: Option<Player>,
    pub final_state: Snapshot,
}

/// Plays uniformly random legal moves from the starting position.
pub fn play_random_game(config: &PlayoutConfig) -> PlayoutRecord {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(config.seed);

    while !game.is_game_over() && game.ply() < config.max_plies as usize {
        let Some(mv) = pick_move(&game, &mut rng, config.wall_probability) else {
            debug!("no legal move for {:?} at ply {}", game.current_player(), game.ply());
            break;
        };
        if game.apply(mv).is_err() {
            break;
        }
    }

    if let GameStatus::Over { winner } = game.status() {
        debug!("playout {} won by {winner:?} after {} plies", config.seed, game.ply());
    }

    PlayoutRecord {
        moves: game.history().to_vec(),
        winner: game.winner(),
        final_state: game.snapshot(),
    }
}

fn pick_move(game: &Game, rng: &mut StdRng, wall_probability: f64) -> Option<Move> {
    let wall_budget = game.board().walls_left(game.current_player()) > 0;
    if wall_budget && rng.gen_bool(wall_probability.clamp(0.0, 1.0)) {
        let walls = game.legal_wall_moves();
        if !walls.is_empty() {
            return Some(Move::Wall(walls[rng.gen_range(0..walls.len())]));
        }
    }

    let steps = game.legal_pawn_moves();
    if steps.is_empty() {
        return None;
    }
    Some(Move::Pawn(steps[rng.gen_range(0..steps.len())]))
}
