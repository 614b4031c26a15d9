pub mod board;
pub mod constants;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod path;
pub mod playout;
pub mod snapshot;
pub mod types;
pub mod walls;

pub use board::Board;
pub use constants::{BOARD_SIZE, GOAL_ROWS, START_SQUARES, WALLS_PER_PLAYER, WALL_CANDIDATES};
pub use game::{Game, GameStatus, MoveError};
pub use movegen::{
    check_wall, is_legal_wall, legal_moves, legal_pawn_moves, legal_wall_moves, neighbours,
    IllegalMove,
};
pub use notation::{move_to_notation, parse_move, NotationError};
pub use path::{has_path, shortest_path_len, wall_path_exists};
pub use playout::{play_random_game, PlayoutConfig, PlayoutRecord};
pub use snapshot::{RawMove, Snapshot, SnapshotError};
pub use types::{Move, MoveList, Orientation, Player, Square, SquareList, Wall, WallList};
pub use walls::WallSet;
