use crate::types::{Orientation, Square, Wall};

pub const BOARD_SIZE: u8 = 9;
pub const SQUARE_COUNT: usize = 81;

pub const WALLS_PER_PLAYER: u8 = 10;

pub const WALL_ROW_MIN: u8 = 1;
pub const WALL_ROW_MAX: u8 = 8;
pub const WALL_COL_MAX: u8 = 7;
/// Anchors per orientation.
pub const WALL_SLOTS: usize = 64;

pub const START_SQUARES: [Square; 2] = [Square::new_unchecked(8, 4), Square::new_unchecked(0, 4)];

pub const GOAL_ROWS: [u8; 2] = [0, 8];

/// Up, down, left, right. Pawn destinations are reported in this order.
pub const DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const SQUARES: [Square; SQUARE_COUNT] = all_squares();

/// Every anchor in the band, row-major, horizontal before vertical.
pub const WALL_CANDIDATES: [Wall; 2 * WALL_SLOTS] = all_wall_candidates();

const fn all_squares() -> [Square; SQUARE_COUNT] {
    let mut squares = [Square::new_unchecked(0, 0); SQUARE_COUNT];
    let mut idx = 0;
    while idx < SQUARE_COUNT {
        squares[idx] = Square::new_unchecked(
            (idx / BOARD_SIZE as usize) as u8,
            (idx % BOARD_SIZE as usize) as u8,
        );
        idx += 1;
    }
    squares
}

const fn all_wall_candidates() -> [Wall; 2 * WALL_SLOTS] {
    let mut walls = [Wall::horizontal(WALL_ROW_MIN, 0); 2 * WALL_SLOTS];
    let mut slot = 0;
    while slot < WALL_SLOTS {
        let row = WALL_ROW_MIN + (slot / 8) as u8;
        let col = (slot % 8) as u8;
        walls[2 * slot] = Wall::new(row, col, Orientation::Horizontal);
        walls[2 * slot + 1] = Wall::new(row, col, Orientation::Vertical);
        slot += 1;
    }
    walls
}
