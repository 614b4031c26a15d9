use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, GOAL_ROWS, WALL_COL_MAX, WALL_ROW_MAX, WALL_ROW_MIN};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            _ => None,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Row the player must reach to win; it is the opponent's home row.
    pub const fn goal_row(self) -> u8 {
        GOAL_ROWS[self as usize]
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Neighbouring square in direction `(d_row, d_col)`, or `None` off the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col)
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal = 0,
    Vertical = 1,
}

impl Orientation {
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    pub const fn to_code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Horizontal),
            1 => Some(Self::Vertical),
            _ => None,
        }
    }

    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A two-cell wall addressed by its anchor square.
///
/// A horizontal wall at `(row, col)` sits on the edge between rows `row - 1` and
/// `row`, covering columns `col` and `col + 1`. A vertical wall at `(row, col)`
/// sits on the edge between columns `col` and `col + 1`, covering rows `row - 1`
/// and `row`. Both orientations share the anchor band rows `1..=8`, columns
/// `0..=7`; a `Wall` value outside it is representable but never legal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub row: u8,
    pub col: u8,
    pub orientation: Orientation,
}

impl Wall {
    pub const fn new(row: u8, col: u8, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    pub const fn horizontal(row: u8, col: u8) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    pub const fn vertical(row: u8, col: u8) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }

    pub const fn in_bounds(self) -> bool {
        self.row >= WALL_ROW_MIN && self.row <= WALL_ROW_MAX && self.col <= WALL_COL_MAX
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Pawn(Square),
    Wall(Wall),
}

impl From<Square> for Move {
    fn from(square: Square) -> Self {
        Self::Pawn(square)
    }
}

impl From<Wall> for Move {
    fn from(wall: Wall) -> Self {
        Self::Wall(wall)
    }
}

/// At most five destinations exist (three plain steps plus two side-steps).
pub type SquareList = ArrayVec<Square, 8>;
pub type WallList = ArrayVec<Wall, 128>;
pub type MoveList = ArrayVec<Move, 136>;
