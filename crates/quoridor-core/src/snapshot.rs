use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::constants::WALLS_PER_PLAYER;
use crate::game::MoveError;
use crate::movegen::IllegalMove;
use crate::path::wall_path_exists;
use crate::types::{Move, Orientation, Player, Square, Wall};
use crate::walls::WallSet;

/// Minimal board export handed to an external move picker.
///
/// Walls are `(row, col, orientation_code)` with `0` horizontal and `1`
/// vertical, listed in row-major anchor order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pawns: [(u8, u8); 2],
    pub walls: Vec<(u8, u8, u8)>,
    pub walls_remaining: [u8; 2],
    pub current_player: u8,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("pawn of player {0} is off the board")]
    PawnOffBoard(u8),
    #[error("both pawns share a square")]
    PawnsOverlap,
    #[error("unknown player id {0}")]
    UnknownPlayer(u8),
    #[error("unknown wall orientation code {0}")]
    UnknownOrientation(u8),
    #[error("wall ({row}, {col}, {code}) rejected: {reason}")]
    InvalidWall {
        row: u8,
        col: u8,
        code: u8,
        reason: IllegalMove,
    },
    #[error("wall budget exceeded: {placed} placed with {remaining} remaining")]
    TooManyWalls { placed: usize, remaining: usize },
    #[error("player {0} has no path to their goal row")]
    NoPath(u8),
    #[error("both pawns stand on their goal rows")]
    BothWinners,
    #[error("player {0} has won but is not the side to move")]
    WinnerNotToMove(u8),
}

impl Board {
    pub fn snapshot(&self) -> Snapshot {
        let pawns = self.pawns();
        Snapshot {
            pawns: [
                (pawns[0].row, pawns[0].col),
                (pawns[1].row, pawns[1].col),
            ],
            walls: self
                .walls()
                .iter()
                .map(|wall| (wall.row, wall.col, wall.orientation.to_code()))
                .collect(),
            walls_remaining: self.walls_remaining(),
            current_player: self.current_player().id(),
        }
    }

    /// Rebuilds a board from an export, enforcing the same invariants a game
    /// maintains. A pawn already on its goal row makes the board finished, and
    /// a finished board keeps the winner as the side to move.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let mut pawns = [Square::new_unchecked(0, 0); 2];
        for player in Player::ALL {
            let (row, col) = snapshot.pawns[player.index()];
            pawns[player.index()] =
                Square::new(row, col).ok_or(SnapshotError::PawnOffBoard(player.id()))?;
        }
        if pawns[0] == pawns[1] {
            return Err(SnapshotError::PawnsOverlap);
        }

        let current_player = Player::from_id(snapshot.current_player)
            .ok_or(SnapshotError::UnknownPlayer(snapshot.current_player))?;

        let placed = snapshot.walls.len();
        let remaining = snapshot
            .walls_remaining
            .iter()
            .map(|&left| usize::from(left))
            .sum::<usize>();
        if snapshot
            .walls_remaining
            .iter()
            .any(|&left| left > WALLS_PER_PLAYER)
            || placed + remaining > 2 * usize::from(WALLS_PER_PLAYER)
        {
            return Err(SnapshotError::TooManyWalls { placed, remaining });
        }

        let mut walls = WallSet::new();
        for &(row, col, code) in &snapshot.walls {
            let orientation =
                Orientation::from_code(code).ok_or(SnapshotError::UnknownOrientation(code))?;
            let wall = Wall::new(row, col, orientation);
            let reason = if walls.contains(wall) {
                Some(IllegalMove::WallAlreadyPlaced)
            } else if !wall.in_bounds() {
                Some(IllegalMove::WallOutOfBounds)
            } else if walls.crosses(wall) {
                Some(IllegalMove::WallCrosses)
            } else if walls.overlaps(wall) {
                Some(IllegalMove::WallOverlaps)
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(SnapshotError::InvalidWall {
                    row,
                    col,
                    code,
                    reason,
                });
            }
            walls.insert(wall);
        }

        if let Some(player) = Player::ALL
            .into_iter()
            .find(|&player| !wall_path_exists(&walls, pawns[player.index()], player))
        {
            return Err(SnapshotError::NoPath(player.id()));
        }

        let mut board = Board::from_parts(
            pawns,
            walls,
            snapshot.walls_remaining,
            current_player,
            None,
        );
        let winners: Vec<Player> = Player::ALL
            .into_iter()
            .filter(|&player| board.is_winner(player))
            .collect();
        match winners.as_slice() {
            [] => {}
            [winner] if *winner != current_player => {
                return Err(SnapshotError::WinnerNotToMove(winner.id()));
            }
            [winner] => board.declare_winner(*winner),
            _ => return Err(SnapshotError::BothWinners),
        }
        Ok(board)
    }
}

/// A move in the integer vocabulary of [`Snapshot`]: `(row, col)` for a pawn,
/// `(row, col, orientation_code)` for a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawMove {
    Pawn(i32, i32),
    Wall(i32, i32, i32),
}

impl RawMove {
    /// Resolves coordinates. An unknown orientation code is malformed; a
    /// coordinate that cannot name a square or anchor is merely illegal.
    pub fn to_move(self) -> Result<Move, MoveError> {
        match self {
            Self::Pawn(row, col) => coords(row, col)
                .and_then(|(row, col)| Square::new(row, col))
                .map(Move::Pawn)
                .ok_or(MoveError::Illegal(IllegalMove::UnreachableSquare)),
            Self::Wall(row, col, code) => {
                let orientation = u8::try_from(code)
                    .ok()
                    .and_then(Orientation::from_code)
                    .ok_or(MoveError::MalformedMove)?;
                let (row, col) =
                    coords(row, col).ok_or(MoveError::Illegal(IllegalMove::WallOutOfBounds))?;
                Ok(Move::Wall(Wall::new(row, col, orientation)))
            }
        }
    }
}

impl TryFrom<&[i32]> for RawMove {
    type Error = MoveError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        match *values {
            [row, col] => Ok(Self::Pawn(row, col)),
            [row, col, code] => Ok(Self::Wall(row, col, code)),
            _ => Err(MoveError::MalformedMove),
        }
    }
}

impl From<Move> for RawMove {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Pawn(square) => Self::Pawn(i32::from(square.row), i32::from(square.col)),
            Move::Wall(wall) => Self::Wall(
                i32::from(wall.row),
                i32::from(wall.col),
                i32::from(wall.orientation.to_code()),
            ),
        }
    }
}

fn coords(row: i32, col: i32) -> Option<(u8, u8)> {
    Some((u8::try_from(row).ok()?, u8::try_from(col).ok()?))
}
