use thiserror::Error;

use crate::board::Board;
use crate::constants::{DIRS, WALL_CANDIDATES};
use crate::path::has_path;
use crate::types::{Move, MoveList, Player, Square, SquareList, Wall, WallList};
use crate::walls::WallSet;

/// Why a move was refused. The board is unchanged whenever one of these is reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("pawn cannot reach that square")]
    UnreachableSquare,
    #[error("wall already placed")]
    WallAlreadyPlaced,
    #[error("wall anchor outside the board")]
    WallOutOfBounds,
    #[error("wall crosses another wall")]
    WallCrosses,
    #[error("wall overlaps another wall")]
    WallOverlaps,
    #[error("wall would cut a player off from their goal")]
    WallBlocksPath,
    #[error("no walls remaining")]
    NoWallsRemaining,
}

/// Squares a pawn on `from` may step to, given the other pawn on `opponent`.
///
/// Plain orthogonal steps; a straight jump over an adjacent opponent; and when
/// that jump is walled off or leaves the board, the two side-steps around it.
pub fn neighbours(walls: &WallSet, from: Square, opponent: Square) -> SquareList {
    let mut out = SquareList::new();
    for (d_row, d_col) in DIRS {
        let Some(adjacent) = from.offset(d_row, d_col) else {
            continue;
        };
        if walls.blocks(from, adjacent) {
            continue;
        }

        if adjacent != opponent {
            out.push(adjacent);
            continue;
        }

        if let Some(jump) = adjacent.offset(d_row, d_col) {
            if !walls.blocks(adjacent, jump) {
                out.push(jump);
                continue;
            }
        }

        for (p_row, p_col) in [(d_col, d_row), (-d_col, -d_row)] {
            if let Some(side) = adjacent.offset(p_row, p_col) {
                if !walls.blocks(adjacent, side) {
                    out.push(side);
                }
            }
        }
    }
    out
}

pub fn legal_pawn_moves(board: &Board) -> SquareList {
    let player = board.current_player();
    neighbours(
        board.walls(),
        board.pawn(player),
        board.pawn(player.opponent()),
    )
}

/// Checks a wall candidate against the geometric rules, then against reachability
/// for both players on `walls.with(wall)`. Does not look at wall budgets.
pub fn check_wall(board: &Board, wall: Wall) -> Result<(), IllegalMove> {
    let walls = board.walls();
    if walls.contains(wall) {
        return Err(IllegalMove::WallAlreadyPlaced);
    }
    if !wall.in_bounds() {
        return Err(IllegalMove::WallOutOfBounds);
    }
    if walls.crosses(wall) {
        return Err(IllegalMove::WallCrosses);
    }
    if walls.overlaps(wall) {
        return Err(IllegalMove::WallOverlaps);
    }

    let candidate = walls.with(wall);
    let pawns = board.pawns();
    if Player::ALL
        .into_iter()
        .all(|player| has_path(&candidate, pawns, player))
    {
        Ok(())
    } else {
        Err(IllegalMove::WallBlocksPath)
    }
}

pub fn is_legal_wall(board: &Board, wall: Wall) -> bool {
    check_wall(board, wall).is_ok()
}

pub fn legal_wall_moves(board: &Board) -> WallList {
    if board.walls_left(board.current_player()) == 0 {
        return WallList::new();
    }
    WALL_CANDIDATES
        .into_iter()
        .filter(|wall| is_legal_wall(board, *wall))
        .collect()
}

/// Pawn moves first, then walls in anchor order.
pub fn legal_moves(board: &Board) -> MoveList {
    let mut moves: MoveList = legal_pawn_moves(board).into_iter().map(Move::Pawn).collect();
    moves.extend(legal_wall_moves(board).into_iter().map(Move::Wall));
    moves
}

impl Board {
    pub fn legal_pawn_moves(&self) -> SquareList {
        legal_pawn_moves(self)
    }

    pub fn is_legal_wall(&self, wall: Wall) -> bool {
        is_legal_wall(self, wall)
    }

    pub fn legal_wall_moves(&self) -> WallList {
        legal_wall_moves(self)
    }

    pub fn legal_moves(&self) -> MoveList {
        legal_moves(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("valid square")
    }

    #[test]
    fn open_board_gives_four_steps() {
        let moves = neighbours(&WallSet::new(), sq(4, 4), sq(0, 0));
        assert_eq!(
            moves.as_slice(),
            &[sq(3, 4), sq(5, 4), sq(4, 3), sq(4, 5)]
        );
    }

    #[test]
    fn jump_off_the_board_falls_back_to_side_steps() {
        let moves = neighbours(&WallSet::new(), sq(1, 4), sq(0, 4));
        assert_eq!(
            moves.as_slice(),
            &[sq(0, 3), sq(0, 5), sq(2, 4), sq(1, 3), sq(1, 5)]
        );
    }

    #[test]
    fn walled_side_step_is_dropped() {
        let walls = WallSet::new()
            .with(Wall::horizontal(3, 4))
            .with(Wall::vertical(4, 4));
        let moves = neighbours(&walls, sq(4, 4), sq(3, 4));
        assert!(moves.contains(&sq(3, 3)));
        assert!(!moves.contains(&sq(3, 5)));
        assert!(!moves.contains(&sq(2, 4)));
    }

    #[test]
    fn wall_rejections_report_the_first_failing_rule() {
        let mut board = Board::new();
        board.place_wall(Player::First, Wall::horizontal(4, 4));

        assert_eq!(
            check_wall(&board, Wall::horizontal(4, 4)),
            Err(IllegalMove::WallAlreadyPlaced)
        );
        assert_eq!(
            check_wall(&board, Wall::horizontal(0, 4)),
            Err(IllegalMove::WallOutOfBounds)
        );
        assert_eq!(
            check_wall(&board, Wall::vertical(4, 4)),
            Err(IllegalMove::WallCrosses)
        );
        assert_eq!(
            check_wall(&board, Wall::horizontal(4, 5)),
            Err(IllegalMove::WallOverlaps)
        );
        assert_eq!(check_wall(&board, Wall::horizontal(4, 6)), Ok(()));
    }

    #[test]
    fn fresh_board_allows_every_candidate() {
        let board = Board::new();
        assert_eq!(legal_wall_moves(&board).len(), WALL_CANDIDATES.len());
        assert_eq!(legal_moves(&board).len(), 3 + WALL_CANDIDATES.len());
    }
}
