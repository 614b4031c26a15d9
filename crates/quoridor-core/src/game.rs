use log::{debug, trace};
use thiserror::Error;

use crate::board::Board;
use crate::movegen::{check_wall, IllegalMove};
use crate::notation::parse_move;
use crate::snapshot::{RawMove, Snapshot, SnapshotError};
use crate::types::{Move, MoveList, Player, SquareList, Wall, WallList};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("malformed move")]
    MalformedMove,
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
    #[error("game is over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Over { winner: Player },
}

impl Board {
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Over { winner },
            None => GameStatus::InProgress,
        }
    }

    /// Validates and commits `mv` for the side to move.
    ///
    /// Either every effect lands (pawn or wall, wall budget, then turn flip or
    /// game end) or none does. Once the game is over the board is frozen and
    /// every call fails with [`MoveError::GameOver`].
    pub fn apply(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.is_game_over() {
            trace!("rejected {mv:?}: game is over");
            return Err(MoveError::GameOver);
        }

        let player = self.current_player();
        if let Err(reason) = self.validate(player, mv) {
            trace!("rejected {mv:?} for {player:?}: {reason}");
            return Err(reason.into());
        }

        match mv {
            Move::Pawn(square) => self.set_pawn(player, square),
            Move::Wall(wall) => self.place_wall(player, wall),
        }
        debug!("{player:?} played {mv:?}");

        if self.is_winner(player) {
            self.declare_winner(player);
            debug!("{player:?} reached row {} and wins", player.goal_row());
        } else {
            self.pass_turn();
        }
        Ok(self.status())
    }

    fn validate(&self, player: Player, mv: Move) -> Result<(), IllegalMove> {
        match mv {
            Move::Pawn(square) => {
                if self.legal_pawn_moves().contains(&square) {
                    Ok(())
                } else {
                    Err(IllegalMove::UnreachableSquare)
                }
            }
            Move::Wall(wall) => {
                check_wall(self, wall)?;
                if self.walls_left(player) == 0 {
                    return Err(IllegalMove::NoWallsRemaining);
                }
                Ok(())
            }
        }
    }
}

/// A board plus the moves that produced it.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        Ok(Self {
            board: Board::from_snapshot(snapshot)?,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    pub fn legal_pawn_moves(&self) -> SquareList {
        self.board.legal_pawn_moves()
    }

    pub fn is_legal_wall(&self, wall: Wall) -> bool {
        self.board.is_legal_wall(wall)
    }

    pub fn legal_wall_moves(&self) -> WallList {
        self.board.legal_wall_moves()
    }

    /// Every move the side to move may play; empty once the game is over.
    pub fn moves(&self) -> MoveList {
        if self.is_game_over() {
            MoveList::new()
        } else {
            self.board.legal_moves()
        }
    }

    pub fn apply(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        let status = self.board.apply(mv)?;
        self.history.push(mv);
        Ok(status)
    }

    /// Applies a move in the integer vocabulary used by external move pickers.
    pub fn apply_raw(&mut self, raw: &[i32]) -> Result<GameStatus, MoveError> {
        let mv = RawMove::try_from(raw)?.to_move()?;
        self.apply(mv)
    }

    pub fn apply_notation(&mut self, text: &str) -> Result<GameStatus, MoveError> {
        let mv = parse_move(text).map_err(|_| MoveError::MalformedMove)?;
        self.apply(mv)
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn ply(&self) -> usize {
        self.history.len()
    }
}
