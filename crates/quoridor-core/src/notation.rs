//! Text notation for moves.
//!
//! Columns are letters `a`..`i` from left to right and ranks count up from the
//! first player's home row, so rank = 9 - row: the first player starts on `e1`
//! and the second on `e9`. A wall is its anchor square followed by `h` or `v`.

use thiserror::Error;

use crate::constants::BOARD_SIZE;
use crate::types::{Move, Orientation, Square, Wall};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move text")]
    Empty,
    #[error("invalid column")]
    InvalidColumn,
    #[error("invalid rank")]
    InvalidRank,
    #[error("invalid wall orientation")]
    InvalidOrientation,
}

/// Fails for coordinates off the board, which `Square::new_unchecked` and raw
/// wall anchors can still carry.
pub fn square_to_notation(square: Square) -> Result<String, NotationError> {
    if square.col >= BOARD_SIZE {
        return Err(NotationError::InvalidColumn);
    }
    if square.row >= BOARD_SIZE {
        return Err(NotationError::InvalidRank);
    }
    Ok(format!(
        "{}{}",
        char::from(b'a' + square.col),
        BOARD_SIZE - square.row
    ))
}

pub fn move_to_notation(mv: &Move) -> Result<String, NotationError> {
    match *mv {
        Move::Pawn(square) => square_to_notation(square),
        Move::Wall(wall) => {
            let mut text = square_to_notation(Square::new_unchecked(wall.row, wall.col))?;
            text.push(match wall.orientation {
                Orientation::Horizontal => 'h',
                Orientation::Vertical => 'v',
            });
            Ok(text)
        }
    }
}

pub fn parse_square(text: &str) -> Result<Square, NotationError> {
    let mut chars = text.chars();
    let column = chars.next().ok_or(NotationError::Empty)?;
    if !('a'..='i').contains(&column) {
        return Err(NotationError::InvalidColumn);
    }
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NotationError::InvalidRank);
    }
    let rank = digits
        .parse::<u8>()
        .map_err(|_| NotationError::InvalidRank)?;
    if !(1..=BOARD_SIZE).contains(&rank) {
        return Err(NotationError::InvalidRank);
    }
    Ok(Square::new_unchecked(BOARD_SIZE - rank, column as u8 - b'a'))
}

pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NotationError::Empty);
    }
    let orientation = match text.chars().last() {
        Some('h') => Some(Orientation::Horizontal),
        Some('v') => Some(Orientation::Vertical),
        Some(c) if c.is_ascii_alphabetic() => return Err(NotationError::InvalidOrientation),
        _ => None,
    };

    match orientation {
        Some(orientation) => {
            let square = parse_square(&text[..text.len() - 1])?;
            Ok(Move::Wall(Wall::new(square.row, square.col, orientation)))
        }
        None => parse_square(text).map(Move::Pawn),
    }
}
