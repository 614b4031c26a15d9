use std::collections::VecDeque;

use crate::constants::SQUARE_COUNT;
use crate::movegen::neighbours;
use crate::types::{Player, Square};
use crate::walls::WallSet;

/// Whether `player` can still reach their goal row on `walls`.
///
/// The opponent's pawn is treated as fixed where it stands, so jumps and
/// side-steps around it count as single moves. Each call owns its own
/// frontier and visited set.
pub fn has_path(walls: &WallSet, pawns: [Square; 2], player: Player) -> bool {
    shortest_path_len(walls, pawns, player).is_some()
}

/// Fewest moves `player` needs to reach their goal row, or `None` when cut off.
pub fn shortest_path_len(walls: &WallSet, pawns: [Square; 2], player: Player) -> Option<u8> {
    let opponent = pawns[player.opponent().index()];
    search(walls, pawns[player.index()], player.goal_row(), Some(opponent))
}

/// Whether walls alone leave a route from `from` to `player`'s goal row.
///
/// Pawns never close a route for good, only walls do, so this is the
/// property every reachable position keeps.
pub fn wall_path_exists(walls: &WallSet, from: Square, player: Player) -> bool {
    search(walls, from, player.goal_row(), None).is_some()
}

fn search(walls: &WallSet, start: Square, goal: u8, opponent: Option<Square>) -> Option<u8> {
    let mut visited = [false; SQUARE_COUNT];
    let mut frontier = VecDeque::with_capacity(SQUARE_COUNT);
    visited[start.index()] = true;
    frontier.push_back((start, 0u8));

    while let Some((square, distance)) = frontier.pop_front() {
        if square.row == goal {
            return Some(distance);
        }
        // With no opponent, pass the square itself: it is never its own neighbour.
        let blocker = opponent.unwrap_or(square);
        for next in neighbours(walls, square, blocker) {
            if !visited[next.index()] {
                visited[next.index()] = true;
                frontier.push_back((next, distance + 1));
            }
        }
    }
    None
}
