use crate::constants::{START_SQUARES, WALLS_PER_PLAYER};
use crate::types::{Player, Square, Wall};
use crate::walls::WallSet;

/// Authoritative game record: pawns, walls, wall budgets, turn and result.
///
/// Fields are private; the only way to change a `Board` after construction is
/// [`Board::apply`], which validates the move first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pawns: [Square; 2],
    walls: WallSet,
    walls_remaining: [u8; 2],
    current_player: Player,
    winner: Option<Player>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            pawns: START_SQUARES,
            walls: WallSet::new(),
            walls_remaining: [WALLS_PER_PLAYER; 2],
            current_player: Player::First,
            winner: None,
        }
    }

    pub(crate) fn from_parts(
        pawns: [Square; 2],
        walls: WallSet,
        walls_remaining: [u8; 2],
        current_player: Player,
        winner: Option<Player>,
    ) -> Self {
        Self {
            pawns,
            walls,
            walls_remaining,
            current_player,
            winner,
        }
    }

    pub const fn pawns(&self) -> [Square; 2] {
        self.pawns
    }

    pub const fn pawn(&self, player: Player) -> Square {
        self.pawns[player.index()]
    }

    pub const fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub const fn walls_remaining(&self) -> [u8; 2] {
        self.walls_remaining
    }

    pub const fn walls_left(&self, player: Player) -> u8 {
        self.walls_remaining[player.index()]
    }

    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    pub const fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_winner(&self, player: Player) -> bool {
        self.pawn(player).row == player.goal_row()
    }

    pub(crate) fn set_pawn(&mut self, player: Player, square: Square) {
        self.pawns[player.index()] = square;
    }

    pub(crate) fn place_wall(&mut self, player: Player, wall: Wall) {
        self.walls.insert(wall);
        let left = &mut self.walls_remaining[player.index()];
        *left = left.saturating_sub(1);
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(crate) fn declare_winner(&mut self, player: Player) {
        self.winner = Some(player);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
