use crate::constants::{WALL_COL_MAX, WALL_ROW_MIN};
use crate::types::{Orientation, Square, Wall};

/// Set of placed walls, one bit per anchor and orientation.
///
/// The set is `Copy`, so a hypothetical configuration is just
/// `walls.with(candidate)`; nothing shared is mutated to ask "what if".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WallSet {
    horizontal: u64,
    vertical: u64,
}

impl WallSet {
    pub const fn new() -> Self {
        Self {
            horizontal: 0,
            vertical: 0,
        }
    }

    pub fn contains(&self, wall: Wall) -> bool {
        match slot(wall) {
            Some(bit) => self.bits(wall.orientation) & bit != 0,
            None => false,
        }
    }

    /// Copy of this set with `wall` added. Out-of-band walls are ignored.
    #[must_use]
    pub fn with(mut self, wall: Wall) -> Self {
        self.insert(wall);
        self
    }

    pub(crate) fn insert(&mut self, wall: Wall) -> bool {
        let Some(bit) = slot(wall) else {
            return false;
        };
        let bits = match wall.orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        };
        let fresh = *bits & bit == 0;
        *bits |= bit;
        fresh
    }

    pub fn len(&self) -> usize {
        (self.horizontal.count_ones() + self.vertical.count_ones()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal == 0 && self.vertical == 0
    }

    /// Walls in row-major anchor order, horizontal before vertical.
    pub fn iter(&self) -> impl Iterator<Item = Wall> + '_ {
        (0..64u32).flat_map(move |idx| {
            let row = WALL_ROW_MIN + (idx / 8) as u8;
            let col = (idx % 8) as u8;
            Orientation::ALL
                .into_iter()
                .map(move |orientation| Wall::new(row, col, orientation))
                .filter(move |wall| self.contains(*wall))
        })
    }

    /// Whether a wall sits on the edge between two orthogonally adjacent squares.
    pub fn blocks(&self, a: Square, b: Square) -> bool {
        if a.col == b.col {
            // A horizontal wall spans two columns, so it can be anchored here or one to the left.
            let row = a.row.max(b.row);
            let col = a.col;
            self.contains(Wall::horizontal(row, col))
                || col
                    .checked_sub(1)
                    .is_some_and(|left| self.contains(Wall::horizontal(row, left)))
        } else if a.row == b.row {
            let row = a.row;
            let col = a.col.min(b.col);
            self.contains(Wall::vertical(row, col)) || self.contains(Wall::vertical(row + 1, col))
        } else {
            false
        }
    }

    /// A perpendicular wall shares the anchor, forming a `+`.
    pub fn crosses(&self, wall: Wall) -> bool {
        self.contains(Wall::new(
            wall.row,
            wall.col,
            wall.orientation.perpendicular(),
        ))
    }

    /// A parallel wall one cell along the run axis shares half the span.
    pub fn overlaps(&self, wall: Wall) -> bool {
        let (d_row, d_col) = match wall.orientation {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        };
        let after = Wall::new(wall.row + d_row, wall.col + d_col, wall.orientation);
        let before = wall
            .row
            .checked_sub(d_row)
            .zip(wall.col.checked_sub(d_col))
            .map(|(row, col)| Wall::new(row, col, wall.orientation));
        self.contains(after) || before.is_some_and(|before| self.contains(before))
    }

    fn bits(&self, orientation: Orientation) -> u64 {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }
}

impl FromIterator<Wall> for WallSet {
    fn from_iter<I: IntoIterator<Item = Wall>>(iter: I) -> Self {
        let mut set = Self::new();
        for wall in iter {
            set.insert(wall);
        }
        set
    }
}

fn slot(wall: Wall) -> Option<u64> {
    if !wall.in_bounds() {
        return None;
    }
    let idx = u32::from(wall.row - WALL_ROW_MIN) * (u32::from(WALL_COL_MAX) + 1)
        + u32::from(wall.col);
    Some(1u64 << idx)
}
