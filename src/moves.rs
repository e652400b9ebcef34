use std::fmt;

use serde::Serialize;

use crate::configuration::Configuration;

/// The way a tile travels when it slides into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Successor enumeration order. Expressed as blank shifts this is
    /// down, up, right, left; route tie-breaking depends on it.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column shift of the blank for a tile moving this way.
    pub fn hole_delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const ROWS: usize, const COLS: usize> Configuration<ROWS, COLS> {
    /// The configuration after sliding the tile that moves in `direction`,
    /// if there is such a tile.
    pub fn slide(&self, direction: Direction) -> Option<Self> {
        let hole = self.hole()?;
        let (drow, dcol) = direction.hole_delta();
        let neighbour = self.hole_offset(drow, dcol)?;
        Some(self.swap_tiles(neighbour, hole))
    }

    /// Calls `visit` with every configuration one slide away, in
    /// [`Direction::SEARCH_ORDER`]. An unset blank has no successors.
    #[inline]
    pub fn for_each_successor<F: FnMut(Self)>(&self, mut visit: F) {
        for direction in Direction::SEARCH_ORDER {
            if let Some(successor) = self.slide(direction) {
                visit(successor);
            }
        }
    }

    pub fn successors(&self) -> Vec<Self> {
        let mut result: Vec<Self> = Vec::with_capacity(4);
        self.for_each_successor(|successor| result.push(successor));
        result
    }

    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::SEARCH_ORDER
            .into_iter()
            .filter(|&direction| self.slide(direction).is_some())
            .collect()
    }
}
