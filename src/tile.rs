use crate::configuration::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rune {
    Value,
    Space,
}

impl Rune {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Rune::Space,
            _ => Rune::Value,
        }
    }
}

/// One cell of a layout as given on the command line: `0` is the blank,
/// anything else is a tile number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub raw: u8,
    pub rune: Rune,
}

impl Tile {
    pub fn new(raw: u8) -> Self {
        Self {
            raw,
            rune: Rune::from_raw(raw),
        }
    }

    pub fn parse(arg: &str) -> Result<Self, LayoutError> {
        arg.trim()
            .parse::<u8>()
            .map(Tile::new)
            .map_err(|_| LayoutError::InvalidCell(arg.to_string()))
    }

    pub fn raw(&self) -> u8 {
        self.raw
    }

    pub fn is_space(&self) -> bool {
        self.rune == Rune::Space
    }

    /// Offset this cell occupies in the solved arrangement of a grid with
    /// `cells` cells.
    pub fn rank(&self, cells: usize) -> usize {
        match self.rune {
            Rune::Space => cells - 1,
            Rune::Value => self.raw as usize - 1,
        }
    }
}
