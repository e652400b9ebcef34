use std::fmt;
use std::hash::{Hash, Hasher};

use log::warn;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::tile::Tile;

const NIBBLE: usize = 4;
const NIBBLE_MASK: u64 = 0b1111;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected {expected} cells, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("`{0}` is not a tile number")]
    InvalidCell(String),
    #[error("tile {value} is out of range, tiles run from 1 to {max}")]
    OutOfRange { value: u8, max: u8 },
    #[error("value {0} appears more than once")]
    Duplicate(u8),
}

/// A sliding puzzle configuration on a `ROWS` x `COLS` grid.
///
/// Every non-blank cell keeps `tile - 1` in its own nibble of `tiles`, row-major
/// from the least significant nibble. The nibble under the blank is
/// meaningless, so equality also compares `hole`. The whole value is `Copy`
/// and a successor is always a fresh copy with one swap applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Configuration<const ROWS: usize, const COLS: usize> {
    tiles: u64,
    hole: Option<u8>,
}

impl<const ROWS: usize, const COLS: usize> Configuration<ROWS, COLS> {
    pub const CELLS: usize = ROWS * COLS;

    const GRID_FITS: () = assert!(
        ROWS >= 1 && COLS >= 1 && ROWS * COLS <= 16,
        "a grid holds between 1 and 16 cells"
    );

    /// Packs a row-major layout, `0` marking the blank.
    pub fn from_layout(layout: &[u8]) -> Result<Self, LayoutError> {
        let () = Self::GRID_FITS;

        if layout.len() != Self::CELLS {
            return Err(LayoutError::WrongLength {
                expected: Self::CELLS,
                found: layout.len(),
            });
        }

        let max = (Self::CELLS - 1) as u8;
        let mut seen: u32 = 0;
        let mut configuration = Self::default();

        for (offset, &raw) in layout.iter().enumerate() {
            let tile = Tile::new(raw);
            if tile.raw() > max {
                return Err(LayoutError::OutOfRange { value: tile.raw(), max });
            }
            if seen & (1 << tile.raw()) != 0 {
                return Err(LayoutError::Duplicate(tile.raw()));
            }
            seen |= 1 << tile.raw();

            if tile.is_space() {
                configuration.hole = Some(offset as u8);
            } else {
                configuration.tiles |= u64::from(tile.raw() - 1) << (offset * NIBBLE);
            }
        }

        Ok(configuration)
    }

    /// Parses command line style cells. Anything past the first `CELLS`
    /// arguments is ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, LayoutError> {
        if args.len() < Self::CELLS {
            return Err(LayoutError::WrongLength {
                expected: Self::CELLS,
                found: args.len(),
            });
        }
        if args.len() > Self::CELLS {
            warn!(
                "ignoring {} argument(s) past the {} cells of a {}x{} grid",
                args.len() - Self::CELLS,
                Self::CELLS,
                ROWS,
                COLS
            );
        }

        let layout = args[..Self::CELLS]
            .iter()
            .map(|arg| Tile::parse(arg.as_ref()).map(|tile| tile.raw()))
            .collect::<Result<Vec<u8>, LayoutError>>()?;

        Self::from_layout(&layout)
    }

    /// Tiles `1..CELLS` in row-major order with the blank in the last cell.
    pub fn solved() -> Self {
        let () = Self::GRID_FITS;

        let tiles = (0..Self::CELLS - 1).fold(0u64, |tiles, offset| {
            tiles | (offset as u64) << (offset * NIBBLE)
        });

        Self {
            tiles,
            hole: Some((Self::CELLS - 1) as u8),
        }
    }

    pub fn is_solved(&self) -> bool {
        (0..Self::CELLS).all(|offset| Tile::new(self.tile_at(offset)).rank(Self::CELLS) == offset)
    }

    /// Tile number at `offset`, `0` for the blank.
    #[inline]
    pub fn tile_at(&self, offset: usize) -> u8 {
        if self.hole == Some(offset as u8) {
            0
        } else {
            ((self.tiles >> (offset * NIBBLE)) & NIBBLE_MASK) as u8 + 1
        }
    }

    #[inline]
    pub fn tile_at_rc(&self, row: usize, col: usize) -> u8 {
        self.tile_at(row * COLS + col)
    }

    pub fn layout(&self) -> Vec<u8> {
        (0..Self::CELLS).map(|offset| self.tile_at(offset)).collect()
    }

    #[inline]
    pub fn hole(&self) -> Option<usize> {
        self.hole.map(usize::from)
    }

    /// Offset of the cell `drow` rows and `dcol` columns away from the blank,
    /// or `None` when that cell is off the grid or the blank is unset.
    pub fn hole_offset(&self, drow: isize, dcol: isize) -> Option<usize> {
        let hole = self.hole()?;
        if drow == 0 && dcol == 0 {
            return Some(hole);
        }

        let row = (hole / COLS) as isize + drow;
        if row < 0 || row >= ROWS as isize {
            return None;
        }
        let col = (hole % COLS) as isize + dcol;
        if col < 0 || col >= COLS as isize {
            return None;
        }

        Some(row as usize * COLS + col as usize)
    }

    /// Exchanges the nibbles at both offsets and follows the blank if it was
    /// one of them. Adjacency is not checked.
    #[must_use]
    pub fn swap_tiles(mut self, first: usize, second: usize) -> Self {
        if self.hole == Some(first as u8) {
            self.hole = Some(second as u8);
        } else if self.hole == Some(second as u8) {
            self.hole = Some(first as u8);
        }

        let shift_first = first * NIBBLE;
        let shift_second = second * NIBBLE;
        let mask_first = NIBBLE_MASK << shift_first;
        let mask_second = NIBBLE_MASK << shift_second;
        let value_first = (self.tiles & mask_first) >> shift_first;
        let value_second = (self.tiles & mask_second) >> shift_second;

        self.tiles &= !(mask_first | mask_second);
        self.tiles |= value_first << shift_second;
        self.tiles |= value_second << shift_first;
        self
    }

    /// The packed tiles double as the hash key.
    #[inline]
    pub fn hash_code(&self) -> u64 {
        self.tiles
    }
}

// The blank position is left out of the hash on purpose; `Eq` still checks it.
impl<const ROWS: usize, const COLS: usize> Hash for Configuration<ROWS, COLS> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<const ROWS: usize, const COLS: usize> fmt::Display for Configuration<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hole = self.hole.map_or(-1, i16::from);
        write!(f, "{}/{}", self.tiles, hole)
    }
}

impl<const ROWS: usize, const COLS: usize> Serialize for Configuration<ROWS, COLS> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.layout())
    }
}
