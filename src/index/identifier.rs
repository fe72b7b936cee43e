use crate::error::ModisTileError;
use crate::index::constants::{GridConstants, MODIS_GRID, TOTAL_COLUMNS, TOTAL_ROWS};
use geo_types::{Rect, coord};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A tile in the MODIS sinusoidal grid.
///
/// `h` is the column (0-35, west to east) and `v` the row (0-17, north to south).
/// The canonical text form is `hXXvYY`, e.g. `h18v09`.
///
/// # Example
///
/// ```
/// use modis_tiles::TileIndex;
///
/// # fn main() -> Result<(), modis_tiles::ModisTileError> {
/// let tile: TileIndex = "h21v04".parse()?;
/// assert_eq!((tile.h, tile.v), (21, 4));
/// assert_eq!(tile.to_string(), "h21v04");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex {
    /// Horizontal tile number (column)
    pub h: u8,
    /// Vertical tile number (row)
    pub v: u8,
}

impl TileIndex {
    /// Create a tile index, checking it lies inside the MODIS grid.
    pub fn new(h: u8, v: u8) -> Result<Self, ModisTileError> {
        if h >= TOTAL_COLUMNS || v >= TOTAL_ROWS {
            return Err(ModisTileError::TileOutOfGrid {
                h: h as i64,
                v: v as i64,
            });
        }
        Ok(Self { h, v })
    }

    /// Sinusoidal extent of this tile in the MODIS grid.
    pub fn bounds(&self) -> Rect<f64> {
        self.bounds_in(&MODIS_GRID)
    }

    /// Sinusoidal extent of this tile in the given grid.
    pub fn bounds_in(&self, grid: &GridConstants) -> Rect<f64> {
        let min_x = grid.upper_left_x + self.h as f64 * grid.tile_size;
        let max_y = grid.upper_left_y - self.v as f64 * grid.tile_size;
        Rect::new(
            coord! { x: min_x, y: max_y - grid.tile_size },
            coord! { x: min_x + grid.tile_size, y: max_y },
        )
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{:02}v{:02}", self.h, self.v)
    }
}

impl FromStr for TileIndex {
    type Err = ModisTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModisTileError::InvalidTileIndex(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 6 || bytes[0] != b'h' || bytes[3] != b'v' {
            return Err(invalid());
        }
        let digits = |part: &str| -> Result<u8, ModisTileError> {
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };
        let h = digits(&s[1..3])?;
        let v = digits(&s[4..6])?;

        Self::new(h, v).map_err(|_| invalid())
    }
}

impl Serialize for TileIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TileIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
