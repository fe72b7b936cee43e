use crate::error::ModisTileError;
use crate::index::constants::{GridConstants, MODIS_GRID};
use crate::index::identifier::TileIndex;
use log::trace;

impl GridConstants {
    /// Resolves a sinusoidal `(x, y)` in meters to the tile containing it.
    ///
    /// Indices are floored, so a point on a shared tile edge belongs to the tile
    /// to its east/south. Points exactly on the east or south edge of the grid
    /// fold back into the last column/row.
    pub fn resolve(&self, x: f64, y: f64) -> Result<TileIndex, ModisTileError> {
        if !self.contains_x(x) {
            return Err(ModisTileError::ProjectedXOutOfRange(x));
        }
        if !self.contains_y(y) {
            return Err(ModisTileError::ProjectedYOutOfRange(y));
        }

        let mut h = ((x - self.upper_left_x) / self.tile_size).floor() as i64;
        let mut v = ((-(y + self.lower_right_y)) / self.tile_size).floor() as i64;

        if h == self.total_columns as i64 {
            h -= 1;
        }
        if v == self.total_rows as i64 {
            v -= 1;
        }

        if !(0..self.total_columns as i64).contains(&h) || !(0..self.total_rows as i64).contains(&v) {
            return Err(ModisTileError::TileOutOfGrid { h, v });
        }

        let tile = TileIndex {
            h: h as u8,
            v: v as u8,
        };
        trace!("({}, {}) -> {}", x, y, tile);
        Ok(tile)
    }
}

/// Resolves a sinusoidal `(x, y)` in meters to its MODIS tile.
///
/// # Example
///
/// ```
/// use modis_tiles::resolve_tile;
///
/// # fn main() -> Result<(), modis_tiles::ModisTileError> {
/// assert_eq!(resolve_tile(0.0, 0.0)?.to_string(), "h18v09");
/// # Ok(())
/// # }
/// ```
pub fn resolve_tile(x: f64, y: f64) -> Result<TileIndex, ModisTileError> {
    MODIS_GRID.resolve(x, y)
}
