mod parse;

pub use parse::{parse_geojson, parse_geometry, parse_wkt, polygon_vertices};

use crate::error::ModisTileError;
use crate::index::TileIndex;
use crate::tile::TileLocator;
use std::collections::HashSet;

/// Parses a GeoJSON or WKT lon/lat geometry and returns the tiles its vertices fall in.
///
/// # Example
///
/// ```
/// use modis_tiles::tiles_for_geometry_str;
///
/// # fn main() -> Result<(), modis_tiles::ModisTileError> {
/// let tiles = tiles_for_geometry_str("POLYGON((-1 1, 1 1, 1 -1, -1 -1, -1 1))")?;
/// assert_eq!(tiles.len(), 4);
/// # Ok(())
/// # }
/// ```
pub fn tiles_for_geometry_str(s: &str) -> Result<HashSet<TileIndex>, ModisTileError> {
    let geom = parse_geometry(s)?;
    TileLocator::new()?.tiles_for_geometry(&geom)
}
