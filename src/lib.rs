//! # modis-tiles
//!
//! Locate tiles of the MODIS/VIIRS sinusoidal grid (36 x 18 tiles, `hXXvYY`)
//! from WGS84 coordinates and polygons.
//!
//! ### 1. Single coordinates
//!
//! ```
//! use modis_tiles::lat_lon_to_tile;
//!
//! # fn main() -> Result<(), modis_tiles::ModisTileError> {
//! let tile = lat_lon_to_tile(34.0, -118.0)?;
//! assert_eq!(tile.to_string(), "h08v05");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Projection and tile lookup separately
//!
//! ```
//! use modis_tiles::{project_to_sinusoidal, resolve_tile};
//!
//! # fn main() -> Result<(), modis_tiles::ModisTileError> {
//! let (x, y) = project_to_sinusoidal(45.0, 45.0)?;
//! assert_eq!(resolve_tile(x, y)?.to_string(), "h21v04");
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Polygons
//!
//! Vertices are `(lon, lat)`. Only the tiles containing a vertex are returned,
//! not every tile the polygon covers.
//!
//! ```
//! use modis_tiles::tiles_for_polygon;
//!
//! # fn main() -> Result<(), modis_tiles::ModisTileError> {
//! let tiles = tiles_for_polygon(&[(-118.0, 34.0), (-117.0, 34.5)])?;
//! assert_eq!(tiles.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ### 4. CSV files
//!
//! ```no_run
//! use modis_tiles::{CsvTileConfig, CsvToTiles};
//!
//! let config = CsvTileConfig::from_coords("Latitude", "Longitude");
//! "sites.csv".to_tile_csv("sites_tiles.csv", &config).unwrap();
//! ```

pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;
pub mod tile;

pub use coord::{
    Coordinate, GeographicPoint, ProjTransform, Projector, SinusoidalPoint, SinusoidalTransform,
    SphericalSinusoidal, project_to_sinusoidal,
};
pub use error::ModisTileError;
pub use geom::{
    parse_geojson, parse_geometry, parse_wkt, polygon_vertices, tiles_for_geometry_str,
};
pub use index::{
    GridConstants, LOWER_RIGHT_X_METERS, LOWER_RIGHT_Y_METERS, MODIS_GRID, TILE_SIZE_METERS,
    TOTAL_COLUMNS, TOTAL_ROWS, TileIndex, UPPER_LEFT_X_METERS, UPPER_LEFT_Y_METERS, resolve_tile,
};
pub use io::{CoordinateSource, CsvTileConfig, CsvToTiles, csv_to_tile_csv};
pub use tile::{TileLocator, lat_lon_to_tile, lat_lon_to_tiles_par, tiles_for_polygon};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), ModisTileError> {
        let (x, y) = project_to_sinusoidal(45.0, 45.0)?;
        let tile = resolve_tile(x, y)?;
        assert_eq!(tile, lat_lon_to_tile(45.0, 45.0)?);

        let parsed: TileIndex = tile.to_string().parse()?;
        assert_eq!(parsed, tile);

        let bounds = tile.bounds();
        assert!(x >= bounds.min().x && x < bounds.max().x);
        assert!(y > bounds.min().y && y <= bounds.max().y);
        Ok(())
    }

    #[test]
    fn test_polygon_from_geojson() -> Result<(), ModisTileError> {
        let json = r#"{"type":"Polygon","coordinates":[[[-118.0,34.0],[-117.0,34.5],[-118.0,34.5],[-118.0,34.0]]]}"#;
        let geom = parse_geometry(json)?;
        let vertices = polygon_vertices(&geom);

        let tiles = tiles_for_polygon(&vertices)?;
        assert_eq!(tiles, tiles_for_geometry_str(json)?);
        assert_eq!(tiles, HashSet::from(["h08v05".parse::<TileIndex>()?]));
        Ok(())
    }

    #[test]
    fn test_range_errors_are_not_wrapped() {
        let err = lat_lon_to_tile(-91.0, 0.0).unwrap_err();
        assert!(err.is_range_error());
        assert_eq!(err, ModisTileError::LatitudeOutOfRange(-91.0));

        let err = resolve_tile(0.0, 2.0e7).unwrap_err();
        assert_eq!(err, ModisTileError::ProjectedYOutOfRange(2.0e7));
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() -> Result<(), ModisTileError> {
        let a = project_to_sinusoidal(-33.9, 151.2)?;
        let b = project_to_sinusoidal(-33.9, 151.2)?;
        assert_eq!(a.0.to_bits(), b.0.to_bits());
        assert_eq!(a.1.to_bits(), b.1.to_bits());
        assert_eq!(lat_lon_to_tile(-33.9, 151.2)?, lat_lon_to_tile(-33.9, 151.2)?);
        Ok(())
    }

    #[test]
    fn test_locator_is_shareable_across_threads() -> Result<(), ModisTileError> {
        let locator = TileLocator::with_transform(SphericalSinusoidal::default());
        let tiles: Vec<TileIndex> = std::thread::scope(|s| {
            let handles: Vec<_> = [(34.0, -118.0), (45.0, 45.0)]
                .into_iter()
                .map(|(lat, lon)| {
                    let locator = &locator;
                    s.spawn(move || locator.locate(lat, lon))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread panicked"))
                .collect::<Result<_, _>>()
        })?;
        assert_eq!(tiles[0].to_string(), "h08v05");
        assert_eq!(tiles[1].to_string(), "h21v04");
        Ok(())
    }
}
