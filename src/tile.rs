use crate::coord::{Coordinate, ProjTransform, Projector, SinusoidalTransform};
use crate::error::ModisTileError;
use crate::index::{GridConstants, MODIS_GRID, TileIndex};
use geo::CoordsIter;
use geo_types::Geometry;
use log::debug;
use rayon::prelude::*;
use std::collections::HashSet;

/// Finds MODIS tiles for coordinates and shapes using one reusable transform.
///
/// The free functions ([`lat_lon_to_tile`], [`tiles_for_polygon`]) build a fresh
/// PROJ transform on every call; hold a `TileLocator` when resolving many points.
///
/// # Example
///
/// ```
/// use modis_tiles::TileLocator;
///
/// # fn main() -> Result<(), modis_tiles::ModisTileError> {
/// let locator = TileLocator::new()?;
/// let tile = locator.locate(34.0, -118.0)?;
/// assert_eq!(tile.to_string(), "h08v05");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TileLocator<T> {
    projector: Projector<T>,
    grid: GridConstants,
}

impl TileLocator<ProjTransform> {
    /// A locator backed by PROJ on the standard MODIS grid.
    pub fn new() -> Result<Self, ModisTileError> {
        Ok(Self::with_transform(ProjTransform::new()?))
    }
}

impl<T: SinusoidalTransform> TileLocator<T> {
    pub fn with_transform(transform: T) -> Self {
        Self {
            projector: Projector::with_transform(transform),
            grid: MODIS_GRID,
        }
    }

    pub fn with_grid(mut self, grid: GridConstants) -> Self {
        self.grid = grid;
        self
    }

    pub fn grid(&self) -> &GridConstants {
        &self.grid
    }

    /// Returns the tile containing a WGS84 latitude/longitude.
    pub fn locate(&self, lat: f64, lon: f64) -> Result<TileIndex, ModisTileError> {
        let p = self.projector.project(lat, lon)?;
        self.grid.resolve(p.x, p.y)
    }

    /// Returns the set of tiles containing the polygon's vertices.
    ///
    /// Vertices are `(lon, lat)`. Only vertices are inspected: a tile crossed by an
    /// edge or covered by the interior, with no vertex inside it, is not reported.
    /// One out-of-range vertex fails the whole call.
    pub fn tiles_for_polygon<C: Coordinate>(
        &self,
        vertices: &[C],
    ) -> Result<HashSet<TileIndex>, ModisTileError> {
        let tiles = vertices
            .iter()
            .map(|c| self.locate(c.y(), c.x()))
            .collect::<Result<HashSet<_>, _>>()?;
        debug!("{} vertices -> {} tiles", vertices.len(), tiles.len());
        Ok(tiles)
    }

    /// Returns the set of tiles containing any vertex of a lon/lat geometry.
    ///
    /// Same vertex-only rule as [`TileLocator::tiles_for_polygon`]; polygon holes
    /// contribute their vertices too.
    pub fn tiles_for_geometry(
        &self,
        geom: &Geometry<f64>,
    ) -> Result<HashSet<TileIndex>, ModisTileError> {
        geom.coords_iter()
            .map(|c| self.locate(c.y(), c.x()))
            .collect()
    }
}

/// Returns the MODIS tile containing a WGS84 latitude/longitude.
///
/// Range errors from the projection or the tile lookup are returned unchanged.
///
/// # Example
///
/// ```
/// use modis_tiles::lat_lon_to_tile;
///
/// # fn main() -> Result<(), modis_tiles::ModisTileError> {
/// assert_eq!(lat_lon_to_tile(45.0, 45.0)?.to_string(), "h21v04");
/// assert!(lat_lon_to_tile(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
pub fn lat_lon_to_tile(lat: f64, lon: f64) -> Result<TileIndex, ModisTileError> {
    let (x, y) = crate::coord::project_to_sinusoidal(lat, lon)?;
    crate::index::resolve_tile(x, y)
}

/// Returns the set of MODIS tiles containing the given polygon vertices.
///
/// Vertices are in `(lon, lat)` order, as they come out of GeoJSON/WKT.
/// Only vertices are considered, not edges or the interior.
///
/// # Example
///
/// ```
/// use modis_tiles::tiles_for_polygon;
///
/// # fn main() -> Result<(), modis_tiles::ModisTileError> {
/// let tiles = tiles_for_polygon(&[(-118.0, 34.0), (-117.0, 34.5)])?;
/// assert!(tiles.len() <= 2);
/// # Ok(())
/// # }
/// ```
pub fn tiles_for_polygon<C: Coordinate>(
    vertices: &[C],
) -> Result<HashSet<TileIndex>, ModisTileError> {
    if vertices.is_empty() {
        return Ok(HashSet::new());
    }
    TileLocator::new()?.tiles_for_polygon(vertices)
}

/// Resolves many `(lat, lon)` points in parallel, preserving input order.
///
/// Each rayon worker builds its own PROJ transform. The first failing point fails
/// the batch.
pub fn lat_lon_to_tiles_par(points: &[(f64, f64)]) -> Result<Vec<TileIndex>, ModisTileError> {
    points
        .par_iter()
        .map_init(TileLocator::new, |locator, &(lat, lon)| {
            locator.as_ref().map_err(Clone::clone)?.locate(lat, lon)
        })
        .collect()
}
