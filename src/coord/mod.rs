mod sinusoidal;

pub use sinusoidal::{
    ProjTransform, Projector, SphericalSinusoidal, project_to_sinusoidal, validate_lat_lon,
};

use crate::error::ModisTileError;
use geo_types::Point;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// Geographic values follow the `(x, y)` = `(lon, lat)` axis order.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude or sinusoidal x).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude or sinusoidal y).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for geo_types::Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

/// Forward transform from WGS84 longitude/latitude (degrees) to sinusoidal meters.
///
/// This is the seam between the tile logic and the geodesy library: swap the
/// implementation to test without PROJ or to use a different backend.
pub trait SinusoidalTransform {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ModisTileError>;
}

impl<T: SinusoidalTransform + ?Sized> SinusoidalTransform for &T {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ModisTileError> {
        (**self).forward(lon, lat)
    }
}

/// A validated WGS84 latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeographicPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self, ModisTileError> {
        validate_lat_lon(lat, lon)?;
        Ok(Self { lat, lon })
    }

    /// Builds a point from an `(x, y)` = `(lon, lat)` coordinate.
    pub fn from_lon_lat<C: Coordinate>(coord: &C) -> Result<Self, ModisTileError> {
        Self::new(coord.y(), coord.x())
    }
}

/// A sinusoidal x/y in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidalPoint {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for SinusoidalPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<SinusoidalPoint> for Point<f64> {
    fn from(p: SinusoidalPoint) -> Self {
        Point::new(p.x, p.y)
    }
}
