use crate::coord::{GeographicPoint, SinusoidalPoint, SinusoidalTransform};
use crate::error::ModisTileError;
use crate::index::{GEOGRAPHIC_PROJ, MODIS_SPHERE_RADIUS_METERS, SINUSOIDAL_PROJ};
use log::debug;
use proj::Proj;

/// Checks latitude then longitude against the WGS84 degree ranges.
///
/// NaN fails the check and is reported as out of range.
pub fn validate_lat_lon(lat: f64, lon: f64) -> Result<(), ModisTileError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ModisTileError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ModisTileError::LongitudeOutOfRange(lon));
    }
    Ok(())
}

/// PROJ-backed transform between the WGS84 and MODIS sinusoidal definitions.
///
/// Wraps a PROJ context, so it is not `Sync`; build one per thread.
pub struct ProjTransform {
    proj: Proj,
}

impl ProjTransform {
    pub fn new() -> Result<Self, ModisTileError> {
        let proj = Proj::new_known_crs(GEOGRAPHIC_PROJ, SINUSOIDAL_PROJ, None)
            .map_err(|e| ModisTileError::ProjectionError(e.to_string()))?;
        debug!("built PROJ transform {} -> {}", GEOGRAPHIC_PROJ, SINUSOIDAL_PROJ);
        Ok(Self { proj })
    }
}

impl std::fmt::Debug for ProjTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjTransform")
            .field("from", &GEOGRAPHIC_PROJ)
            .field("to", &SINUSOIDAL_PROJ)
            .finish()
    }
}

impl SinusoidalTransform for ProjTransform {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ModisTileError> {
        self.proj
            .convert((lon, lat))
            .map_err(|e| ModisTileError::ProjectionError(e.to_string()))
    }
}

/// Closed-form sinusoidal projection on the MODIS sphere.
///
/// x = R * lon * cos(lat), y = R * lat (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalSinusoidal {
    pub radius: f64,
}

impl Default for SphericalSinusoidal {
    fn default() -> Self {
        Self {
            radius: MODIS_SPHERE_RADIUS_METERS,
        }
    }
}

impl SinusoidalTransform for SphericalSinusoidal {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ModisTileError> {
        let lat = lat.to_radians();
        let x = self.radius * lon.to_radians() * lat.cos();
        let y = self.radius * lat;
        Ok((x, y))
    }
}

/// Projects geographic coordinates through a [`SinusoidalTransform`].
#[derive(Debug, Clone)]
pub struct Projector<T> {
    transform: T,
}

impl Projector<ProjTransform> {
    /// A projector backed by PROJ.
    pub fn new() -> Result<Self, ModisTileError> {
        Ok(Self::with_transform(ProjTransform::new()?))
    }
}

impl<T: SinusoidalTransform> Projector<T> {
    pub fn with_transform(transform: T) -> Self {
        Self { transform }
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Validates `lat`/`lon` and projects them to sinusoidal meters.
    pub fn project(&self, lat: f64, lon: f64) -> Result<SinusoidalPoint, ModisTileError> {
        let point = GeographicPoint::new(lat, lon)?;
        let xy = self.transform.forward(point.lon, point.lat)?;
        Ok(SinusoidalPoint::from(xy))
    }
}

/// Projects a WGS84 latitude/longitude (degrees) to MODIS sinusoidal `(x, y)` meters.
///
/// Bounds are checked before any PROJ work is done.
///
/// # Example
///
/// ```
/// use modis_tiles::project_to_sinusoidal;
///
/// # fn main() -> Result<(), modis_tiles::ModisTileError> {
/// let (x, y) = project_to_sinusoidal(45.0, 45.0)?;
/// assert!((x - 3538204.887918666).abs() < 1e-3);
/// assert!((y - 5003777.338949354).abs() < 1e-3);
/// # Ok(())
/// # }
/// ```
pub fn project_to_sinusoidal(lat: f64, lon: f64) -> Result<(f64, f64), ModisTileError> {
    validate_lat_lon(lat, lon)?;
    ProjTransform::new()?.forward(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::MODIS_GRID;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    struct CountingTransform {
        calls: Cell<usize>,
    }

    impl SinusoidalTransform for CountingTransform {
        fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ModisTileError> {
            self.calls.set(self.calls.get() + 1);
            Ok((lon, lat))
        }
    }

    #[test]
    fn test_origin_is_exact() -> Result<(), ModisTileError> {
        assert_eq!(project_to_sinusoidal(0.0, 0.0)?, (0.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_known_point() -> Result<(), ModisTileError> {
        let (x, y) = project_to_sinusoidal(45.0, 45.0)?;
        assert_relative_eq!(x, 3538204.887918666, epsilon = 1e-6);
        assert_relative_eq!(y, 5003777.338949354, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            project_to_sinusoidal(-90.1, 0.0),
            Err(ModisTileError::LatitudeOutOfRange(-90.1))
        );
        assert_eq!(
            project_to_sinusoidal(90.1, 0.0),
            Err(ModisTileError::LatitudeOutOfRange(90.1))
        );
        assert_eq!(
            project_to_sinusoidal(0.0, -180.1),
            Err(ModisTileError::LongitudeOutOfRange(-180.1))
        );
        assert_eq!(
            project_to_sinusoidal(0.0, 180.1),
            Err(ModisTileError::LongitudeOutOfRange(180.1))
        );
        assert!(project_to_sinusoidal(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_latitude_checked_first() {
        assert_eq!(
            project_to_sinusoidal(100.0, 200.0),
            Err(ModisTileError::LatitudeOutOfRange(100.0))
        );
    }

    #[test]
    fn test_extremes_stay_inside_grid() -> Result<(), ModisTileError> {
        let projector = Projector::new()?;
        for lat in [-90.0, -45.0, 0.0, 45.0, 90.0] {
            for lon in [-180.0, -90.0, 0.0, 90.0, 180.0] {
                let p = projector.project(lat, lon)?;
                assert!(p.x.is_finite() && p.y.is_finite());
                assert!(MODIS_GRID.contains_x(p.x), "x={} for ({lat}, {lon})", p.x);
                assert!(MODIS_GRID.contains_y(p.y), "y={} for ({lat}, {lon})", p.y);
            }
        }
        Ok(())
    }

    #[test]
    fn test_validation_happens_before_transform() {
        let projector = Projector::with_transform(CountingTransform {
            calls: Cell::new(0),
        });
        assert!(projector.project(91.0, 0.0).is_err());
        assert!(projector.project(0.0, 181.0).is_err());
        assert_eq!(projector.transform().calls.get(), 0);
    }

    #[test]
    fn test_transform_receives_lon_lat_order() -> Result<(), ModisTileError> {
        let projector = Projector::with_transform(CountingTransform {
            calls: Cell::new(0),
        });
        let p = projector.project(34.0, -118.0)?;
        assert_eq!((p.x, p.y), (-118.0, 34.0));
        assert_eq!(projector.transform().calls.get(), 1);
        Ok(())
    }

    #[test]
    fn test_spherical_matches_proj() -> Result<(), ModisTileError> {
        let proj = ProjTransform::new()?;
        let sphere = SphericalSinusoidal::default();
        for (lon, lat) in [(45.0, 45.0), (-118.0, 34.0), (179.9, -60.0), (10.0, 89.0)] {
            let (px, py) = proj.forward(lon, lat)?;
            let (sx, sy) = sphere.forward(lon, lat)?;
            assert_relative_eq!(px, sx, epsilon = 1e-3);
            assert_relative_eq!(py, sy, epsilon = 1e-3);
        }
        Ok(())
    }

    #[test]
    fn test_projector_borrows_transform() -> Result<(), ModisTileError> {
        let sphere = SphericalSinusoidal::default();
        let projector = Projector::with_transform(&sphere);
        assert_eq!(projector.project(0.0, 0.0)?, SinusoidalPoint { x: 0.0, y: 0.0 });
        Ok(())
    }

    #[test]
    fn test_projected_point_into_geo_point() -> Result<(), ModisTileError> {
        let projector = Projector::with_transform(SphericalSinusoidal::default());
        let point: geo_types::Point<f64> = projector.project(45.0, 45.0)?.into();
        assert_relative_eq!(point.x(), 3538204.887918666, epsilon = 1e-6);
        assert_relative_eq!(point.y(), 5003777.338949354, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_project_to_sinusoidal_matches_projector() -> Result<(), ModisTileError> {
        let p = Projector::new()?.project(-33.9, 151.2)?;
        assert_eq!(project_to_sinusoidal(-33.9, 151.2)?, (p.x, p.y));
        Ok(())
    }

    #[test]
    fn test_spherical_known_point() -> Result<(), ModisTileError> {
        let (x, y) = SphericalSinusoidal::default().forward(45.0, 45.0)?;
        assert_relative_eq!(x, 3538204.887918666, epsilon = 1e-6);
        assert_relative_eq!(y, 5003777.338949354, epsilon = 1e-6);
        Ok(())
    }
}
