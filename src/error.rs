/// Error type for modis-tiles operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ModisTileError {
    /// Latitude is outside [-90, 90] degrees (or NaN).
    LatitudeOutOfRange(f64),
    /// Longitude is outside [-180, 180] degrees (or NaN).
    LongitudeOutOfRange(f64),
    /// Sinusoidal x is outside the grid's horizontal extent.
    ProjectedXOutOfRange(f64),
    /// Sinusoidal y is outside the grid's vertical extent.
    ProjectedYOutOfRange(f64),
    /// Tile indices fell outside the grid after the edge fold-back.
    TileOutOfGrid { h: i64, v: i64 },
    /// A tile identifier string is not of the form `hXXvYY`.
    InvalidTileIndex(String),
    /// Coordinate projection failed (geographic to sinusoidal).
    ProjectionError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// File I/O error.
    IoError(String),
}

impl ModisTileError {
    /// True for the geographic and projected range errors.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            ModisTileError::LatitudeOutOfRange(_)
                | ModisTileError::LongitudeOutOfRange(_)
                | ModisTileError::ProjectedXOutOfRange(_)
                | ModisTileError::ProjectedYOutOfRange(_)
        )
    }
}

impl std::fmt::Display for ModisTileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModisTileError::LatitudeOutOfRange(lat) => {
                write!(f, "Latitude out of range [-90, 90]: {}", lat)
            }
            ModisTileError::LongitudeOutOfRange(lon) => {
                write!(f, "Longitude out of range [-180, 180]: {}", lon)
            }
            ModisTileError::ProjectedXOutOfRange(x) => {
                write!(f, "Sinusoidal x out of grid range: {}", x)
            }
            ModisTileError::ProjectedYOutOfRange(y) => {
                write!(f, "Sinusoidal y out of grid range: {}", y)
            }
            ModisTileError::TileOutOfGrid { h, v } => {
                write!(f, "Tile index outside grid: h={}, v={}", h, v)
            }
            ModisTileError::InvalidTileIndex(s) => write!(f, "Invalid tile index: '{}'", s),
            ModisTileError::ProjectionError(msg) => write!(f, "Projection error: {}", msg),
            ModisTileError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            ModisTileError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            ModisTileError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ModisTileError {}
