use serde::{Deserialize, Serialize};

/// Upper-left x of the sinusoidal grid extent (meters)
pub const UPPER_LEFT_X_METERS: f64 = -20015109.355798;
/// Upper-left y of the sinusoidal grid extent (meters)
pub const UPPER_LEFT_Y_METERS: f64 = 10007554.677899;
/// Lower-right x of the sinusoidal grid extent (meters)
pub const LOWER_RIGHT_X_METERS: f64 = 20015109.355798;
/// Lower-right y of the sinusoidal grid extent (meters)
pub const LOWER_RIGHT_Y_METERS: f64 = -10007554.677899;

/// Edge length of one square tile (meters)
pub const TILE_SIZE_METERS: f64 = 1111950.5197665554;

/// Number of tile rows (v)
pub const TOTAL_ROWS: u8 = 18;
/// Number of tile columns (h)
pub const TOTAL_COLUMNS: u8 = 36;

/// Radius of the authalic sphere used by the MODIS sinusoidal grid
pub const MODIS_SPHERE_RADIUS_METERS: f64 = 6371007.181;

/// WGS84 geographic reference system
pub const GEOGRAPHIC_PROJ: &str = "+proj=longlat +ellps=WGS84 +datum=WGS84 +no_defs";

/// MODIS sinusoidal reference system
pub const SINUSOIDAL_PROJ: &str =
    "+proj=sinu +lon_0=0 +x_0=0 +y_0=0 +a=6371007.181 +b=6371007.181 +units=m +no_defs";

/// Extent and layout of a sinusoidal tile grid.
///
/// The MODIS/VIIRS grid is available as [`MODIS_GRID`]; it is a plain `Copy`
/// value so it can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConstants {
    pub upper_left_x: f64,
    pub upper_left_y: f64,
    pub lower_right_x: f64,
    pub lower_right_y: f64,
    pub tile_size: f64,
    pub total_rows: u8,
    pub total_columns: u8,
}

/// The standard MODIS/VIIRS 36 x 18 sinusoidal grid
pub const MODIS_GRID: GridConstants = GridConstants {
    upper_left_x: UPPER_LEFT_X_METERS,
    upper_left_y: UPPER_LEFT_Y_METERS,
    lower_right_x: LOWER_RIGHT_X_METERS,
    lower_right_y: LOWER_RIGHT_Y_METERS,
    tile_size: TILE_SIZE_METERS,
    total_rows: TOTAL_ROWS,
    total_columns: TOTAL_COLUMNS,
};

impl GridConstants {
    pub const fn modis() -> Self {
        MODIS_GRID
    }

    /// Returns true if `x` lies within the horizontal extent (NaN never does).
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.upper_left_x && x <= self.lower_right_x
    }

    /// Returns true if `y` lies within the vertical extent (NaN never does).
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.lower_right_y && y <= self.upper_left_y
    }
}

impl Default for GridConstants {
    fn default() -> Self {
        MODIS_GRID
    }
}
