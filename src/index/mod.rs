pub mod constants;
mod identifier;
mod resolver;

pub use constants::{
    GEOGRAPHIC_PROJ, GridConstants, LOWER_RIGHT_X_METERS, LOWER_RIGHT_Y_METERS, MODIS_GRID,
    MODIS_SPHERE_RADIUS_METERS, SINUSOIDAL_PROJ, TILE_SIZE_METERS, TOTAL_COLUMNS, TOTAL_ROWS,
    UPPER_LEFT_X_METERS, UPPER_LEFT_Y_METERS,
};
pub use identifier::TileIndex;
pub use resolver::resolve_tile;
