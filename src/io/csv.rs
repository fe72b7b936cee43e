use crate::error::ModisTileError;
use crate::geom::parse_geometry;
use crate::index::TileIndex;
use crate::tile::TileLocator;
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Name of the tile column prepended to every output row
pub const TILE_COLUMN: &str = "modis_tile";

enum SourceIndices {
    Geometry(usize),
    Coordinates { lat_idx: usize, lon_idx: usize },
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry in lon/lat
    GeometryColumn(String),
    /// Separate latitude and longitude columns in degrees
    CoordinateColumns {
        lat_column: String,
        lon_column: String,
    },
}

#[derive(Debug, Clone)]
pub struct CsvTileConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub keep_source_columns: bool,
}

impl CsvTileConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use modis_tiles::CsvTileConfig;
    ///
    /// let config = CsvTileConfig::new("geometry");
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            keep_source_columns: false,
        }
    }

    /// Create config for a CSV with separate latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use modis_tiles::CsvTileConfig;
    ///
    /// let config = CsvTileConfig::from_coords("Latitude", "Longitude")
    ///     .keep_source_columns(true);
    /// ```
    pub fn from_coords(lat_column: impl Into<String>, lon_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lat_column: lat_column.into(),
                lon_column: lon_column.into(),
            },
            exclude_columns: Vec::new(),
            keep_source_columns: false,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Keep the geometry / coordinate columns in the output.
    pub fn keep_source_columns(mut self, keep: bool) -> Self {
        self.keep_source_columns = keep;
        self
    }
}

pub trait CsvToTiles {
    fn to_tile_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvTileConfig,
    ) -> Result<(), ModisTileError>;
}

impl<P: AsRef<Path>> CsvToTiles for P {
    fn to_tile_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvTileConfig,
    ) -> Result<(), ModisTileError> {
        csv_to_tile_csv(self, output_path, config)
    }
}

fn column_index(
    headers: &csv::StringRecord,
    name: &str,
    what: &str,
) -> Result<usize, ModisTileError> {
    if name.is_empty() {
        return Err(ModisTileError::CsvError(format!(
            "{} column name cannot be empty",
            what
        )));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ModisTileError::CsvError(format!("{} column '{}' not found", what, name)))
}

fn parse_field(
    record: &csv::StringRecord,
    idx: usize,
    what: &str,
) -> Result<f64, ModisTileError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| {
            ModisTileError::CsvError(format!("Missing {} column at index {}", what, idx))
        })?
        .trim();
    raw.parse()
        .map_err(|_| ModisTileError::CsvError(format!("Invalid {}: '{}'", what, raw)))
}

/// Converts a CSV file with geometry or lat/lon columns to a CSV file with MODIS tile ids.
///
/// The first output column is `modis_tile`. Coordinate rows produce exactly one output
/// row; geometry rows produce one row per distinct tile touched by a vertex, sorted.
/// Output is streamed row by row.
///
/// ```no_run
/// use modis_tiles::{csv_to_tile_csv, CsvTileConfig};
///
/// let config = CsvTileConfig::from_coords("lat", "lon");
/// csv_to_tile_csv("sites.csv", "sites_tiles.csv", &config).unwrap();
/// ```
pub fn csv_to_tile_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvTileConfig,
) -> Result<(), ModisTileError> {
    let file =
        File::open(csv_path.as_ref()).map_err(|e| ModisTileError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| ModisTileError::CsvError(e.to_string()))?
        .clone();

    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lat_column,
            lon_column,
        } => {
            let lat_idx = column_index(&headers, lat_column, "Latitude")?;
            let lon_idx = column_index(&headers, lon_column, "Longitude")?;
            (
                SourceIndices::Coordinates { lat_idx, lon_idx },
                HashSet::from([lat_idx, lon_idx]),
            )
        }
    };
    if config.keep_source_columns {
        exclude_indices.clear();
    }

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let locator = TileLocator::new()?;

    let out_file =
        File::create(output_path.as_ref()).map_err(|e| ModisTileError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec![TILE_COLUMN];
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| ModisTileError::CsvError(e.to_string()))?;

    let mut rows = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| ModisTileError::CsvError(e.to_string()))?;

        let tiles: Vec<TileIndex> = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    ModisTileError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let geom = parse_geometry(geom_str)?;
                let mut tiles: Vec<TileIndex> =
                    locator.tiles_for_geometry(&geom)?.into_iter().collect();
                if tiles.is_empty() {
                    return Err(ModisTileError::CsvError(format!(
                        "Geometry has no vertices: '{}'",
                        geom_str.trim()
                    )));
                }
                tiles.sort();
                tiles
            }
            SourceIndices::Coordinates { lat_idx, lon_idx } => {
                let lat = parse_field(&record, *lat_idx, "latitude")?;
                let lon = parse_field(&record, *lon_idx, "longitude")?;
                vec![locator.locate(lat, lon)?]
            }
        };

        for tile in tiles {
            let mut row: Vec<String> = vec![tile.to_string()];
            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| ModisTileError::CsvError(e.to_string()))?;
            rows += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| ModisTileError::CsvError(e.to_string()))?;

    debug!(
        "wrote {} tile rows to {}",
        rows,
        output_path.as_ref().display()
    );
    Ok(())
}
