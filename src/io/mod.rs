pub mod csv;

pub use self::csv::{CoordinateSource, CsvTileConfig, CsvToTiles, csv_to_tile_csv};
