use env_logger::Env;
use log::info;
use modis_tiles::{ModisTileError, lat_lon_to_tile, project_to_sinusoidal, tiles_for_polygon};

fn main() -> Result<(), ModisTileError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let lat = 34.0;
    let lon = -118.0;

    let (x, y) = project_to_sinusoidal(lat, lon)?;
    let tile = lat_lon_to_tile(lat, lon)?;

    info!("({}, {}) -> sinusoidal ({:.3}, {:.3})", lat, lon, x, y);
    println!("Tile: {}", tile);
    println!("Tile bounds: {:?}", tile.bounds());

    let vertices = [(-118.0, 34.0), (-117.0, 34.5), (-96.0, 34.0)];
    let mut tiles: Vec<_> = tiles_for_polygon(&vertices)?.into_iter().collect();
    tiles.sort();
    let ids: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
    println!("Polygon tiles: {}", ids.join(", "));

    Ok(())
}
