use crate::error::ModisTileError;
use geo::CoordsIter;
use geo_types::{Geometry, GeometryCollection};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

fn parse_error(e: impl ToString) -> ModisTileError {
    ModisTileError::GeometryParseError(e.to_string())
}

/// Parses a lon/lat geometry from GeoJSON (text starting with `{`) or WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, ModisTileError> {
    match s.trim() {
        json if json.starts_with('{') => parse_geojson(json),
        wkt => parse_wkt(wkt),
    }
}

/// Parses GeoJSON into a single geometry.
///
/// A Feature yields its geometry. A FeatureCollection yields a
/// `GeometryCollection` of its features' geometries; features without a
/// geometry are skipped.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, ModisTileError> {
    match s.parse::<GeoJson>().map_err(parse_error)? {
        GeoJson::Geometry(geom) => Geometry::try_from(geom).map_err(parse_error),
        GeoJson::Feature(feat) => {
            let geom = feat
                .geometry
                .ok_or_else(|| parse_error("Feature has no geometry"))?;
            Geometry::try_from(geom).map_err(parse_error)
        }
        GeoJson::FeatureCollection(fc) => fc
            .features
            .into_iter()
            .filter_map(|feat| feat.geometry)
            .map(|geom| Geometry::try_from(geom).map_err(parse_error))
            .collect::<Result<Vec<_>, _>>()
            .map(|geoms| Geometry::GeometryCollection(GeometryCollection::new_from(geoms))),
    }
}

/// Parses WKT into a geometry.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, ModisTileError> {
    let wkt = Wkt::<f64>::from_str(s).map_err(parse_error)?;
    Geometry::try_from(wkt).map_err(|_| parse_error("WKT has no geo-types equivalent"))
}

/// Returns every vertex of a geometry as `(lon, lat)` pairs.
///
/// Closed rings keep their repeated closing vertex.
pub fn polygon_vertices(geom: &Geometry<f64>) -> Vec<(f64, f64)> {
    geom.coords_iter().map(|c| (c.x, c.y)).collect()
}
