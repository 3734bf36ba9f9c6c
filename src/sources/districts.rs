//! District shape provider
//!
//! The VG250 district layer is downloaded once into the cache directory and
//! parsed from there on every run.

use std::path::Path;
use std::time::Instant;

use geo::MultiPolygon;
use geojson::GeoJson;
use serde_json::Value;

use crate::config::VerbundConfig;
use crate::error::util::safe_read;
use crate::error::{Result, VerbundError};
use crate::models::District;
use crate::utils::io::{Fetcher, download_if_not_cached};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Download the district layer unless it is already cached
///
/// Returns `true` if a download was performed.
pub fn ensure_districts_cached(config: &VerbundConfig, fetcher: &dyn Fetcher) -> Result<bool> {
    download_if_not_cached(&config.cached_districts_path(), &config.districts_url, fetcher)
}

/// Load all district records from a cached GeoJSON file
pub fn load_districts(path: &Path) -> Result<Vec<District>> {
    log_operation_start("Loading districts from", path);
    let start = Instant::now();

    let bytes = safe_read(path, "loading districts")?;
    let text = String::from_utf8(bytes).map_err(|e| {
        VerbundError::io(
            path,
            "District file is not UTF-8",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })?;
    let districts = parse_districts(&text)?;

    log_operation_complete("loaded", path, districts.len(), Some(start.elapsed()));
    Ok(districts)
}

/// Parse a GeoJSON feature collection of districts
///
/// Each feature needs a string `ars` and a `gf` that is an integer or a
/// numeric string. Polygon and MultiPolygon geometries are accepted, a
/// missing geometry is kept as `None`.
pub fn parse_districts(text: &str) -> Result<Vec<District>> {
    let collection = match text.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => collection,
        _ => {
            return Err(VerbundError::Schema(
                "District data is not a FeatureCollection".to_string(),
            ));
        }
    };

    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            let invalid = |reason: String| VerbundError::InvalidDistrict { index, reason };

            let ars = match feature.property("ars") {
                Some(Value::String(ars)) => ars.clone(),
                Some(other) => return Err(invalid(format!("'ars' must be a string, got {other}"))),
                None => return Err(invalid("missing 'ars'".to_string())),
            };
            let gf = match feature.property("gf") {
                Some(Value::Number(n)) => n.as_i64(),
                Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
                _ => None,
            }
            .ok_or_else(|| invalid(format!("district {ars} has no integer 'gf'")))?;

            let geometry = feature
                .geometry
                .map(|geometry| to_multi_polygon(geometry).map_err(invalid))
                .transpose()?;

            Ok(District::new(ars, gf, geometry))
        })
        .collect()
}

fn to_multi_polygon(geometry: geojson::Geometry) -> std::result::Result<MultiPolygon<f64>, String> {
    let geometry = geo::Geometry::<f64>::try_from(geometry).map_err(|e| e.to_string())?;
    match geometry {
        geo::Geometry::Polygon(polygon) => Ok(MultiPolygon::new(vec![polygon])),
        geo::Geometry::MultiPolygon(multi) => Ok(multi),
        other => Err(format!("unsupported geometry type {}", geometry_name(&other))),
    }
}

fn geometry_name(geometry: &geo::Geometry<f64>) -> &'static str {
    match geometry {
        geo::Geometry::Point(_) => "Point",
        geo::Geometry::Line(_) => "Line",
        geo::Geometry::LineString(_) => "LineString",
        geo::Geometry::Polygon(_) => "Polygon",
        geo::Geometry::MultiPoint(_) => "MultiPoint",
        geo::Geometry::MultiLineString(_) => "MultiLineString",
        geo::Geometry::MultiPolygon(_) => "MultiPolygon",
        geo::Geometry::GeometryCollection(_) => "GeometryCollection",
        geo::Geometry::Rect(_) => "Rect",
        geo::Geometry::Triangle(_) => "Triangle",
    }
}
