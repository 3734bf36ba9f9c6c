//! Tests for the district shape provider and its download cache

use std::fs;

use serde_json::json;
use verbundkarte::sources::{ensure_districts_cached, load_districts, parse_districts};
use verbundkarte::{VerbundConfig, VerbundError};

use crate::utils::{
    StubFetcher, district_feature, feature_collection, scenario_districts, write_file,
};

#[test]
fn test_parse_polygon_districts() {
    let districts = parse_districts(&scenario_districts()).unwrap();

    assert_eq!(districts.len(), 5);
    assert_eq!(districts[0].ars, "01001");
    assert_eq!(districts[0].gf, 4);
    assert_eq!(districts[4].gf, 2);
    assert!(districts.iter().all(|d| d.geometry.is_some()));
}

#[test]
fn test_parse_multipolygon_and_string_gf() {
    let text = feature_collection(vec![json!({
        "type": "Feature",
        "properties": { "ars": "01054", "gf": "4" },
        "geometry": {
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]]
            ]
        }
    })]);

    let districts = parse_districts(&text).unwrap();

    assert_eq!(districts[0].ars, "01054");
    assert_eq!(districts[0].gf, 4);
    assert_eq!(districts[0].geometry.as_ref().unwrap().0.len(), 2);
}

#[test]
fn test_missing_geometry_is_kept_as_none() {
    let text = feature_collection(vec![json!({
        "type": "Feature",
        "properties": { "ars": "03159", "gf": 4 },
        "geometry": null
    })]);

    let districts = parse_districts(&text).unwrap();

    assert_eq!(districts[0].geometry, None);
}

#[test]
fn test_numeric_ars_is_rejected() {
    let text = feature_collection(vec![json!({
        "type": "Feature",
        "properties": { "ars": 3159, "gf": 4 },
        "geometry": null
    })]);

    let err = parse_districts(&text).unwrap_err();

    assert!(matches!(err, VerbundError::InvalidDistrict { index: 0, .. }));
}

#[test]
fn test_line_geometry_is_rejected() {
    let text = feature_collection(vec![
        district_feature("01001", 4, 0.0, 0.0),
        json!({
            "type": "Feature",
            "properties": { "ars": "01002", "gf": 4 },
            "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }
        }),
    ]);

    let err = parse_districts(&text).unwrap_err();

    assert!(matches!(err, VerbundError::InvalidDistrict { index: 1, .. }));
    assert!(err.to_string().contains("LineString"));
}

#[test]
fn test_populated_cache_skips_download() {
    let dir = tempfile::tempdir().unwrap();
    let config = VerbundConfig::with_base_dir(dir.path());
    write_file(dir.path(), ".cache/vg250_krs.json", &scenario_districts());
    let fetcher = StubFetcher::new("should not be used");

    let downloaded = ensure_districts_cached(&config, &fetcher).unwrap();

    assert!(!downloaded);
    assert_eq!(fetcher.request_count(), 0);
    assert_eq!(load_districts(&config.cached_districts_path()).unwrap().len(), 5);
}

#[test]
fn test_empty_cache_downloads_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = VerbundConfig::with_base_dir(dir.path());
    fs::create_dir_all(&config.cache_dir).unwrap();
    let fetcher = StubFetcher::new(scenario_districts());

    assert!(ensure_districts_cached(&config, &fetcher).unwrap());
    assert!(!ensure_districts_cached(&config, &fetcher).unwrap());

    assert_eq!(fetcher.request_count(), 1);
    let (url, accept) = fetcher.requests.borrow()[0].clone();
    assert!(url.starts_with("https://sgx.geodatenzentrum.de/wfs_vg250-ew"));
    assert!(url.contains("typeNames=vg250-ew:vg250_krs"));
    assert_eq!(accept, "application/json");
    assert_eq!(
        fs::read_to_string(config.cached_districts_path()).unwrap(),
        scenario_districts()
    );
}
