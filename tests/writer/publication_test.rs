//! Tests for the GeoJSON writers

use std::fs;

use chrono::NaiveDate;
use serde_json::{Value, json};
use verbundkarte::algorithm::merge::simplify_parts;
use verbundkarte::writer::{build_features, write_outputs};
use verbundkarte::{MergedTable, Organization, VerbundConfig};

use crate::utils::{authority, scenario_wikidata, square};

fn two_feature_table() -> MergedTable {
    let mut nahsh = Organization::new("NAH.SH");
    nahsh.geometry = Some(simplify_parts(square(0.0, 0.0)));
    nahsh.authority = Some(authority("NAH.SH", Some("Q12345")));
    nahsh.districts = Some(vec!["01001".to_string()]);
    nahsh.state_codes = Some(vec!["01".to_string()]);
    nahsh.wikidata = scenario_wikidata().into_iter().next();

    let vsn = Organization::new("VSN");

    MergedTable {
        authority_columns: vec!["wikidata".to_string()],
        organizations: vec![nahsh, vsn],
    }
}

fn generated() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[test]
fn test_publication_layout() {
    let dir = tempfile::tempdir().unwrap();
    let config = VerbundConfig::with_base_dir(dir.path());
    fs::create_dir_all(&config.out_dir).unwrap();
    fs::create_dir_all(&config.publication_dir).unwrap();

    write_outputs(&two_feature_table(), &config, generated()).unwrap();

    let text = fs::read_to_string(config.publication_path()).unwrap();
    assert!(text.ends_with("}\n"));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "{");
    assert_eq!(
        lines[1],
        r#"  "metadata": {"generated": "2024-05-01", "source": "https://github.com/highsource/verbundkarte", "description": "Verkehrs- und Tarifverbünde in Deutschland"},"#
    );
    assert_eq!(lines[2], r#"  "type": "FeatureCollection","#);
    assert_eq!(lines[3], r#"  "name": "verbundkarte","#);
    assert_eq!(lines[4], r#"  "features": ["#);
    assert!(lines[5].starts_with(r#"    {"type": "Feature", "properties": {"org": "NAH.SH", "wikidata": "Q12345", "kreis_list": ["01001"], "state_codes": ["01"], "td": "Q12345""#));
    assert!(lines[5].ends_with("},"));
    assert!(lines[5].contains(r#""geometry": {"type": "Polygon", "coordinates": "#));
    assert_eq!(
        lines[6],
        r#"    {"type": "Feature", "properties": {"org": "VSN", "wikidata": null, "kreis_list": null, "state_codes": null, "td": null, "tdLabel": null, "officalWebsite": null, "shortName": null, "twitterUserName": null, "linkedInOrgId": null}, "geometry": null}"#
    );
    assert_eq!(lines[7], "  ]");
    assert_eq!(lines[8], "}");
}

#[test]
fn test_publication_is_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = VerbundConfig::with_base_dir(dir.path());
    fs::create_dir_all(&config.out_dir).unwrap();
    fs::create_dir_all(&config.publication_dir).unwrap();

    write_outputs(&two_feature_table(), &config, generated()).unwrap();

    let document: Value =
        serde_json::from_str(&fs::read_to_string(config.publication_path()).unwrap()).unwrap();
    assert_eq!(document["type"], "FeatureCollection");
    assert_eq!(document["features"].as_array().unwrap().len(), 2);
    assert!(document["features"][0].get("id").is_none());
}

#[test]
fn test_canonical_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = VerbundConfig::with_base_dir(dir.path());
    fs::create_dir_all(&config.out_dir).unwrap();
    fs::create_dir_all(&config.publication_dir).unwrap();

    write_outputs(&two_feature_table(), &config, generated()).unwrap();

    let document: Value =
        serde_json::from_str(&fs::read_to_string(config.enhanced_path()).unwrap()).unwrap();
    assert_eq!(document["name"], "authorities_enhanced");
    assert_eq!(document["features"][0]["properties"]["shortName"], "NAH.SH");
    assert_eq!(document["features"][1]["geometry"], Value::Null);
}

#[test]
fn test_empty_table_has_empty_feature_array() {
    let dir = tempfile::tempdir().unwrap();
    let config = VerbundConfig::with_base_dir(dir.path());
    fs::create_dir_all(&config.out_dir).unwrap();
    fs::create_dir_all(&config.publication_dir).unwrap();

    write_outputs(&MergedTable::default(), &config, generated()).unwrap();

    let text = fs::read_to_string(config.publication_path()).unwrap();
    assert!(text.ends_with("  \"features\": [\n  ]\n}\n"));
}

#[test]
fn test_features_have_no_id() {
    let features = build_features(&two_feature_table()).unwrap();

    assert_eq!(features.len(), 2);
    for feature in &features {
        let keys: Vec<&String> = feature.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["type", "properties", "geometry"]);
    }
    assert_eq!(features[0]["properties"]["state_codes"], json!(["01"]));
}
