//! Tests for the join and aggregate engine

use geo::{Area, BoundingRect, Geometry};
use verbundkarte::algorithm::merge::{filter_districts, join_districts, merge_sources};
use verbundkarte::sources::parse_districts;
use verbundkarte::{Assignment, AuthorityTable, District, VerbundError, WikidataRecord};

use crate::utils::{authority, scenario_districts, scenario_wikidata, square};

fn scenario_assignments() -> Vec<Assignment> {
    vec![
        Assignment::new("01001", "NAH.SH"),
        Assignment::new("01002", "NAH.SH"),
        Assignment::new("05111", "NAH.SH"),
        Assignment::new("03159", "VSN"),
    ]
}

fn scenario_authorities() -> AuthorityTable {
    AuthorityTable::new(
        vec!["wikidata".to_string()],
        vec![authority("NAH.SH", Some("Q12345")), authority("VBB", Some("Q999"))],
    )
}

fn scenario_merge() -> verbundkarte::MergedTable {
    let districts = parse_districts(&scenario_districts()).unwrap();
    merge_sources(
        &districts,
        &scenario_assignments(),
        &scenario_authorities(),
        &scenario_wikidata(),
        4,
    )
    .unwrap()
}

#[test]
fn test_filter_keeps_target_level_only() {
    let districts = parse_districts(&scenario_districts()).unwrap();

    let filtered = filter_districts(&districts, 4);

    assert_eq!(filtered.len(), 4);
    assert!(filtered.iter().all(|d| d.gf == 4));
}

#[test]
fn test_join_drops_unknown_districts() {
    let districts = vec![District::new("03159", 4, Some(square(0.0, 0.0)))];
    let level = filter_districts(&districts, 4);
    let assignments = vec![Assignment::new("03159", "VSN"), Assignment::new("99999", "VSN")];

    let joined = join_districts(&level, &assignments);

    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].kreis, "03159");
    assert_eq!(joined[0].org, "VSN");
}

#[test]
fn test_one_row_per_org_sorted() {
    let merged = scenario_merge();

    let orgs: Vec<&str> = merged.organizations.iter().map(|o| o.org.as_str()).collect();
    assert_eq!(orgs, vec!["NAH.SH", "VBB", "VSN"]);
}

#[test]
fn test_district_list_and_state_codes() {
    let merged = scenario_merge();
    let nahsh = merged.get("NAH.SH").unwrap();

    assert_eq!(
        nahsh.districts.as_deref(),
        Some(&["01001".to_string(), "01002".to_string(), "05111".to_string()][..])
    );
    assert_eq!(
        nahsh.state_codes.as_deref(),
        Some(&["01".to_string(), "05".to_string()][..])
    );
}

#[test]
fn test_adjacent_districts_dissolve_into_one_part() {
    let merged = scenario_merge();
    let nahsh = merged.get("NAH.SH").unwrap();

    // 01001 and 01002 merge, 05111 stays separate
    match nahsh.geometry.as_ref().unwrap() {
        Geometry::MultiPolygon(area) => {
            assert_eq!(area.0.len(), 2);
            assert!((area.unsigned_area() - 3.0).abs() < 1e-9);
        }
        other => panic!("expected MultiPolygon, got {other:?}"),
    }
}

#[test]
fn test_assignment_only_org_is_kept() {
    let merged = scenario_merge();
    let vsn = merged.get("VSN").unwrap();

    assert!(vsn.authority.is_none());
    assert!(vsn.wikidata.is_none());
    assert_eq!(vsn.districts.as_deref(), Some(&["03159".to_string()][..]));
    assert_eq!(vsn.state_codes.as_deref(), Some(&["03".to_string()][..]));

    // Only the gf=4 record of 03159 counts
    let geometry = vsn.geometry.as_ref().unwrap();
    assert!(matches!(geometry, Geometry::Polygon(_)));
    let bounds = geometry.bounding_rect().unwrap();
    assert!((bounds.min().x - 20.0).abs() < 1e-9);
    assert!((bounds.max().y - 21.0).abs() < 1e-9);
}

#[test]
fn test_authority_only_org_is_kept() {
    let merged = scenario_merge();
    let vbb = merged.get("VBB").unwrap();

    assert!(vbb.authority.is_some());
    assert!(vbb.geometry.is_none());
    assert!(vbb.districts.is_none());
    assert!(vbb.state_codes.is_none());
    // Q999 is not in the query result
    assert!(vbb.wikidata.is_none());
}

#[test]
fn test_wikidata_joined_by_item_id() {
    let merged = scenario_merge();
    let nahsh = merged.get("NAH.SH").unwrap();

    let record = nahsh.wikidata.as_ref().unwrap();
    assert_eq!(record.td, "Q12345");
    assert_eq!(record.short_name.as_deref(), Some("NAH.SH"));
}

#[test]
fn test_unresolved_districts_give_no_geometry() {
    let districts = vec![District::new("03159", 4, None)];
    let assignments = vec![Assignment::new("03159", "VSN"), Assignment::new("99999", "XYZ")];

    let merged =
        merge_sources(&districts, &assignments, &AuthorityTable::default(), &[], 4).unwrap();

    assert_eq!(merged.len(), 2);
    assert!(merged.get("VSN").unwrap().geometry.is_none());
    let xyz = merged.get("XYZ").unwrap();
    assert!(xyz.geometry.is_none());
    assert_eq!(xyz.districts.as_deref(), Some(&["99999".to_string()][..]));
}

#[test]
fn test_duplicate_authority_fails() {
    let authorities = AuthorityTable::new(
        vec!["wikidata".to_string()],
        vec![authority("VSN", None), authority("VSN", Some("Q1"))],
    );

    let err = merge_sources(&[], &[], &authorities, &[], 4).unwrap_err();

    match err {
        VerbundError::DuplicateKey { table, key } => {
            assert_eq!(table, "authorities");
            assert_eq!(key, "VSN");
        }
        other => panic!("expected duplicate key error, got {other}"),
    }
}

#[test]
fn test_duplicate_linked_wikidata_item_fails() {
    let authorities = AuthorityTable::new(vec![], vec![authority("VSN", Some("Q1"))]);
    let wikidata = vec![WikidataRecord::new("Q1"), WikidataRecord::new("Q1")];

    let err = merge_sources(&[], &[], &authorities, &wikidata, 4).unwrap_err();

    assert!(matches!(err, VerbundError::DuplicateKey { table: "wikidata", .. }));
}

#[test]
fn test_duplicate_unlinked_wikidata_item_is_ignored() {
    let authorities = AuthorityTable::new(vec![], vec![authority("VSN", Some("Q1"))]);
    let wikidata = vec![
        WikidataRecord::new("Q1"),
        WikidataRecord::new("Q2"),
        WikidataRecord::new("Q2"),
    ];

    let merged = merge_sources(&[], &[], &authorities, &wikidata, 4).unwrap();

    assert_eq!(merged.get("VSN").unwrap().wikidata.as_ref().unwrap().td, "Q1");
}
