//! Dissolve: union district areas per organization

use std::collections::BTreeMap;

use geo::{BooleanOps, Geometry, MultiPolygon};

use super::join::JoinedDistrict;

/// Union all parts into one area
///
/// Returns `None` when there is nothing to union or the union is empty.
#[must_use]
pub fn union_polygons<'a, I>(parts: I) -> Option<MultiPolygon<f64>>
where
    I: IntoIterator<Item = &'a MultiPolygon<f64>>,
{
    let mut parts = parts.into_iter();
    let first = parts.next()?.clone();
    let merged = parts.fold(first, |acc, part| acc.union(part));
    (!merged.0.is_empty()).then_some(merged)
}

/// Single-part areas become a `Polygon`, everything else a `MultiPolygon`
#[must_use]
pub fn simplify_parts(mut area: MultiPolygon<f64>) -> Geometry<f64> {
    match area.0.len() {
        1 => Geometry::Polygon(area.0.remove(0)),
        _ => Geometry::MultiPolygon(area),
    }
}

/// Group joined rows by organization and union each group's geometries
///
/// Every organization with at least one joined row gets an entry. The value
/// is `None` if none of its districts carried a usable geometry.
#[must_use]
pub fn dissolve_by_org(rows: &[JoinedDistrict<'_>]) -> BTreeMap<String, Option<Geometry<f64>>> {
    let mut groups: BTreeMap<&str, Vec<&MultiPolygon<f64>>> = BTreeMap::new();
    for row in rows {
        let parts = groups.entry(row.org).or_default();
        if let Some(geometry) = row.geometry {
            parts.push(geometry);
        }
    }

    groups
        .into_iter()
        .map(|(org, parts)| {
            let area = union_polygons(parts).map(simplify_parts);
            if area.is_none() {
                log::warn!("Organization {org} has districts but no resolvable geometry");
            }
            (org.to_string(), area)
        })
        .collect()
}
