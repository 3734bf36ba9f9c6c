//! Relational and spatial joins
//!
//! The steps run in a fixed order, each one consuming what the previous
//! produced:
//!
//! 1. keep districts at the target level
//! 2. inner join districts to assignments on `ars == kreis`
//! 3. dissolve the joined geometries by `org`
//! 4. district list per `org`
//! 5. state codes per `org`
//! 6. outer join geometries with authorities on `org`
//! 7. left join the lists from 4 and 5
//! 8. left join Wikidata on `authority.wikidata == td`
//!
//! Keys that must be unique on one side of a join are checked, a duplicate
//! is an error rather than a duplicated feature.

use std::collections::BTreeSet;

use geo::MultiPolygon;
use rustc_hash::FxHashMap;

use super::aggregate::{district_lists, state_codes};
use super::dissolve::dissolve_by_org;
use crate::error::{Result, VerbundError};
use crate::models::{
    Assignment, Authority, AuthorityTable, District, MergedTable, Organization, WikidataRecord,
};

/// One assignment matched to the district it names
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedDistrict<'a> {
    pub kreis: &'a str,
    pub org: &'a str,
    pub geometry: Option<&'a MultiPolygon<f64>>,
}

/// Districts whose `gf` equals `level`
#[must_use]
pub fn filter_districts(districts: &[District], level: i64) -> Vec<&District> {
    districts.iter().filter(|d| d.gf == level).collect()
}

/// Inner join of districts and assignments on `ars == kreis`
///
/// Output follows district order, then assignment order within a district.
/// Assignments naming an unknown district drop out here.
#[must_use]
pub fn join_districts<'a>(
    districts: &[&'a District],
    assignments: &'a [Assignment],
) -> Vec<JoinedDistrict<'a>> {
    let mut by_kreis: FxHashMap<&str, Vec<&'a Assignment>> = FxHashMap::default();
    for assignment in assignments {
        by_kreis
            .entry(assignment.kreis.as_str())
            .or_default()
            .push(assignment);
    }

    districts
        .iter()
        .flat_map(|&district| {
            by_kreis
                .get(district.ars.as_str())
                .into_iter()
                .flatten()
                .map(move |assignment| JoinedDistrict {
                    kreis: assignment.kreis.as_str(),
                    org: assignment.org.as_str(),
                    geometry: district.geometry.as_ref(),
                })
        })
        .collect()
}

/// Index rows by a key that has to be unique
pub fn unique_index<'a, T, F>(
    table: &'static str,
    rows: &'a [T],
    key: F,
) -> Result<FxHashMap<&'a str, &'a T>>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut index = FxHashMap::default();
    for row in rows {
        let k = key(row);
        if index.insert(k, row).is_some() {
            return Err(VerbundError::DuplicateKey {
                table,
                key: k.to_string(),
            });
        }
    }
    Ok(index)
}

/// Look up the enrichment for an authority
///
/// Duplicated `td` values only matter when an authority actually links to
/// them, so they are reported at lookup time.
fn wikidata_for<'a>(
    authority: &Authority,
    by_td: &FxHashMap<&str, Vec<&'a WikidataRecord>>,
) -> Result<Option<&'a WikidataRecord>> {
    let Some(td) = authority.wikidata.as_deref() else {
        return Ok(None);
    };
    match by_td.get(td).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([record]) => Ok(Some(*record)),
        Some(_) => Err(VerbundError::DuplicateKey {
            table: "wikidata",
            key: td.to_string(),
        }),
    }
}

/// Run the whole join and aggregate sequence
///
/// The result has one row per `org` found in the authorities or the
/// assignments, ordered by `org`.
pub fn merge_sources(
    districts: &[District],
    assignments: &[Assignment],
    authorities: &AuthorityTable,
    wikidata: &[WikidataRecord],
    target_level: i64,
) -> Result<MergedTable> {
    let level_districts = filter_districts(districts, target_level);
    log::info!(
        "{} of {} districts at level gf={target_level}",
        level_districts.len(),
        districts.len()
    );

    let joined = join_districts(&level_districts, assignments);
    log::info!(
        "Matched {} of {} assignments to a district",
        joined.len(),
        assignments.len()
    );

    let mut geometries = dissolve_by_org(&joined);
    let mut districts_by_org = district_lists(assignments);
    let mut states_by_org = state_codes(assignments);

    let authority_by_org = unique_index("authorities", &authorities.rows, |a| a.org.as_str())?;
    let mut by_td: FxHashMap<&str, Vec<&WikidataRecord>> = FxHashMap::default();
    for record in wikidata {
        by_td.entry(record.td.as_str()).or_default().push(record);
    }

    // Dissolved orgs are a subset of the assignment orgs
    let orgs: BTreeSet<&str> = authority_by_org
        .keys()
        .copied()
        .chain(assignments.iter().map(|a| a.org.as_str()))
        .collect();

    let mut organizations = Vec::with_capacity(orgs.len());
    for org in orgs {
        let mut organization = Organization::new(org);
        organization.geometry = geometries.remove(org).flatten();
        organization.districts = districts_by_org.remove(org);
        organization.state_codes = states_by_org.remove(org);

        if let Some(authority) = authority_by_org.get(org) {
            organization.wikidata = wikidata_for(authority, &by_td)?.cloned();
            organization.authority = Some((*authority).clone());
        } else {
            log::warn!("Organization {org} is assigned districts but has no authority entry");
        }
        if organization.districts.is_some() && organization.geometry.is_none() {
            log::warn!("Organization {org} has no district geometry at level gf={target_level}");
        }

        organizations.push(organization);
    }

    let merged = MergedTable {
        authority_columns: authorities.columns.clone(),
        organizations,
    };
    log::info!(
        "Merged {} organizations ({} with geometry, {} enriched)",
        merged.len(),
        merged.organizations.iter().filter(|o| o.geometry.is_some()).count(),
        merged.organizations.iter().filter(|o| o.wikidata.is_some()).count()
    );
    Ok(merged)
}
