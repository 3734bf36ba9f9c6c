//! Per-organization lists derived from the raw assignments

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::models::Assignment;

/// District codes per organization, in assignment order, duplicates kept
#[must_use]
pub fn district_lists(assignments: &[Assignment]) -> FxHashMap<String, Vec<String>> {
    let mut lists: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for assignment in assignments {
        lists
            .entry(assignment.org.clone())
            .or_default()
            .push(assignment.kreis.clone());
    }
    lists
}

/// Sorted, unique state codes (first two characters of `kreis`) per organization
#[must_use]
pub fn state_codes(assignments: &[Assignment]) -> FxHashMap<String, Vec<String>> {
    assignments
        .iter()
        .into_group_map_by(|assignment| assignment.org.as_str())
        .into_iter()
        .map(|(org, group)| {
            let codes = group
                .into_iter()
                .map(Assignment::state_code)
                .sorted()
                .dedup()
                .collect();
            (org.to_string(), codes)
        })
        .collect()
}
