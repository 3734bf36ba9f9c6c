//! Organization, the merged row the pipeline produces

use geo::Geometry;

use super::authority::Authority;
use super::wikidata::WikidataRecord;

/// One transit or fare association with everything known about it
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub org: String,
    /// Union of all assigned district areas, `None` if nothing resolved
    pub geometry: Option<Geometry<f64>>,
    /// Curated metadata, `None` for organizations only seen in assignments
    pub authority: Option<Authority>,
    /// Assigned district codes in assignment order
    pub districts: Option<Vec<String>>,
    /// Sorted, unique two-character state codes of the assigned districts
    pub state_codes: Option<Vec<String>>,
    /// Wikidata enrichment, `None` when unlinked or unmatched
    pub wikidata: Option<WikidataRecord>,
}

impl Organization {
    #[must_use]
    pub fn new(org: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            geometry: None,
            authority: None,
            districts: None,
            state_codes: None,
            wikidata: None,
        }
    }
}

/// Result of the merge: organizations ordered by `org` plus the authority
/// column layout needed to write every row with the same properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedTable {
    pub authority_columns: Vec<String>,
    pub organizations: Vec<Organization>,
}

impl MergedTable {
    #[must_use]
    pub fn get(&self, org: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.org == org)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }
}
