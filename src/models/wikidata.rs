//! Wikidata enrichment record

use serde_json::Value;

/// Output property names of the enrichment columns, in output order
pub const WIKIDATA_PROPERTIES: [&str; 6] = [
    "td",
    "tdLabel",
    "officalWebsite",
    "shortName",
    "twitterUserName",
    "linkedInOrgId",
];

/// One transit district as returned by the Wikidata query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikidataRecord {
    /// Item id with the entity IRI prefix removed, e.g. `Q12345`
    pub td: String,
    pub label: Option<String>,
    pub official_website: Option<String>,
    pub short_name: Option<String>,
    pub twitter_user_name: Option<String>,
    pub linked_in_org_id: Option<String>,
}

impl WikidataRecord {
    #[must_use]
    pub fn new(td: impl Into<String>) -> Self {
        Self {
            td: td.into(),
            ..Default::default()
        }
    }

    /// Property values aligned with [`WIKIDATA_PROPERTIES`]
    #[must_use]
    pub fn property_values(&self) -> [Value; 6] {
        let opt = |v: &Option<String>| v.clone().map_or(Value::Null, Value::String);
        [
            Value::String(self.td.clone()),
            opt(&self.label),
            opt(&self.official_website),
            opt(&self.short_name),
            opt(&self.twitter_user_name),
            opt(&self.linked_in_org_id),
        ]
    }
}

/// Remove the entity namespace from an IRI, leaving other values untouched
#[must_use]
pub fn strip_entity_prefix(value: &str, prefix: &str) -> String {
    value.strip_prefix(prefix).unwrap_or(value).to_string()
}
