//! Wikidata enrichment via SPARQL

use std::collections::HashMap;
use std::time::Instant;

use reqwest::Url;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::config::VerbundConfig;
use crate::error::{Result, VerbundError};
use crate::models::WikidataRecord;
use crate::models::wikidata::strip_entity_prefix;
use crate::utils::io::Fetcher;
use crate::utils::logging::{create_spinner, finish_progress_bar, log_operation_complete};

const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Source of knowledge-graph enrichment records
pub trait EnrichmentSource {
    fn fetch_enrichment(&self) -> Result<Vec<WikidataRecord>>;
}

/// Runs the transit district query against a SPARQL endpoint
pub struct SparqlClient<'a> {
    fetcher: &'a dyn Fetcher,
    endpoint: String,
    query: String,
    entity_prefix: String,
}

impl<'a> SparqlClient<'a> {
    #[must_use]
    pub fn new(
        fetcher: &'a dyn Fetcher,
        endpoint: impl Into<String>,
        query: impl Into<String>,
        entity_prefix: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
            query: query.into(),
            entity_prefix: entity_prefix.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &VerbundConfig, fetcher: &'a dyn Fetcher) -> Self {
        Self::new(
            fetcher,
            &config.sparql_endpoint,
            &config.sparql_query,
            &config.entity_prefix,
        )
    }

    fn query_url(&self) -> Result<Url> {
        Url::parse_with_params(&self.endpoint, &[("query", self.query.as_str())]).map_err(|e| {
            VerbundError::Config(format!("Invalid SPARQL endpoint {}: {e}", self.endpoint))
        })
    }
}

impl EnrichmentSource for SparqlClient<'_> {
    fn fetch_enrichment(&self) -> Result<Vec<WikidataRecord>> {
        let url = self.query_url()?;
        let start = Instant::now();

        let spinner = create_spinner(Some("Querying Wikidata"));
        let body = self.fetcher.fetch(&url, SPARQL_RESULTS_JSON);
        finish_progress_bar(&spinner);

        let records = parse_sparql_results(&body?, &self.entity_prefix)?;
        log_operation_complete("fetched", &self.endpoint, records.len(), Some(start.elapsed()));
        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    bindings: Vec<HashMap<String, SparqlTerm>>,
}

// `type`, `datatype` and `xml:lang` are not needed
#[derive(Debug, Deserialize)]
struct SparqlTerm {
    value: String,
}

/// Parse a SPARQL 1.1 JSON result set into enrichment records
///
/// Unbound optional variables become `None`; every solution must bind `td`.
/// Multi-valued optional properties yield one solution per value, these are
/// collapsed into one record per `td` keeping the first value bound for each
/// variable in result order.
pub fn parse_sparql_results(body: &[u8], entity_prefix: &str) -> Result<Vec<WikidataRecord>> {
    let response: SparqlResponse = serde_json::from_slice(body)?;

    let mut records: Vec<WikidataRecord> = Vec::new();
    let mut position: FxHashMap<String, usize> = FxHashMap::default();
    for (index, mut binding) in response.results.bindings.into_iter().enumerate() {
        let mut take = |name: &str| binding.remove(name).map(|term| term.value);
        let td = take("td").ok_or_else(|| {
            VerbundError::Schema(format!("SPARQL solution {index} does not bind ?td"))
        })?;
        let solution = WikidataRecord {
            td: strip_entity_prefix(&td, entity_prefix),
            label: take("tdLabel"),
            official_website: take("officalWebsite"),
            short_name: take("shortName"),
            twitter_user_name: take("twitterUserName"),
            linked_in_org_id: take("linkedInOrgId"),
        };

        match position.get(&solution.td).copied() {
            Some(at) => fill_unbound(&mut records[at], solution),
            None => {
                position.insert(solution.td.clone(), records.len());
                records.push(solution);
            }
        }
    }
    Ok(records)
}

fn fill_unbound(record: &mut WikidataRecord, later: WikidataRecord) {
    record.label = record.label.take().or(later.label);
    record.official_website = record.official_website.take().or(later.official_website);
    record.short_name = record.short_name.take().or(later.short_name);
    record.twitter_user_name = record.twitter_user_name.take().or(later.twitter_user_name);
    record.linked_in_org_id = record.linked_in_org_id.take().or(later.linked_in_org_id);
}
