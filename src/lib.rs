//! Builds a GeoJSON map of German transit and fare associations.
//!
//! Administrative district shapes (VG250), a hand-maintained list of
//! authorities, their district assignments and Wikidata facts are joined
//! into one feature per organization.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod sources;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
pub use config::VerbundConfig;
pub use error::{Result, VerbundError};
pub use models::{
    Assignment, Authority, AuthorityTable, District, MergedTable, Organization, WikidataRecord,
};

pub use algorithm::merge::merge_sources;
pub use pipeline::{merge, run, setup};
pub use sources::{EnrichmentSource, SparqlClient};
pub use utils::io::{Fetcher, HttpClient};
