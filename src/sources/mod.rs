//! Source loaders
//!
//! Each loader turns one input (a CSV file, the cached district download or
//! the Wikidata endpoint) into typed records. Nothing here joins anything.

pub mod assignments;
pub mod authorities;
pub mod districts;
pub mod table;
pub mod wikidata;

pub use assignments::load_assignments;
pub use authorities::load_authorities;
pub use districts::{ensure_districts_cached, load_districts, parse_districts};
pub use wikidata::{EnrichmentSource, SparqlClient, parse_sparql_results};
