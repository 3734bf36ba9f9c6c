//! Domain models for the merge pipeline
//!
//! Source records are loaded into these types once and never touched as
//! untyped tables afterwards. `Organization` is the derived, merged row.

pub mod assignment;
pub mod authority;
pub mod district;
pub mod organization;
pub mod wikidata;

pub use assignment::Assignment;
pub use authority::{Authority, AuthorityTable};
pub use district::District;
pub use organization::{MergedTable, Organization};
pub use wikidata::WikidataRecord;
