//! Authority entity model
//!
//! Authorities are curated by hand, so apart from the `org` key and the
//! `wikidata` link the columns are open-ended. They are carried as an
//! ordered attribute map and written out unchanged.

use serde_json::{Map, Value};

/// Curated metadata for one organization
#[derive(Debug, Clone, PartialEq)]
pub struct Authority {
    /// Organization identifier
    pub org: String,
    /// Wikidata item id (for example `Q12345`) if the authority has one
    pub wikidata: Option<String>,
    /// Every column except `org`, in header order
    pub attributes: Map<String, Value>,
}

impl Authority {
    /// Value of an attribute column, `Null` when absent
    #[must_use]
    pub fn attribute(&self, column: &str) -> Value {
        self.attributes.get(column).cloned().unwrap_or(Value::Null)
    }
}

/// All authorities together with the column layout of the source table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorityTable {
    /// Attribute column names in header order, `org` excluded
    pub columns: Vec<String>,
    /// Rows in file order
    pub rows: Vec<Authority>,
}

impl AuthorityTable {
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Authority>) -> Self {
        Self { columns, rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
