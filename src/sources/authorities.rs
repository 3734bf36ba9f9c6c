//! Authorities loader

use std::path::Path;

use serde_json::Map;

use crate::error::{Result, VerbundError};
use crate::models::{Authority, AuthorityTable};
use crate::sources::table::{json_cell, read_csv_table, string_cell};

/// Key column of the authorities table
pub const ORG_COLUMN: &str = "org";
/// Column holding the Wikidata item id
pub const WIKIDATA_COLUMN: &str = "wikidata";

/// Load the curated authorities table
///
/// Every column other than `org` ends up in [`Authority::attributes`] with
/// its inferred type. `org` is mandatory on every row.
pub fn load_authorities(path: &Path) -> Result<AuthorityTable> {
    let table = read_csv_table(path, &[ORG_COLUMN, WIKIDATA_COLUMN])?;
    let org_idx = table.require_column(ORG_COLUMN)?;
    let wikidata_idx = table.schema.index_of(WIKIDATA_COLUMN).ok();

    let attribute_columns: Vec<(usize, String)> = table
        .schema
        .fields()
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != org_idx)
        .map(|(idx, field)| (idx, field.name().clone()))
        .collect();

    let mut rows = Vec::with_capacity(table.num_rows());
    for batch in &table.batches {
        for row in 0..batch.num_rows() {
            let org = string_cell(batch.column(org_idx), row).ok_or_else(|| {
                VerbundError::Schema(format!(
                    "Row {} of {} has no '{ORG_COLUMN}'",
                    rows.len() + 1,
                    path.display()
                ))
            })?;
            let wikidata = wikidata_idx.and_then(|idx| string_cell(batch.column(idx), row));

            let mut attributes = Map::new();
            for (idx, name) in &attribute_columns {
                attributes.insert(name.clone(), json_cell(batch.column(*idx), row)?);
            }

            rows.push(Authority {
                org,
                wikidata,
                attributes,
            });
        }
    }

    let columns = attribute_columns.into_iter().map(|(_, name)| name).collect();
    Ok(AuthorityTable::new(columns, rows))
}
