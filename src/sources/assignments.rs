//! Assignments loader

use std::path::Path;

use crate::error::Result;
use crate::models::Assignment;
use crate::sources::table::read_csv_table;

/// Load district to organization assignments in file order
///
/// `kreis` is read as text so zero-padded codes stay intact. Both keys are
/// trimmed the same way authority keys are. Columns other than `kreis` and
/// `org` are ignored.
pub fn load_assignments(path: &Path) -> Result<Vec<Assignment>> {
    let table = read_csv_table(path, &["kreis", "org"])?;
    let kreis_idx = table.require_column("kreis")?;
    let org_idx = table.require_column("org")?;

    let mut assignments = Vec::with_capacity(table.num_rows());
    for batch in &table.batches {
        let projected = batch.project(&[kreis_idx, org_idx])?;
        let records: Vec<Assignment> = serde_arrow::from_record_batch(&projected)?;
        assignments.extend(
            records
                .into_iter()
                .map(|a| Assignment::new(a.kreis.trim(), a.org.trim())),
        );
    }
    Ok(assignments)
}
