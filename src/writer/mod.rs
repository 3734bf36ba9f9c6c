//! Output writers
//!
//! Both outputs are built from the same feature list and written atomically.

pub mod canonical;
pub mod feature;
pub mod publication;

use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;

use crate::config::VerbundConfig;
use crate::error::Result;
use crate::error::VerbundError;
use crate::error::util::write_atomically;
use crate::models::MergedTable;
use crate::utils::logging::log_operation_complete;

pub use canonical::write_canonical;
pub use feature::{feature_geometry, feature_properties, to_feature};
pub use publication::{InlineFormatter, PublicationMetadata, write_publication};

/// Convert every merged row into a GeoJSON feature
pub fn build_features(table: &MergedTable) -> Result<Vec<Value>> {
    table
        .organizations
        .iter()
        .map(|organization| to_feature(organization, &table.authority_columns))
        .collect()
}

/// Write the canonical and the publication file
///
/// # Arguments
/// * `table` - The merged organizations
/// * `config` - Supplies output paths and metadata strings
/// * `generated` - Date stamped into the publication metadata
pub fn write_outputs(
    table: &MergedTable,
    config: &VerbundConfig,
    generated: NaiveDate,
) -> Result<()> {
    let features = build_features(table)?;

    let enhanced = config.enhanced_path();
    let name = config.enhanced_collection_name();
    write_file(&enhanced, |w| write_canonical(w, &name, &features))?;
    log_operation_complete("wrote", &enhanced, features.len(), None);

    let metadata = PublicationMetadata {
        generated,
        source: config.metadata_source.clone(),
        description: config.metadata_description.clone(),
    };
    let publication = config.publication_path();
    write_file(&publication, |w| {
        write_publication(w, &metadata, &config.collection_name, &features)
    })?;
    log_operation_complete("wrote", &publication, features.len(), None);

    Ok(())
}

fn write_file<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut dyn std::io::Write) -> std::io::Result<()>,
{
    write_atomically(path, |w| {
        fill(w).map_err(|e| VerbundError::io(path, "Failed to write GeoJSON", e))
    })
}
