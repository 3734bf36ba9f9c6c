//! Batch pipeline: setup, load, merge, write

use std::time::Instant;

use chrono::NaiveDate;

use crate::algorithm::merge::merge_sources;
use crate::config::VerbundConfig;
use crate::error::Result;
use crate::error::util::ensure_directory;
use crate::models::MergedTable;
use crate::sources::{
    EnrichmentSource, ensure_districts_cached, load_assignments, load_authorities, load_districts,
};
use crate::utils::io::Fetcher;
use crate::writer::write_outputs;

/// Create the working directories and make sure the district layer is cached
///
/// Returns `true` if the district layer had to be downloaded.
pub fn setup(config: &VerbundConfig, fetcher: &dyn Fetcher) -> Result<bool> {
    ensure_directory(&config.out_dir)?;
    ensure_directory(&config.cache_dir)?;
    ensure_directory(&config.publication_dir)?;
    ensure_districts_cached(config, fetcher)
}

/// Load every source and merge them into one table
pub fn merge(config: &VerbundConfig, enrichment: &dyn EnrichmentSource) -> Result<MergedTable> {
    let authorities = load_authorities(&config.authorities_file)?;
    let assignments = load_assignments(&config.assignments_file)?;
    let districts = load_districts(&config.cached_districts_path())?;
    let wikidata = enrichment.fetch_enrichment()?;

    merge_sources(
        &districts,
        &assignments,
        &authorities,
        &wikidata,
        config.target_level,
    )
}

/// Run the whole job and write both output files
pub fn run(
    config: &VerbundConfig,
    fetcher: &dyn Fetcher,
    enrichment: &dyn EnrichmentSource,
    generated: NaiveDate,
) -> Result<MergedTable> {
    let start = Instant::now();
    log::info!("{config}");

    setup(config, fetcher)?;
    let merged = merge(config, enrichment)?;
    write_outputs(&merged, config, generated)?;

    log::info!("GeoJSON saved: {}", config.enhanced_path().display());
    log::info!("GeoJSON for GitHub Pages: {}", config.publication_path().display());
    log::info!("Pipeline finished in {:?}", start.elapsed());
    Ok(merged)
}
