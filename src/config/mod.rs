//! Configuration for the merge pipeline.
//!
//! Every path, endpoint and constant the pipeline touches lives here and is
//! passed down explicitly.

use std::fmt;
use std::path::{Path, PathBuf};

/// WFS request returning all VG250 districts (`vg250_krs`) as GeoJSON in EPSG:4326.
///
/// Capabilities: <https://sgx.geodatenzentrum.de/wfs_vg250-ew?REQUEST=GetCapabilities&SERVICE=WFS>
pub const DEFAULT_DISTRICTS_URL: &str = "https://sgx.geodatenzentrum.de/wfs_vg250-ew?REQUEST=GetFeature&SERVICE=WFS&VERSION=2.0.0&outputFormat=json&typeNames=vg250-ew:vg250_krs&srsName=EPSG:4326&";

/// VG250 "Geofaktor" for land areas with structure
pub const GEOFAKTOR_LAND_MIT_STRUKTUR: i64 = 4;

pub const DEFAULT_SPARQL_ENDPOINT: &str = "https://query.wikidata.org/sparql";

pub const WIKIDATA_ENTITY_PREFIX: &str = "http://www.wikidata.org/entity/";

/// Transit districts (Q7835189) located in Germany (Q183)
pub const DEFAULT_SPARQL_QUERY: &str = r#"
SELECT ?td ?tdLabel ?officalWebsite ?shortName ?twitterUserName ?linkedInOrgId
WHERE
{
  ?td wdt:P31 wd:Q7835189.
  ?td wdt:P17 wd:Q183.
  OPTIONAL {?td wdt:P856 ?officalWebsite}
  OPTIONAL {?td wdt:P1813 ?shortName}
  OPTIONAL {?td wdt:P2002 ?twitterUserName}
  OPTIONAL {?td wdt:P4264 ?linkedInOrgId}
  SERVICE wikibase:label { bd:serviceParam wikibase:language "de". }
}
"#;

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct VerbundConfig {
    /// User-Agent sent with every HTTP request
    pub user_agent: String,
    /// Directory holding the raw district download
    pub cache_dir: PathBuf,
    /// Directory for the canonical output
    pub out_dir: PathBuf,
    /// Directory for the published, diff-friendly output
    pub publication_dir: PathBuf,
    /// Manually curated authority metadata
    pub authorities_file: PathBuf,
    /// District to authority assignments
    pub assignments_file: PathBuf,
    /// Where the district shapes are downloaded from
    pub districts_url: String,
    /// File name of the cached district download inside `cache_dir`
    pub districts_cache_name: String,
    /// Only districts with this `gf` value take part in the merge
    pub target_level: i64,
    pub sparql_endpoint: String,
    pub sparql_query: String,
    /// Prefix stripped from entity IRIs before joining
    pub entity_prefix: String,
    /// File name of the canonical output inside `out_dir`
    pub enhanced_name: String,
    /// File name of the published output inside `publication_dir`
    pub publication_name: String,
    /// `name` member of the published feature collection
    pub collection_name: String,
    /// `metadata.source` of the published output
    pub metadata_source: String,
    /// `metadata.description` of the published output
    pub metadata_description: String,
}

impl Default for VerbundConfig {
    fn default() -> Self {
        Self {
            user_agent: "github.com/highsource/verbundkarte/0.0.1".to_string(),
            cache_dir: PathBuf::from(".cache"),
            out_dir: PathBuf::from("out"),
            publication_dir: PathBuf::from("docs"),
            authorities_file: PathBuf::from("data/authorities.csv"),
            assignments_file: PathBuf::from("data/assignments.csv"),
            districts_url: DEFAULT_DISTRICTS_URL.to_string(),
            districts_cache_name: "vg250_krs.json".to_string(),
            target_level: GEOFAKTOR_LAND_MIT_STRUKTUR,
            sparql_endpoint: DEFAULT_SPARQL_ENDPOINT.to_string(),
            sparql_query: DEFAULT_SPARQL_QUERY.to_string(),
            entity_prefix: WIKIDATA_ENTITY_PREFIX.to_string(),
            enhanced_name: "authorities_enhanced.geojson".to_string(),
            publication_name: "verbundkarte.geojson".to_string(),
            collection_name: "verbundkarte".to_string(),
            metadata_source: "https://github.com/highsource/verbundkarte".to_string(),
            metadata_description: "Verkehrs- und Tarifverbünde in Deutschland".to_string(),
        }
    }
}

impl VerbundConfig {
    /// Default configuration with every relative path placed under `base`
    #[must_use]
    pub fn with_base_dir(base: &Path) -> Self {
        let defaults = Self::default();
        Self {
            cache_dir: base.join(&defaults.cache_dir),
            out_dir: base.join(&defaults.out_dir),
            publication_dir: base.join(&defaults.publication_dir),
            authorities_file: base.join(&defaults.authorities_file),
            assignments_file: base.join(&defaults.assignments_file),
            ..defaults
        }
    }

    #[must_use]
    pub fn cached_districts_path(&self) -> PathBuf {
        self.cache_dir.join(&self.districts_cache_name)
    }

    #[must_use]
    pub fn enhanced_path(&self) -> PathBuf {
        self.out_dir.join(&self.enhanced_name)
    }

    #[must_use]
    pub fn publication_path(&self) -> PathBuf {
        self.publication_dir.join(&self.publication_name)
    }

    /// Name of the canonical feature collection, derived from its file name
    #[must_use]
    pub fn enhanced_collection_name(&self) -> String {
        Path::new(&self.enhanced_name)
            .file_stem()
            .map_or_else(|| self.enhanced_name.clone(), |s| s.to_string_lossy().into_owned())
    }
}

impl fmt::Display for VerbundConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Verbundkarte Configuration:")?;
        writeln!(f, "  Authorities: {}", self.authorities_file.display())?;
        writeln!(f, "  Assignments: {}", self.assignments_file.display())?;
        writeln!(f, "  District cache: {}", self.cached_districts_path().display())?;
        writeln!(f, "  Target level (gf): {}", self.target_level)?;
        writeln!(f, "  SPARQL endpoint: {}", self.sparql_endpoint)?;
        writeln!(f, "  Output: {}", self.enhanced_path().display())?;
        write!(f, "  Publication: {}", self.publication_path().display())
    }
}
