//! Error handling for the merge pipeline.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;

/// Specialized error type for the verbundkarte pipeline
#[derive(Debug, thiserror::Error)]
pub enum VerbundError {
    /// Error opening, reading or writing a file
    #[error("IO error at {}: {context}: {source}", .path.display())]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Error parsing a delimited table
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error converting record batches into typed records
    #[error("Record conversion error: {0}")]
    Record(#[from] serde_arrow::Error),

    /// Error (de)serializing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error interpreting GeoJSON
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Error talking to a remote endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured value cannot be used
    #[error("Configuration error: {0}")]
    Config(String),

    /// A table lacks a column the pipeline needs
    #[error("Schema error: {0}")]
    Schema(String),

    /// A district feature could not be turned into a `District`
    #[error("Invalid district feature #{index}: {reason}")]
    InvalidDistrict { index: usize, reason: String },

    /// A join key occurs more than once where it must be unique
    #[error("Duplicate key '{key}' in {table}")]
    DuplicateKey { table: &'static str, key: String },
}

impl VerbundError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            context: context.into(),
            source,
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, VerbundError>;
