//! Utility functions for error handling
//!
//! Thin wrappers around filesystem calls that attach the path and the
//! purpose of the operation to any I/O failure.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, VerbundError};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::NotFound => format!("File not found, needed for: {purpose}"),
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        VerbundError::io(path, context, e)
    })
}

/// Safely read a whole file with rich error information
pub fn safe_read(path: &Path, purpose: &str) -> Result<Vec<u8>> {
    fs::read(path)
        .map_err(|e| VerbundError::io(path, format!("Failed to read file for: {purpose}"), e))
}

/// Create a directory (and its parents) if it does not exist yet
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)
        .map_err(|e| VerbundError::io(path, "Failed to create directory", e))
}

/// Write a file by filling a temporary sibling and renaming it into place
///
/// Readers of `path` only ever observe the previous or the complete new content.
pub fn write_atomically<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let tmp = temporary_sibling(path);
    let file = fs::File::create(&tmp)
        .map_err(|e| VerbundError::io(&tmp, "Failed to create temporary file", e))?;
    let mut writer = io::BufWriter::new(file);

    let written = fill(&mut writer).and_then(|()| {
        writer
            .flush()
            .map_err(|e| VerbundError::io(&tmp, "Failed to flush temporary file", e))
    });
    if let Err(e) = written {
        // Best effort, the original error is what matters
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    drop(writer);

    fs::rename(&tmp, path).map_err(|e| VerbundError::io(path, "Failed to move file into place", e))
}

fn temporary_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
