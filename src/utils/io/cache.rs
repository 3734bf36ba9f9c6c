//! Download-once file cache

use std::path::Path;
use std::time::Instant;

use reqwest::Url;

use crate::error::util::write_atomically;
use crate::error::{Result, VerbundError};
use crate::utils::io::http::Fetcher;
use crate::utils::logging::{create_spinner, finish_progress_bar, log_operation_complete};

/// Download `url` to `path` unless the file already exists
///
/// Returns `true` when a download happened. There is exactly one attempt;
/// a failed download leaves no file behind, so the next run tries again.
pub fn download_if_not_cached(path: &Path, url: &str, fetcher: &dyn Fetcher) -> Result<bool> {
    if path.exists() {
        log::info!("Using cached {}", path.display());
        return Ok(false);
    }

    let url =
        Url::parse(url).map_err(|e| VerbundError::Config(format!("Invalid URL {url}: {e}")))?;
    let start = Instant::now();
    let host = url.host_str().unwrap_or("data");
    let spinner = create_spinner(Some(&format!("Downloading {host}")));
    let body = fetcher.fetch(&url, "application/json");
    finish_progress_bar(&spinner);
    let body = body?;

    write_atomically(path, |w| {
        w.write_all(&body)
            .map_err(|e| VerbundError::io(path, "Failed to write download", e))
    })?;
    log_operation_complete("downloaded", path, body.len(), Some(start.elapsed()));
    Ok(true)
}
