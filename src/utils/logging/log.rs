//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::path::Path;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `target` - File, directory or URL being operated on
pub fn log_operation_start(operation: &str, target: impl AsRef<Path>) {
    log::info!("{} {}", operation, target.as_ref().display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `target` - File, directory or URL that was operated on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    target: impl AsRef<Path>,
    items: usize,
    elapsed: Option<std::time::Duration>,
) {
    let target = target.as_ref();
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} {} items from {} in {:?}",
            operation,
            items,
            target.display(),
            duration
        );
    } else {
        log::info!(
            "Successfully {} {} items from {}",
            operation,
            items,
            target.display()
        );
    }
}

