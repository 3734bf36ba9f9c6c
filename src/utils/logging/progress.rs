//! Progress reporting for blocking network calls
//!
//! The pipeline has no measurable progress, only waits, so a spinner is all
//! that is needed. Built on the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Template for the spinner line
pub const DEFAULT_SPINNER_TEMPLATE: &str = "{spinner:.green} {elapsed_precise} {msg}";

/// Create a spinner progress bar for operations without a known length
///
/// # Arguments
/// * `message` - Optional message to display with the spinner
#[must_use]
pub fn create_spinner(message: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    // The template is a constant, a parse failure would leave the default style
    if let Ok(style) = ProgressStyle::default_spinner().template(DEFAULT_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }

    if let Some(msg) = message {
        pb.set_message(msg.to_string());
    }

    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Finish a spinner and remove it from the terminal
pub fn finish_progress_bar(pb: &ProgressBar) {
    pb.finish_and_clear();
}
