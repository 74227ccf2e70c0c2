//! Progress indicators shared by the CLI commands.
//!
//! Centralizing the indicatif styling keeps the spinner and bar look
//! consistent between `preview` and `lint`.

use crate::constants::SPINNER_CHARS;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner used while loading and parsing manifest files.
pub fn create_progress_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(SPINNER_CHARS),
    );
    spinner
}

/// Bar used while resolving and rendering performances.
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb
}
