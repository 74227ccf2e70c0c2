//! Manifest path validation.
//!
//! This module provides common validation functions to ensure consistent
//! error handling across the CLI commands.

use owo_colors::OwoColorize;
use std::error::Error;
use std::path::Path;

/// Validate that a manifest path exists and names a regular file.
///
/// # Arguments
///
/// * `path` - The manifest path to validate
///
/// # Returns
///
/// * `Ok(())` if the path exists and is a file
/// * `Err` with a formatted error message otherwise
pub fn validate_manifest_path(path: &Path) -> Result<(), Box<dyn Error>> {
    if !path.exists() {
        return Err(format!(
            "{} Manifest does not exist: {}",
            "Error:".red().bold(),
            path.display()
        )
        .into());
    }
    if !path.is_file() {
        return Err(format!(
            "{} Manifest is not a file: {}",
            "Error:".red().bold(),
            path.display()
        )
        .into());
    }
    Ok(())
}
