pub mod config;
pub mod init;
pub mod lint;
pub mod preview;
pub mod show;

use crate::manifest::Manifest;
use crate::utils::validation::validate_manifest_path;
use std::error::Error;
use std::path::PathBuf;

/// Expand, validate, load, and combine the manifest paths given on the
/// command line. Fails on the first unreadable or unparseable file;
/// `lint` keeps its own per-file loop so it can report them all.
pub(crate) fn load_combined(manifest_paths: &[String]) -> Result<Manifest, Box<dyn Error>> {
    let mut manifests = Vec::with_capacity(manifest_paths.len());
    for raw in manifest_paths {
        let path = PathBuf::from(shellexpand::tilde(raw).to_string());
        validate_manifest_path(&path)?;
        manifests.push(Manifest::load(&path)?);
    }
    Ok(Manifest::combine(manifests))
}
