//! Manifest loading and combining.
//!
//! A manifest is a YAML document with up to two top-level keys: `defaults`,
//! a mapping of field names to values shared by every performance, and
//! `performances`, a list of override mappings, one per recording. Several
//! manifest files can be combined into one run: later defaults overlay
//! earlier ones and performance lists concatenate in file order.

use crate::attrs::AttributeSet;
use crate::constants::{DEFAULTS_KEY, PERFORMANCES_KEY};
use crate::error::MetadataError;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub defaults: AttributeSet,
    pub performances: Vec<AttributeSet>,
    /// Entries that could not be coerced into attribute sets, with enough
    /// context to fix them. Collected instead of aborting the whole load.
    pub problems: Vec<String>,
}

impl Manifest {
    /// Parse a manifest document from YAML text.
    ///
    /// A missing `defaults` or `performances` key is fine (a file may carry
    /// only one of them). A performance entry that is not a mapping is
    /// recorded in `problems` with its index rather than failing the parse;
    /// only a document whose overall shape is wrong is a schema error.
    pub fn parse(text: &str) -> Result<Self, MetadataError> {
        let doc: serde_yaml::Value = serde_yaml::from_str(text)
            .map_err(|e| MetadataError::Schema(format!("invalid YAML: {e}")))?;

        if doc.is_null() {
            return Ok(Self::default());
        }
        if !doc.is_mapping() {
            return Err(MetadataError::Schema(
                "manifest root must be a mapping".to_string(),
            ));
        }

        let mut manifest = Self::default();

        if let Some(defaults) = doc.get(DEFAULTS_KEY)
            && !defaults.is_null()
        {
            manifest.defaults = AttributeSet::from_yaml(defaults)?;
        }

        if let Some(performances) = doc.get(PERFORMANCES_KEY)
            && !performances.is_null()
        {
            let entries = performances.as_sequence().ok_or_else(|| {
                MetadataError::Schema(format!("'{PERFORMANCES_KEY}' must be a list"))
            })?;
            for (index, entry) in entries.iter().enumerate() {
                match AttributeSet::from_yaml(entry) {
                    Ok(attrs) => manifest.performances.push(attrs),
                    Err(e) => manifest
                        .problems
                        .push(format!("performance {index} is no good: {e}")),
                }
            }
        }

        Ok(manifest)
    }

    /// Load a manifest file, injecting provenance fields into its defaults
    /// so templates can reference where the manifest lives
    /// (`manifest_filepath`, `manifest_basename`, `manifest_dirpath`,
    /// `manifest_filename`).
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let mut manifest = Self::parse(&text)
            .map_err(|e| format!("{}: {e}", path.display()))?;

        let filepath = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let basename = filepath
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        let dirpath = filepath
            .parent()
            .map(|p| p.to_string_lossy().to_string());
        let filename = filepath
            .file_stem()
            .map(|n| n.to_string_lossy().to_string());

        manifest
            .defaults
            .set("manifest_filepath", Some(filepath.to_string_lossy().to_string()));
        manifest.defaults.set("manifest_basename", basename);
        manifest.defaults.set("manifest_dirpath", dirpath);
        manifest.defaults.set("manifest_filename", filename);

        Ok(manifest)
    }

    /// Absorb several manifests into one: defaults overlay left to right,
    /// performances and problems concatenate.
    pub fn combine<I>(manifests: I) -> Self
    where
        I: IntoIterator<Item = Manifest>,
    {
        let mut combined = Self::default();
        for manifest in manifests {
            combined.defaults = combined.defaults.overlay(&manifest.defaults);
            combined.performances.extend(manifest.performances);
            combined.problems.extend(manifest.problems);
        }
        combined
    }
}
