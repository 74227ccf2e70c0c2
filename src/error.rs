//! Error types for manifest parsing and template rendering.
//!
//! Metadata errors are deterministic data errors: they mean the manifest is
//! wrong, not that something transient failed. They are surfaced to the
//! caller immediately so a human can correct the YAML, never swallowed into
//! an empty string or a half-rendered filename.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The document, or one of its entries, does not have the mapping shape
    /// the manifest format requires.
    #[error("schema error: {0}")]
    Schema(String),

    /// A template referenced a field that is not present in the attribute
    /// set and is not a derivable `_safe` variant.
    #[error("template references unknown field '{0}'")]
    MissingField(String),

    /// A template referenced a field whose value is null.
    #[error("template references field '{0}' which has no value")]
    NullField(String),

    /// A stray, unclosed, or empty `{..}` placeholder.
    #[error("template syntax error: {0}")]
    TemplateSyntax(String),
}
