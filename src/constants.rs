//! Project-wide constants used across multiple modules.
//!
//! This module centralizes constant definitions to avoid duplication and ensure
//! consistency across the codebase.

/// Top-level manifest key holding the shared attribute defaults
pub const DEFAULTS_KEY: &str = "defaults";

/// Top-level manifest key holding the per-performance override entries
pub const PERFORMANCES_KEY: &str = "performances";

/// Fields that must be filled in (directly or via defaults) before a
/// performance's output names can be trusted
pub const CRITICAL_FIELDS: &[&str] = &[
    "track_num",
    "filepath",
    "title",
    "artist",
    "album",
    "genre",
    "cover",
    "date",
    "year",
];

/// Defaulted fields that are rarely overridden per performance
pub const STATIC_FIELDS: &[&str] = &["start", "stop", "recording", "resolution", "bitrate"];

/// Fields whose values are `{field}` templates, rendered per performance
pub const FORMATTABLE_FIELDS: &[&str] = &[
    "long_title",
    "output_dirpath",
    "video_filename",
    "audio_filename",
];

/// Suffix marking the derived filesystem-safe variant of a base field
pub const SAFE_SUFFIX: &str = "_safe";

/// Spinner animation characters for progress indicators
pub const SPINNER_CHARS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
