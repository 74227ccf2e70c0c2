//! A performance: one recording to be tagged and organized.
//!
//! A [`Performance`] owns the merged attribute view produced by overlaying a
//! manifest entry on the combined defaults. The defaults stay shared and
//! read-only; every performance gets its own copy, which is also where
//! derived `_safe` values are cached. That per-item ownership is what makes
//! fanning out over many performances safe without any locking.

use crate::attrs::AttributeSet;
use crate::constants::{CRITICAL_FIELDS, FORMATTABLE_FIELDS, SAFE_SUFFIX, STATIC_FIELDS};
use crate::error::MetadataError;
use crate::render;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Performance {
    attrs: AttributeSet,
}

impl Performance {
    /// Overlay one manifest entry on the shared defaults.
    pub fn from_defaults(defaults: &AttributeSet, overrides: &AttributeSet) -> Self {
        Self {
            attrs: defaults.overlay(overrides),
        }
    }

    pub fn attrs(&self) -> &AttributeSet {
        &self.attrs
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    pub fn track_num(&self) -> Option<u32> {
        self.attrs.get("track_num").and_then(|v| v.parse().ok())
    }

    /// Give the performance its position-based track number, unless the
    /// manifest already set one.
    pub fn assign_track_num(&mut self, number: u32) {
        if self.attrs.get("track_num").is_none() {
            self.attrs.set("track_num", Some(number.to_string()));
        }
    }

    /// Fill `year` from a parseable `date`, unless the manifest already set
    /// one.
    pub fn fill_year_from_date(&mut self) {
        if self.attrs.get("year").is_some() {
            return;
        }
        if let Some(date) = self.attrs.get("date")
            && let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        {
            let year = parsed.format("%Y").to_string();
            self.attrs.set("year", Some(year));
        }
    }

    /// Render the named formattable field against this performance's
    /// attributes, caching any `_safe` derivations for later renders.
    pub fn render_field(&mut self, name: &str) -> Result<String, MetadataError> {
        let template = match self.attrs.get(name) {
            Some(t) => t.to_string(),
            None if self.attrs.contains(name) => {
                return Err(MetadataError::NullField(name.to_string()));
            }
            None => return Err(MetadataError::MissingField(name.to_string())),
        };
        render::render(&template, &mut self.attrs)
    }

    pub fn long_title(&mut self) -> Result<String, MetadataError> {
        self.render_field("long_title")
    }

    pub fn output_dirpath(&mut self) -> Result<String, MetadataError> {
        self.render_field("output_dirpath")
    }

    pub fn video_filename(&mut self) -> Result<String, MetadataError> {
        self.render_field("video_filename")
    }

    pub fn audio_filename(&mut self) -> Result<String, MetadataError> {
        self.render_field("audio_filename")
    }

    /// Everything a human must fix before this performance can be organized:
    /// unset critical fields, an unparseable date, a year that contradicts
    /// the date, and templates that fail to render.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for &field in CRITICAL_FIELDS {
            if self.attrs.get(field).is_none() {
                problems.push(format!("missing {field}"));
            }
        }

        if let Some(date) = self.attrs.get("date") {
            match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                Err(_) => problems.push(format!("date '{date}' is not YYYY-MM-DD")),
                Ok(parsed) => {
                    if let Some(year) = self.attrs.get("year")
                        && year != parsed.format("%Y").to_string()
                    {
                        problems.push(format!("year '{year}' does not match date '{date}'"));
                    }
                }
            }
        }

        for &field in FORMATTABLE_FIELDS {
            if let Some(template) = self.attrs.get(field) {
                let mut scratch = self.attrs.clone();
                if let Err(e) = render::render(template, &mut scratch) {
                    problems.push(format!("{field}: {e}"));
                }
            } else {
                problems.push(format!("missing {field}"));
            }
        }

        problems
    }

    /// Multi-line summary of the resolved attributes and rendered output
    /// names, for the `show` command. Render failures are shown inline;
    /// they also surface through `problems()`.
    pub fn verbose(&mut self) -> String {
        let mut lines = vec![self.to_string()];

        // critical fields first, then the rarely-overridden ones, then
        // whatever extra fields the manifest carried
        let mut seen: Vec<&str> = Vec::new();
        for &field in CRITICAL_FIELDS.iter().chain(STATIC_FIELDS.iter()) {
            seen.push(field);
            if !self.attrs.contains(field) {
                continue;
            }
            match self.attrs.get(field) {
                Some(v) => lines.push(format!("  {field}: {v}")),
                None => lines.push(format!("  {field}: (unset)")),
            }
        }
        let extras: Vec<(String, Option<String>)> = self
            .attrs
            .iter()
            .filter(|(name, _)| {
                !FORMATTABLE_FIELDS.contains(name)
                    && !seen.contains(name)
                    && !name.ends_with(SAFE_SUFFIX)
            })
            .map(|(name, value)| (name.to_string(), value.map(|v| v.to_string())))
            .collect();
        for (name, value) in extras {
            match value {
                Some(v) => lines.push(format!("  {name}: {v}")),
                None => lines.push(format!("  {name}: (unset)")),
            }
        }

        for &field in FORMATTABLE_FIELDS {
            match self.render_field(field) {
                Ok(rendered) => lines.push(format!("  {field}: {rendered}")),
                Err(e) => lines.push(format!("  {field}: !! {e}")),
            }
        }

        lines.join("\n")
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.attrs.get("artist"), self.attrs.get("title")) {
            (Some(artist), Some(title)) => write!(f, "{artist} - {title}"),
            (Some(artist), None) => write!(f, "{artist}"),
            (None, Some(title)) => write!(f, "{title}"),
            (None, None) => match self.attrs.get("filepath") {
                Some(filepath) => write!(f, "{filepath}"),
                None => write!(f, "(untitled performance)"),
            },
        }
    }
}

/// Build one performance per entry, then apply the positional fixups:
/// 1-based track numbers for entries that did not set one, and years
/// derived from parseable dates.
pub fn resolve_all(defaults: &AttributeSet, entries: &[AttributeSet]) -> Vec<Performance> {
    let mut performances: Vec<Performance> = entries
        .iter()
        .map(|entry| Performance::from_defaults(defaults, entry))
        .collect();

    for (index, performance) in performances.iter_mut().enumerate() {
        performance.assign_track_num(index as u32 + 1);
        performance.fill_year_from_date();
    }

    performances
}
