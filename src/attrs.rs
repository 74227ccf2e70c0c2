//! Attribute sets: field-to-value mappings for one performance.
//!
//! An [`AttributeSet`] is the unit of metadata in a manifest. The manifest's
//! `defaults` mapping is one, each entry under `performances` is one, and the
//! merged view a performance is rendered from is one. A field value is either
//! null (unset, a valid "not yet known" state) or a string; YAML scalars such
//! as `track_num: 3` are coerced to their string form on load.
//!
//! The schema is extensible, not closed: fields that appear in an override
//! but not in the defaults pass through the overlay unchanged.

use crate::error::MetadataError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    fields: BTreeMap<String, Option<String>>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an attribute set from a parsed YAML mapping.
    ///
    /// Null stays null, string/number/bool scalars become strings, and
    /// anything else (a list, a nested mapping) is a schema error. A
    /// non-mapping document is a schema error too: this is the only way
    /// loading an override can fail.
    pub fn from_yaml(value: &serde_yaml::Value) -> Result<Self, MetadataError> {
        let mapping = value.as_mapping().ok_or_else(|| {
            MetadataError::Schema("expected a mapping of field names to values".to_string())
        })?;

        let mut attrs = Self::new();
        for (key, value) in mapping {
            let name = key.as_str().ok_or_else(|| {
                MetadataError::Schema(format!("field name is not a string: {key:?}"))
            })?;
            let coerced = match value {
                serde_yaml::Value::Null => None,
                serde_yaml::Value::String(s) => Some(s.clone()),
                serde_yaml::Value::Number(n) => Some(n.to_string()),
                serde_yaml::Value::Bool(b) => Some(b.to_string()),
                other => {
                    return Err(MetadataError::Schema(format!(
                        "field '{name}' has a non-scalar value: {other:?}"
                    )));
                }
            };
            attrs.fields.insert(name.to_string(), coerced);
        }
        Ok(attrs)
    }

    /// Set a field. `None` marks the field present but unset.
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        self.fields.insert(name.into(), value);
    }

    /// The field's value, when present and non-null.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_deref())
    }

    /// Whether the field exists at all, null or not.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Whether the field is present with a null value.
    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(None))
    }

    /// Overlay `overrides` on top of this set, producing the merged set.
    ///
    /// Non-null override values win. Fields absent from the overrides, or
    /// present with null, keep this set's value (which may itself be null).
    /// Override fields unknown to this set pass through unchanged. Neither
    /// input is modified.
    pub fn overlay(&self, overrides: &AttributeSet) -> AttributeSet {
        let mut merged = self.clone();
        for (name, value) in &overrides.fields {
            match value {
                Some(v) => {
                    merged.fields.insert(name.clone(), Some(v.clone()));
                }
                None => {
                    merged.fields.entry(name.clone()).or_insert(None);
                }
            }
        }
        merged
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
