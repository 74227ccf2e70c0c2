//! `{field}` template rendering against an attribute set.
//!
//! Rendering is a single left-to-right pass. Each `{name}` placeholder is
//! replaced by the named field's value; a `_safe` placeholder whose field is
//! absent is derived on demand from its base field and cached back into the
//! attribute set, so later placeholders (and later templates for the same
//! performance) reuse the derived value.
//!
//! Resolution is single-level: a value that itself contains `{..}` tokens is
//! inserted verbatim, never expanded again. Templates reference fields, not
//! other templates.

use crate::attrs::AttributeSet;
use crate::error::MetadataError;
use crate::sanitize;

/// Render `template` against `attrs`.
///
/// The only mutation is caching derived `_safe` entries; static fields are
/// never touched. Errors out on the first unresolvable placeholder rather
/// than leaving a blank in an output filename.
pub fn render(template: &str, attrs: &mut AttributeSet) -> Result<String, MetadataError> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        if rest.as_bytes()[pos] == b'}' {
            return Err(MetadataError::TemplateSyntax(format!(
                "stray '}}' in template '{template}'"
            )));
        }
        let after = &rest[pos + 1..];
        let Some(end) = after.find('}') else {
            return Err(MetadataError::TemplateSyntax(format!(
                "unclosed '{{' in template '{template}'"
            )));
        };
        let name = &after[..end];
        if name.is_empty() || name.contains('{') {
            return Err(MetadataError::TemplateSyntax(format!(
                "malformed placeholder in template '{template}'"
            )));
        }
        out.push_str(&resolve_placeholder(name, attrs)?);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Look up one placeholder, deriving and caching `_safe` variants on demand.
fn resolve_placeholder(name: &str, attrs: &mut AttributeSet) -> Result<String, MetadataError> {
    if attrs.contains(name) {
        return match attrs.get(name) {
            Some(value) => Ok(value.to_string()),
            None => Err(MetadataError::NullField(name.to_string())),
        };
    }

    if let Some(base) = sanitize::base_field(name)
        && attrs.contains(base)
    {
        let Some(base_value) = attrs.get(base) else {
            // the base exists but is unset, so there is nothing to derive
            return Err(MetadataError::NullField(base.to_string()));
        };
        let derived = sanitize::safe_component(base_value);
        attrs.set(name, Some(derived.clone()));
        return Ok(derived);
    }

    Err(MetadataError::MissingField(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, Option<&str>)]) -> AttributeSet {
        let mut set = AttributeSet::new();
        for (name, value) in pairs {
            set.set(*name, value.map(|v| v.to_string()));
        }
        set
    }

    #[test]
    fn test_renders_literal_text() {
        let mut a = attrs(&[]);
        assert_eq!(render("no placeholders here", &mut a).unwrap(), "no placeholders here");
    }

    #[test]
    fn test_renders_fields() {
        let mut a = attrs(&[("artist", Some("Night Tales")), ("date", Some("2023-10-13"))]);
        let out = render("{artist} live on {date}", &mut a).unwrap();
        assert_eq!(out, "Night Tales live on 2023-10-13");
    }

    #[test]
    fn test_derives_safe_variant_on_demand() {
        let mut a = attrs(&[("artist", Some("Night/Tales")), ("date", Some("2023-10-13"))]);
        let out = render("{artist_safe}/{date}", &mut a).unwrap();
        assert_eq!(out, "Night-Tales/2023-10-13");
        // the derivation is cached into the attribute set
        assert_eq!(a.get("artist_safe"), Some("Night-Tales"));
    }

    #[test]
    fn test_cached_safe_variant_is_reused() {
        let mut a = attrs(&[("artist", Some("Night/Tales"))]);
        let first = render("{artist_safe}", &mut a).unwrap();
        // overwrite the base; the cached derivation still wins
        a.set("artist", Some("Someone Else".to_string()));
        let second = render("{artist_safe}", &mut a).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_explicit_safe_field_wins_over_derivation() {
        let mut a = attrs(&[
            ("artist", Some("Night/Tales")),
            ("artist_safe", Some("NT")),
        ]);
        assert_eq!(render("{artist_safe}", &mut a).unwrap(), "NT");
    }

    #[test]
    fn test_null_field_is_an_error() {
        let mut a = attrs(&[("title", None)]);
        let err = render("{title}", &mut a).unwrap_err();
        assert_eq!(err, MetadataError::NullField("title".to_string()));
    }

    #[test]
    fn test_null_base_for_safe_variant_is_an_error() {
        let mut a = attrs(&[("artist", None)]);
        let err = render("{artist_safe}", &mut a).unwrap_err();
        assert_eq!(err, MetadataError::NullField("artist".to_string()));
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let mut a = attrs(&[]);
        let err = render("{unknown_field}", &mut a).unwrap_err();
        assert_eq!(err, MetadataError::MissingField("unknown_field".to_string()));
    }

    #[test]
    fn test_unknown_safe_base_is_an_error() {
        let mut a = attrs(&[("artist", Some("Night Tales"))]);
        let err = render("{venue_safe}", &mut a).unwrap_err();
        assert_eq!(err, MetadataError::MissingField("venue_safe".to_string()));
    }

    #[test]
    fn test_template_valued_field_is_inserted_verbatim() {
        // single-level resolution: no recursive expansion
        let mut a = attrs(&[
            ("long_title", Some("{artist} - {album}")),
            ("artist", Some("Night Tales")),
            ("album", Some("Breakaway Festival")),
        ]);
        let out = render("{long_title}.mp4", &mut a).unwrap();
        assert_eq!(out, "{artist} - {album}.mp4");
    }

    #[test]
    fn test_stray_closing_brace() {
        let mut a = attrs(&[]);
        let err = render("oops}", &mut a).unwrap_err();
        assert!(matches!(err, MetadataError::TemplateSyntax(_)));
    }

    #[test]
    fn test_unclosed_placeholder() {
        let mut a = attrs(&[("artist", Some("x"))]);
        let err = render("{artist", &mut a).unwrap_err();
        assert!(matches!(err, MetadataError::TemplateSyntax(_)));
    }

    #[test]
    fn test_empty_placeholder() {
        let mut a = attrs(&[]);
        let err = render("{}", &mut a).unwrap_err();
        assert!(matches!(err, MetadataError::TemplateSyntax(_)));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut a = attrs(&[("artist", Some("Night/Tales")), ("title", Some("Set One"))]);
        let mut b = a.clone();
        let out_a = render("{artist_safe} - {title_safe}", &mut a).unwrap();
        let out_b = render("{artist_safe} - {title_safe}", &mut b).unwrap();
        assert_eq!(out_a, out_b);
    }
}
