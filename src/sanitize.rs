//! Filesystem-safe name derivation.
//!
//! Templates may reference a `_safe` variant of any field (`{artist_safe}`)
//! when the value is going to become part of a file or directory name. The
//! derivation is a single total function over a fixed substitution table so
//! every call site agrees on what "safe" means:
//!
//! | input                          | output         |
//! |--------------------------------|----------------|
//! | `/` `\` `:`                    | `-`            |
//! | `*` `?` `"` `<` `>` `\|`       | removed        |
//! | ASCII control characters       | removed        |
//! | run of whitespace              | single `_`     |
//! | leading/trailing whitespace    | trimmed        |
//! | trailing `.`                   | trimmed        |
//! | empty result                   | `unknown`      |

use crate::constants::SAFE_SUFFIX;

/// Derive a filesystem-safe component from an arbitrary field value.
///
/// Total and pure: never fails, and the same input always yields the same
/// output. `Night/Tales` becomes `Night-Tales`, `Breakaway Festival`
/// becomes `Breakaway_Festival`.
pub fn safe_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_sep = false;

    for ch in value.trim().chars() {
        if ch.is_whitespace() {
            pending_sep = true;
            continue;
        }
        let mapped = match ch {
            '/' | '\\' | ':' => '-',
            '*' | '?' | '"' | '<' | '>' | '|' => continue,
            c if (c as u32) < 0x20 => continue,
            c => c,
        };
        if pending_sep {
            out.push('_');
            pending_sep = false;
        }
        out.push(mapped);
    }

    let out = out.trim_end_matches('.');
    if out.is_empty() {
        "unknown".to_string()
    } else {
        out.to_string()
    }
}

/// The base field a `_safe` placeholder derives from, if the name has the
/// derivation suffix. `artist_safe` maps to `artist`; a bare `_safe` has no
/// base and maps to nothing.
pub fn base_field(name: &str) -> Option<&str> {
    name.strip_suffix(SAFE_SUFFIX).filter(|base| !base.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_separators_become_hyphens() {
        assert_eq!(safe_component("Night/Tales"), "Night-Tales");
        assert_eq!(safe_component("a\\b"), "a-b");
        assert_eq!(safe_component("12:30"), "12-30");
    }

    #[test]
    fn test_reserved_characters_removed() {
        assert_eq!(safe_component("what?"), "what");
        assert_eq!(safe_component("\"quoted\""), "quoted");
        assert_eq!(safe_component("a*b<c>d|e"), "abcde");
    }

    #[test]
    fn test_whitespace_collapses_to_underscore() {
        assert_eq!(safe_component("Breakaway Festival"), "Breakaway_Festival");
        assert_eq!(safe_component("a \t  b"), "a_b");
        assert_eq!(safe_component("  padded  "), "padded");
    }

    #[test]
    fn test_whitespace_around_removed_characters() {
        // the removed character must not eat the separator
        assert_eq!(safe_component("a ? b"), "a_b");
    }

    #[test]
    fn test_control_characters_removed() {
        assert_eq!(safe_component("a\u{0007}b"), "ab");
    }

    #[test]
    fn test_trailing_dots_trimmed() {
        assert_eq!(safe_component("encore..."), "encore");
    }

    #[test]
    fn test_empty_becomes_unknown() {
        assert_eq!(safe_component(""), "unknown");
        assert_eq!(safe_component("   "), "unknown");
        assert_eq!(safe_component("???"), "unknown");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a = safe_component("Night/Tales & Friends");
        let b = safe_component("Night/Tales & Friends");
        assert_eq!(a, b);
    }

    #[test]
    fn test_base_field() {
        assert_eq!(base_field("artist_safe"), Some("artist"));
        assert_eq!(base_field("long_title_safe"), Some("long_title"));
        assert_eq!(base_field("artist"), None);
        assert_eq!(base_field("_safe"), None);
    }
}
