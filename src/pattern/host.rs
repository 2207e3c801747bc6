//! Domain-name grammar assembled from the TLD registry.

use once_cell::sync::Lazy;

use super::any_of;
use crate::error::{Result, SiftError};
use crate::registry::TldRegistry;

/// A single IRI host label: letters, marks, or digits with interior hyphens.
pub const IRI_LABEL: &str = r"[\p{L}\p{M}\p{N}](?:[\p{L}\p{M}\p{N}\-]*[\p{L}\p{M}\p{N}])?";

/// One or more dot-terminated labels left of the TLD.
pub static SUBDOMAIN_PART: Lazy<String> = Lazy::new(|| format!(r"(?:{IRI_LABEL}\.)+"));

/// Punycode TLD shape (`xn--…`), matched structurally rather than from the
/// registry so freshly delegated punycode TLDs still extract.
pub const PUNYCODE_TLD: &str = "xn--[a-z0-9-]+";

/// Build the known-TLD alternation for the given registry.
///
/// ASCII suffixes are word-boundary-terminated. Unicode suffixes are not:
/// their scripts have no universal word-boundary concept, so membership in
/// the registry is the only terminator and a match may absorb adjoining
/// Unicode text. Suffixes are emitted longest-first so a multi-label suffix
/// beats its own tail inside the alternation.
///
/// Fails when the registry contributes no alternatives at all.
pub fn tld_pattern(registry: &TldRegistry) -> Result<String> {
    let mut ascii: Vec<&str> = registry.ascii_suffixes().collect();
    let mut unicode: Vec<&str> = registry.unicode_suffixes().collect();

    if ascii.is_empty() && unicode.is_empty() {
        return Err(SiftError::InvalidConfig(
            "TLD registry contributes no suffix alternatives".into(),
        ));
    }

    let longest_first = |a: &&str, b: &&str| b.len().cmp(&a.len()).then(a.cmp(b));
    ascii.sort_by(longest_first);
    unicode.sort_by(longest_first);

    let mut alternatives = vec![PUNYCODE_TLD.to_string()];
    if !ascii.is_empty() {
        alternatives.push(format!(r"{}\b", any_of(ascii)));
    }
    if !unicode.is_empty() {
        alternatives.push(any_of(unicode));
    }

    Ok(format!("(?:(?i){})", alternatives.join("|")))
}

/// Domain literal: one or more labels followed by a known TLD.
pub fn domain_pattern(registry: &TldRegistry) -> Result<String> {
    Ok(format!("{}{}", &*SUBDOMAIN_PART, tld_pattern(registry)?))
}
