use std::collections::HashSet;

use log::debug;

use crate::tlds::{PSEUDO_TLDS, TLDS};

/// Immutable registry of known domain suffixes.
///
/// Built once from a sequence of suffix strings: entries are lowercased,
/// deduplicated, and kept in sorted order. After construction the registry
/// is never mutated and is safe for unbounded concurrent reads.
///
/// Membership is exact whole-token membership: `contains("o.uk")` is false
/// even though `co.uk` is registered.
#[derive(Debug, Clone)]
pub struct TldRegistry {
    set: HashSet<String>,
    sorted: Vec<String>,
}

impl TldRegistry {
    /// Build a registry from the given suffix strings.
    ///
    /// Entries are lowercased and stripped of surrounding whitespace and
    /// dots; empty entries and duplicates are dropped.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        let mut sorted = Vec::new();

        for suffix in suffixes {
            let suffix = suffix.as_ref().trim().trim_matches('.').to_lowercase();
            if suffix.is_empty() {
                continue;
            }
            if set.insert(suffix.clone()) {
                sorted.push(suffix);
            }
        }

        sorted.sort();

        debug!("TLD registry built: {} suffixes", sorted.len());

        Self { set, sorted }
    }

    /// The bundled registry: known TLDs, public suffixes, and pseudo-TLDs.
    pub fn standard() -> Self {
        Self::new(TLDS.iter().chain(PSEUDO_TLDS))
    }

    /// The bundled registry extended with extra suffixes.
    pub fn with_custom<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            TLDS.iter()
                .chain(PSEUDO_TLDS)
                .map(|s| s.to_string())
                .chain(extra.into_iter().map(|s| s.as_ref().to_string())),
        )
    }

    /// A new registry holding this registry's suffixes plus `extra`.
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            self.sorted
                .iter()
                .map(|s| s.to_string())
                .chain(extra.into_iter().map(|s| s.as_ref().to_string())),
        )
    }

    /// Exact whole-token membership.
    /// Assumes `token` is already lowercased (as the splitter guarantees).
    pub fn contains(&self, token: &str) -> bool {
        self.set.contains(token)
    }

    /// Iterate over all suffixes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sorted.iter().map(String::as_str)
    }

    /// Iterate over the ASCII suffixes (plain and punycode) in sorted order.
    pub fn ascii_suffixes(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|s| s.is_ascii())
    }

    /// Iterate over the non-ASCII (Unicode) suffixes in sorted order.
    pub fn unicode_suffixes(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|s| !s.is_ascii())
    }

    /// Number of distinct suffixes.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

impl Default for TldRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
