use std::sync::Arc;

use crate::registry::TldRegistry;
use crate::types::DomainParts;

/// Splits dot-labelled hosts at the effective-TLD boundary.
///
/// The splitter is a total function over host strings: it always returns a
/// (possibly degenerate) [`DomainParts`] triple and never fails. It holds an
/// immutable registry and is safe to share and call concurrently.
#[derive(Debug, Clone)]
pub struct DomainSplitter {
    registry: Arc<TldRegistry>,
}

impl DomainSplitter {
    /// Create a splitter over the given registry.
    pub fn new(registry: Arc<TldRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this splitter queries.
    pub fn registry(&self) -> &TldRegistry {
        &self.registry
    }

    /// Split `host` into subdomain, root domain, and effective TLD.
    ///
    /// The host is cleaned (ASCII-lowercased, one trailing dot stripped) and
    /// split on `.`. The longest registered suffix is found by scanning
    /// right-aligned candidates leftward: `uk`, then `co.uk`, then
    /// `example.co.uk`, stopping at the first candidate the registry does
    /// not contain. The root domain is the label just left of the longest
    /// match.
    ///
    /// Degenerate cases:
    /// - single-label host: `{"", host, ""}`, so `localhost` stays whole;
    /// - no registered suffix at all: `{"", host, ""}`;
    /// - the host *is* a registered suffix: `{"", "", host}`.
    pub fn split(&self, host: &str) -> DomainParts {
        let host = clean_host(host);
        let labels: Vec<&str> = host.split('.').collect();

        if labels.len() <= 1 {
            return DomainParts {
                subdomain: String::new(),
                root_domain: host,
                tld: String::new(),
            };
        }

        match self.longest_suffix_start(&labels) {
            // No candidate matched, not even the final label: the whole
            // host is the root domain.
            None => DomainParts {
                subdomain: String::new(),
                root_domain: host,
                tld: String::new(),
            },
            // The entire host is itself a registered suffix.
            Some(0) => DomainParts {
                subdomain: String::new(),
                root_domain: String::new(),
                tld: host,
            },
            Some(suffix_start) => {
                let root_index = suffix_start - 1;
                DomainParts {
                    subdomain: labels[..root_index].join("."),
                    root_domain: labels[root_index].to_string(),
                    tld: labels[suffix_start..].join("."),
                }
            }
        }
    }

    /// Index of the leftmost label of the longest registered suffix, or
    /// `None` when no right-aligned candidate is registered.
    ///
    /// Candidates are extended greedily leftward, so multi-label suffixes
    /// (`co.uk`, `com.au`) win over their final label alone.
    fn longest_suffix_start(&self, labels: &[&str]) -> Option<usize> {
        let mut matched = None;

        for start in (0..labels.len()).rev() {
            let candidate = labels[start..].join(".");
            if !self.registry.contains(&candidate) {
                break;
            }
            matched = Some(start);
        }

        matched
    }
}

/// Lowercase the host and strip a single trailing dot (FQDN form).
fn clean_host(host: &str) -> String {
    let host = host.strip_suffix('.').unwrap_or(host);
    host.to_lowercase()
}
