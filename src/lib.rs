//! Linksift - URL extraction and domain parsing for Rust
//!
//! This library provides public-suffix aware host handling and free-text
//! link mining with support for:
//! - Domain splitting (subdomain / root domain / effective TLD, including
//!   multi-label suffixes like `co.uk`)
//! - A bundled, extensible TLD registry (ASCII, punycode, Unicode, and
//!   pseudo suffixes)
//! - URL, email, and IP-literal span extraction under configurable
//!   strictness, with leftmost-longest matching
//! - A memoizing matcher cache (one compile per configuration)
//! - URL parsing with domain decoration on top of the `url` crate
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use linksift::{DomainSplitter, ExtractorConfig, MatcherCache, Strictness, TldRegistry};
//!
//! let registry = Arc::new(TldRegistry::standard());
//!
//! // Split a host at the public-suffix boundary.
//! let splitter = DomainSplitter::new(Arc::clone(&registry));
//! let parts = splitter.split("sub.example.co.uk");
//! assert_eq!(parts.subdomain, "sub");
//! assert_eq!(parts.root_domain, "example");
//! assert_eq!(parts.tld, "co.uk");
//!
//! // Mine links out of free text.
//! let cache = MatcherCache::new(Arc::clone(&registry));
//! let matcher = cache
//!     .get(&ExtractorConfig::new(Strictness::SchemeOrHost))
//!     .unwrap();
//!
//! let text = "docs at https://example.com/guide and www.rust-lang.org.";
//! let found: Vec<&str> = matcher.find_iter(text).map(|span| span.as_str()).collect();
//! assert_eq!(found, ["https://example.com/guide", "www.rust-lang.org"]);
//! ```
//!
//! # Strictness
//!
//! | Level | Matches |
//! |-------|---------|
//! | `SchemeOnly` | `scheme://…` and `scheme:…` forms only |
//! | `SchemeOrHost` | the above plus bare hosts and IP literals |
//! | `Any` | the above plus emails and bare relative paths |
//!
//! Levels are ordered and the match forms grow monotonically along the
//! order.

pub mod compile;
pub mod error;
pub mod extract;
pub mod parse;
pub mod pattern;
pub mod registry;
pub mod schemes;
pub mod splitter;
pub mod tlds;
pub mod types;

// Re-export commonly used items
pub use compile::{compile, CompiledMatcher, MatcherCache, DEFAULT_MATCHER_CACHE_SIZE};
pub use error::{Result, SiftError};
pub use extract::{Matches, Span};
pub use parse::{ParsedUrl, UrlParser, DEFAULT_SCHEME};
pub use registry::TldRegistry;
pub use splitter::DomainSplitter;
pub use types::{DomainParts, ExtractorConfig, Strictness};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_full_workflow() {
        let registry = Arc::new(TldRegistry::standard());

        // Split hosts.
        let splitter = DomainSplitter::new(Arc::clone(&registry));
        let parts = splitter.split("www.example.com");
        assert_eq!(parts.subdomain, "www");
        assert_eq!(parts.root_domain, "example");
        assert_eq!(parts.tld, "com");

        // Extract spans from text through the cache.
        let cache = MatcherCache::new(Arc::clone(&registry));
        let matcher = cache
            .get(&ExtractorConfig::new(Strictness::SchemeOrHost))
            .unwrap();

        let text = "Fetch https://api.example.co.uk/v1/items then mirror to 192.168.1.1:8080.";
        let found: Vec<&str> = matcher.find_iter(text).map(|span| span.as_str()).collect();
        assert_eq!(
            found,
            ["https://api.example.co.uk/v1/items", "192.168.1.1:8080"]
        );

        // Decorate a full URL.
        let parsed = UrlParser::new(Arc::clone(&registry))
            .parse("https://sub.example.co.uk:8443/reports/q3.pdf")
            .unwrap();
        assert_eq!(parsed.etld_plus_one, "example.co.uk");
        assert_eq!(parsed.subdomain, "sub");
        assert_eq!(parsed.port, Some(8443));
        assert_eq!(parsed.extension, ".pdf");
    }

    #[test]
    fn test_extension_workflow_with_custom_registry() {
        // A fresh registry extended with an internal suffix splits internal
        // hosts while built-in behavior stays intact.
        let registry = Arc::new(TldRegistry::with_custom(["corp"]));
        let splitter = DomainSplitter::new(registry);

        let parts = splitter.split("db01.storage.corp");
        assert_eq!(parts.subdomain, "db01");
        assert_eq!(parts.root_domain, "storage");
        assert_eq!(parts.tld, "corp");

        let parts = splitter.split("www.example.com");
        assert_eq!(parts.root_domain, "example");
    }
}
