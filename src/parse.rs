//! URL-parsing facade.
//!
//! Generic URI syntax splitting is delegated to the `url` crate; this module
//! adds the domain-level decoration on top: subdomain / root domain / TLD
//! via the splitter, the registrable domain, and the path extension.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::Result;
use crate::registry::TldRegistry;
use crate::splitter::DomainSplitter;
use crate::types::DomainParts;

/// Scheme prepended to scheme-less input.
pub const DEFAULT_SCHEME: &str = "http";

/// Hosts that look like registrable ASCII domains (LDH labels, alphabetic
/// final label) get the domain decoration; IP literals, single-label hosts,
/// and raw Unicode hosts do not.
static DOMAIN_SHAPED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}$")
        .expect("DOMAIN_SHAPED: hardcoded regex is invalid")
});

/// A parsed URL decorated with domain-level fields.
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    /// The generic parse; scheme, path, query, and fragment live here.
    pub url: Url,
    /// Hostname without the port (e.g. `sub.example.com`).
    pub domain: String,
    /// Port, when one was given explicitly.
    pub port: Option<u16>,
    /// Subdomain labels (e.g. `sub`), empty when absent.
    pub subdomain: String,
    /// Registrable label (e.g. `example`), empty when the host is not
    /// domain-shaped.
    pub root_domain: String,
    /// Effective TLD (e.g. `com`, `co.uk`), empty when unknown.
    pub tld: String,
    /// Registrable domain (`root_domain.tld`), empty when either part is.
    pub etld_plus_one: String,
    /// Extension of the final path segment including the dot (e.g. `.txt`),
    /// empty when the segment has none.
    pub extension: String,
}

/// Parses raw URLs, defaulting the scheme and decorating the result with
/// domain fields. Immutable once built; safe to share across threads.
#[derive(Debug, Clone)]
pub struct UrlParser {
    default_scheme: String,
    splitter: DomainSplitter,
}

impl UrlParser {
    /// Create a parser over the given registry with the default scheme.
    pub fn new(registry: Arc<TldRegistry>) -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
            splitter: DomainSplitter::new(registry),
        }
    }

    /// Use `scheme` instead of [`DEFAULT_SCHEME`] for scheme-less input.
    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    /// The scheme prepended to scheme-less input.
    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }

    /// Parse `raw` into a decorated URL.
    ///
    /// Syntax errors from the generic parser are propagated, never
    /// swallowed; that includes non-numeric or out-of-range port tokens,
    /// which surface as [`url::ParseError::InvalidPort`].
    pub fn parse(&self, raw: &str) -> Result<ParsedUrl> {
        let prepared = add_default_scheme(raw, &self.default_scheme);
        let url = Url::parse(&prepared)?;

        let domain = url.host_str().unwrap_or_default().to_string();
        let port = url.port();

        let parts = if DOMAIN_SHAPED.is_match(&domain) {
            self.splitter.split(&domain)
        } else {
            DomainParts::default()
        };
        let etld_plus_one = parts.etld_plus_one().unwrap_or_default();
        let extension = path_extension(url.path());

        Ok(ParsedUrl {
            domain,
            port,
            subdomain: parts.subdomain,
            root_domain: parts.root_domain,
            tld: parts.tld,
            etld_plus_one,
            extension,
            url,
        })
    }
}

/// Prepend `scheme` when `raw` carries none, so bare hosts parse as
/// authorities instead of relative paths.
fn add_default_scheme(raw: &str, scheme: &str) -> String {
    if raw.starts_with("//") {
        format!("{scheme}:{raw}")
    } else if raw.starts_with("://") {
        format!("{scheme}{raw}")
    } else if !raw.contains("//") {
        format!("{scheme}://{raw}")
    } else {
        raw.to_string()
    }
}

/// Extension of the final path segment, from its last `.` to the end, dot
/// included. Empty when the final segment has no dot.
fn path_extension(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or_default();
    match segment.rfind('.') {
        Some(index) => segment[index..].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiftError;

    fn parser() -> UrlParser {
        UrlParser::new(Arc::new(TldRegistry::standard()))
    }

    #[test]
    fn test_parse_full_decoration() {
        let parsed = parser()
            .parse("https://sub.example.com:8080/path/to/file.txt")
            .unwrap();
        assert_eq!(parsed.domain, "sub.example.com");
        assert_eq!(parsed.port, Some(8080));
        assert_eq!(parsed.subdomain, "sub");
        assert_eq!(parsed.root_domain, "example");
        assert_eq!(parsed.tld, "com");
        assert_eq!(parsed.etld_plus_one, "example.com");
        assert_eq!(parsed.extension, ".txt");
        assert_eq!(parsed.url.scheme(), "https");
        assert_eq!(parsed.url.path(), "/path/to/file.txt");
    }

    #[test]
    fn test_parse_defaults_scheme_for_bare_host() {
        let parsed = parser().parse("example.com").unwrap();
        assert_eq!(parsed.url.scheme(), "http");
        assert_eq!(parsed.domain, "example.com");
        assert_eq!(parsed.root_domain, "example");
        assert_eq!(parsed.tld, "com");
    }

    #[test]
    fn test_parse_custom_default_scheme() {
        let parser = parser().with_default_scheme("https");
        assert_eq!(parser.default_scheme(), "https");
        let parsed = parser.parse("example.org/docs").unwrap();
        assert_eq!(parsed.url.scheme(), "https");
    }

    #[test]
    fn test_parse_multi_label_tld() {
        let parsed = parser().parse("https://sub.example.co.uk/x").unwrap();
        assert_eq!(parsed.subdomain, "sub");
        assert_eq!(parsed.root_domain, "example");
        assert_eq!(parsed.tld, "co.uk");
        assert_eq!(parsed.etld_plus_one, "example.co.uk");
    }

    #[test]
    fn test_parse_non_domain_hosts_skip_decoration() {
        let parsed = parser().parse("http://localhost:3000/x").unwrap();
        assert_eq!(parsed.domain, "localhost");
        assert_eq!(parsed.port, Some(3000));
        assert_eq!(parsed.root_domain, "");
        assert_eq!(parsed.tld, "");
        assert_eq!(parsed.etld_plus_one, "");

        let parsed = parser().parse("http://192.168.1.1/x").unwrap();
        assert_eq!(parsed.domain, "192.168.1.1");
        assert_eq!(parsed.root_domain, "");
    }

    #[test]
    fn test_parse_propagates_syntax_errors() {
        let err = parser().parse("http://exa mple.com").unwrap_err();
        assert!(matches!(err, SiftError::UrlSyntax(_)));
    }

    #[test]
    fn test_parse_surfaces_invalid_port() {
        let err = parser().parse("http://example.com:port/x").unwrap_err();
        assert!(matches!(
            err,
            SiftError::UrlSyntax(url::ParseError::InvalidPort)
        ));
    }

    #[test]
    fn test_add_default_scheme_cases() {
        assert_eq!(add_default_scheme("example.com", "http"), "http://example.com");
        assert_eq!(add_default_scheme("//example.com", "http"), "http://example.com");
        assert_eq!(add_default_scheme("://example.com", "http"), "http://example.com");
        assert_eq!(
            add_default_scheme("https://example.com", "http"),
            "https://example.com"
        );
    }

    #[test]
    fn test_path_extension() {
        assert_eq!(path_extension("/path/to/file.txt"), ".txt");
        assert_eq!(path_extension("/path/to/archive.tar.gz"), ".gz");
        assert_eq!(path_extension("/path/to/dir/"), "");
        assert_eq!(path_extension("/"), "");
        assert_eq!(path_extension("/no-extension"), "");
    }

    #[test]
    fn test_parse_no_port_and_no_extension() {
        let parsed = parser().parse("https://example.com").unwrap();
        assert_eq!(parsed.port, None);
        assert_eq!(parsed.extension, "");
    }
}
