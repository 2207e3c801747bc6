use serde::{Deserialize, Serialize};

/// Extraction strictness level.
///
/// Levels are totally ordered and the set of spans a compiled matcher can
/// produce grows monotonically along that order: everything `SchemeOnly`
/// matches is matched by `SchemeOrHost`, and everything `SchemeOrHost`
/// matches is matched by `Any`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Strictness {
    /// Only spans with an explicit scheme prefix (`https://…`, `mailto:…`).
    SchemeOnly,
    /// Scheme-prefixed spans plus bare hosts (domains, IP literals) with an
    /// optional port and path.
    SchemeOrHost,
    /// Everything above plus email addresses and bare relative paths.
    #[default]
    Any,
}

/// The split parts of a dot-labelled host.
///
/// Any field may be empty; joining the non-empty fields with `.` in order
/// reconstructs the cleaned (lowercased, trailing-dot-stripped) input host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParts {
    /// Labels left of the root domain (e.g. `www` in `www.example.com`).
    pub subdomain: String,
    /// The registrable label (e.g. `example` in `www.example.com`).
    pub root_domain: String,
    /// The effective TLD, possibly multi-label (e.g. `co.uk`).
    pub tld: String,
}

impl DomainParts {
    /// The registrable domain (`root_domain.tld`), or `None` when either
    /// part is absent.
    pub fn etld_plus_one(&self) -> Option<String> {
        if self.root_domain.is_empty() || self.tld.is_empty() {
            return None;
        }
        Some(format!("{}.{}", self.root_domain, self.tld))
    }

    /// Rejoin the non-empty parts into the cleaned host they came from.
    pub fn to_host(&self) -> String {
        let mut host = String::new();
        for part in [&self.subdomain, &self.root_domain, &self.tld] {
            if part.is_empty() {
                continue;
            }
            if !host.is_empty() {
                host.push('.');
            }
            host.push_str(part);
        }
        host
    }
}

/// Immutable matcher configuration.
///
/// A plain value record: two matchers built from equal configurations are
/// behaviorally identical, so the record doubles as the memo-cache key
/// (`Clone + Eq + Hash`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExtractorConfig {
    /// Restrict the scheme-prefixed form to exactly these schemes
    /// (all matched as `scheme://`). `None` uses the bundled scheme lists.
    pub schemes: Option<Vec<String>>,
    /// Replace the host alternation (in both the host-anchored and email
    /// forms) with exactly these hosts. `None` uses the registry-driven
    /// domain grammar plus IP literals.
    pub hosts: Option<Vec<String>>,
    /// Extra suffixes unioned into the TLD registry at compile time.
    pub custom_tlds: Option<Vec<String>>,
    /// Which match forms are enabled.
    pub strictness: Strictness,
}

impl ExtractorConfig {
    /// Create a configuration with the given strictness and no overrides.
    pub fn new(strictness: Strictness) -> Self {
        Self {
            strictness,
            ..Self::default()
        }
    }

    /// Restrict matching to the given schemes.
    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes = Some(schemes.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict matching to the given hosts.
    pub fn with_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hosts = Some(hosts.into_iter().map(Into::into).collect());
        self
    }

    /// Union extra suffixes into the TLD registry used by the matcher.
    pub fn with_custom_tlds<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_tlds = Some(tlds.into_iter().map(Into::into).collect());
        self
    }
}
