use std::num::NonZeroUsize;
use std::sync::Arc;

use log::debug;
use lru::LruCache;
use parking_lot::Mutex;
use regex::Regex;

use crate::error::{Result, SiftError};
use crate::extract::{Matches, Span};
use crate::pattern::{
    any_of, domain_pattern, IPV4_ADDR, IPV6_ADDR, IPV6_ADDR_NON_EMPTY, PATH_CONT, PORT,
};
use crate::registry::TldRegistry;
use crate::schemes::{SCHEMES, SCHEMES_NO_AUTHORITY, SCHEMES_UNOFFICIAL};
use crate::types::{ExtractorConfig, Strictness};

/// Local-part characters permitted in the email form.
const EMAIL_LOCAL_PART: &str = r"[a-zA-Z0-9._%+\-]+";

/// Bare absolute path, or a multi-segment relative path with no host.
const RELATIVE_PATH: &str = r"/[\w/?=&#.\-]*|[\w/?=&#.\-]+?(?:/[\w/?=&#.\-]+)+";

/// A compiled text matcher.
///
/// Holds one compiled expression per enabled match form. The scanner treats
/// the forms as alternatives of a single pattern with leftmost-longest
/// semantics: the earliest-starting match wins, and among forms tied on the
/// start position the one consuming the most characters wins.
///
/// A matcher is a pure function of its configuration and registry: equal
/// inputs compile to behaviorally identical matchers, so instances are safe
/// to cache and share (see [`MatcherCache`]).
pub struct CompiledMatcher {
    forms: Vec<Regex>,
    prefer_longest: bool,
    strictness: Strictness,
}

impl CompiledMatcher {
    /// The strictness this matcher was compiled with.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Whether ties on the start position prefer the longer match.
    pub fn prefer_longest(&self) -> bool {
        self.prefer_longest
    }

    /// Resolve start-position ties by form order instead of match length.
    pub fn with_prefer_longest(mut self, prefer_longest: bool) -> Self {
        self.prefer_longest = prefer_longest;
        self
    }

    /// Iterate over all non-overlapping matches in `text`, left to right.
    pub fn find_iter<'m, 't>(&'m self, text: &'t str) -> Matches<'m, 't> {
        Matches::new(self, text)
    }

    /// The first match in `text`, if any.
    pub fn find<'t>(&self, text: &'t str) -> Option<Span<'t>> {
        self.find_iter(text).next()
    }

    pub(crate) fn forms(&self) -> &[Regex] {
        &self.forms
    }
}

/// Compile a matcher for the given configuration against the given registry.
///
/// Pure construction: no side effects, no shared state. Structurally invalid
/// configuration (an empty override list, a registry contributing no TLD
/// alternatives, or a composed expression the regex engine rejects) aborts
/// compilation with an error; it is never silently degraded.
pub fn compile(config: &ExtractorConfig, registry: &TldRegistry) -> Result<CompiledMatcher> {
    validate_override("scheme", config.schemes.as_deref())?;
    validate_override("host", config.hosts.as_deref())?;
    validate_override("custom TLD", config.custom_tlds.as_deref())?;

    let extended;
    let registry = match &config.custom_tlds {
        Some(extra) => {
            extended = registry.extended(extra);
            &extended
        }
        None => registry,
    };

    let mut sources = vec![scheme_form(config)];

    if config.strictness >= Strictness::SchemeOrHost {
        let domain = domain_pattern(registry)?;
        sources.push(host_form(config, &domain));

        if config.strictness >= Strictness::Any {
            sources.push(email_form(config, &domain));
            sources.push(RELATIVE_PATH.to_string());
        }
    }

    let forms = sources
        .iter()
        .map(|source| Regex::new(source))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    debug!(
        "compiled matcher: strictness={:?}, {} forms",
        config.strictness,
        forms.len()
    );

    Ok(CompiledMatcher {
        forms,
        prefer_longest: true,
        strictness: config.strictness,
    })
}

/// Scheme-prefixed form: `scheme://` (authority schemes) or `scheme:`
/// (no-authority schemes), case-insensitive, followed by a path.
fn scheme_form(config: &ExtractorConfig) -> String {
    match &config.schemes {
        Some(schemes) => format!("(?:(?i){}://){}", any_of(schemes), &*PATH_CONT),
        None => format!(
            "(?:(?i)(?:{}|{})://|{}:){}",
            any_of(SCHEMES),
            any_of(SCHEMES_UNOFFICIAL),
            any_of(SCHEMES_NO_AUTHORITY),
            &*PATH_CONT
        ),
    }
}

/// Host-anchored form: a registered-TLD domain, a bracketed or bare IPv6
/// literal, or a bare IPv4 literal, with optional port and path.
fn host_form(config: &ExtractorConfig, domain: &str) -> String {
    match &config.hosts {
        Some(hosts) => format!("{}{}(?:/{}|/)?", any_of(hosts), PORT, &*PATH_CONT),
        None => {
            let host = format!(r"(?:{}|\[{}\]|\b{}\b)", domain, &*IPV6_ADDR, &*IPV4_ADDR);
            format!(
                "{}{}(?:/{}|/)?|{}",
                host,
                PORT,
                &*PATH_CONT,
                &*IPV6_ADDR_NON_EMPTY
            )
        }
    }
}

/// Email form: permitted local part, `@`, then the host grammar with no
/// scheme, port, or path.
fn email_form(config: &ExtractorConfig, domain: &str) -> String {
    match &config.hosts {
        Some(hosts) => format!("{}@{}", EMAIL_LOCAL_PART, any_of(hosts)),
        None => format!("{}@{}", EMAIL_LOCAL_PART, domain),
    }
}

fn validate_override(what: &str, list: Option<&[String]>) -> Result<()> {
    let Some(list) = list else {
        return Ok(());
    };
    if list.is_empty() {
        return Err(SiftError::InvalidConfig(format!(
            "{} override is empty",
            what
        )));
    }
    if list.iter().any(|entry| entry.trim().is_empty()) {
        return Err(SiftError::InvalidConfig(format!(
            "{} override contains an empty entry",
            what
        )));
    }
    Ok(())
}

/// Default capacity of a [`MatcherCache`].
pub const DEFAULT_MATCHER_CACHE_SIZE: usize = 64;

/// Memoizing matcher factory keyed by configuration.
///
/// Replaces process-wide compile-once statics: the cache is an ordinary
/// value owned by the caller. Concurrent `get` calls with the same
/// configuration perform exactly one compilation and share the resulting
/// instance.
pub struct MatcherCache {
    registry: Arc<TldRegistry>,
    cache: Mutex<LruCache<ExtractorConfig, Arc<CompiledMatcher>>>,
}

impl MatcherCache {
    /// Create a cache over the given registry with the default capacity.
    pub fn new(registry: Arc<TldRegistry>) -> Self {
        Self::with_capacity(registry, DEFAULT_MATCHER_CACHE_SIZE)
    }

    /// Create a cache with an explicit capacity (clamped to at least 1).
    pub fn with_capacity(registry: Arc<TldRegistry>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            registry,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// The matcher for `config`, compiling it on first request.
    pub fn get(&self, config: &ExtractorConfig) -> Result<Arc<CompiledMatcher>> {
        let mut cache = self.cache.lock();

        if let Some(matcher) = cache.get(config) {
            return Ok(Arc::clone(matcher));
        }

        // Miss: compile while holding the lock. This prevents a compile
        // stampede: concurrent callers with the same configuration observe
        // exactly one build and share the resulting instance. Compilation
        // is CPU-only (no I/O), so holding the lock is acceptable.
        let matcher = Arc::new(compile(config, &self.registry)?);
        cache.put(config.clone(), Arc::clone(&matcher));

        Ok(matcher)
    }

    /// Drop all cached matchers.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}
