//! Integration tests for domain splitting and URL decoration using
//! realistic host corpora.

use std::sync::Arc;

use linksift::{DomainSplitter, TldRegistry, UrlParser};

fn standard_splitter() -> DomainSplitter {
    DomainSplitter::new(Arc::new(TldRegistry::standard()))
}

/// Hosts seen in crawl output, paired with their expected split.
fn crawl_corpus() -> Vec<(&'static str, (&'static str, &'static str, &'static str))> {
    vec![
        ("www.example.com", ("www", "example", "com")),
        ("example.com", ("", "example", "com")),
        ("localhost", ("", "localhost", "")),
        ("subdomain.example.co.uk", ("subdomain", "example", "co.uk")),
        ("shop.example.com.au", ("shop", "example", "com.au")),
        ("news.example.org.uk", ("news", "example", "org.uk")),
        ("mail.example.co.jp", ("mail", "example", "co.jp")),
        ("cdn.static.example.co.za", ("cdn.static", "example", "co.za")),
        ("loja.example.com.br", ("loja", "example", "com.br")),
        ("api.v2.example.co.in", ("api.v2", "example", "co.in")),
        ("example.ne.jp", ("", "example", "ne.jp")),
        ("deep.a.b.example.net", ("deep.a.b", "example", "net")),
        ("example.io", ("", "example", "io")),
        ("example.dev", ("", "example", "dev")),
        ("hidden2abc.onion", ("", "hidden2abc", "onion")),
        ("printer.local", ("", "printer", "local")),
        ("fixture.test", ("", "fixture", "test")),
        ("example.xn--p1ai", ("", "example", "xn--p1ai")),
        ("www.example.中国", ("www", "example", "中国")),
        // Interior labels that mimic TLDs must not fool the reverse scan.
        ("com.example.org", ("com", "example", "org")),
        ("uk.co.example.net", ("uk.co", "example", "net")),
        // Unknown suffix: the whole host is the root domain.
        ("service.notarealsuffix", ("", "service.notarealsuffix", "")),
        ("intranet", ("", "intranet", "")),
    ]
}

#[test]
fn test_crawl_corpus_splits() {
    let splitter = standard_splitter();

    for (host, (subdomain, root, tld)) in crawl_corpus() {
        let parts = splitter.split(host);
        assert_eq!(parts.subdomain, subdomain, "subdomain of {}", host);
        assert_eq!(parts.root_domain, root, "root domain of {}", host);
        assert_eq!(parts.tld, tld, "tld of {}", host);
    }
}

#[test]
fn test_corpus_reconstruction() {
    let splitter = standard_splitter();

    for (host, _) in crawl_corpus() {
        let parts = splitter.split(host);
        assert_eq!(parts.to_host(), host, "reconstruction of {}", host);
    }
}

#[test]
fn test_corpus_idempotent_resplit() {
    let splitter = standard_splitter();

    for (host, _) in crawl_corpus() {
        let first = splitter.split(host);
        if first.root_domain.is_empty() || first.tld.is_empty() {
            continue;
        }
        let rejoined = format!("{}.{}", first.root_domain, first.tld);
        let second = splitter.split(&rejoined);
        assert_eq!(second.root_domain, first.root_domain, "re-split of {}", host);
        assert_eq!(second.tld, first.tld, "re-split of {}", host);
    }
}

#[test]
fn test_registry_extension_adds_suffix_without_side_effects() {
    let extended = DomainSplitter::new(Arc::new(TldRegistry::with_custom(["internal"])));

    let parts = extended.split("service.internal");
    assert_eq!(parts.subdomain, "");
    assert_eq!(parts.root_domain, "service");
    assert_eq!(parts.tld, "internal");

    // Built-in behavior is unaffected by the extension.
    let parts = extended.split("www.example.com");
    assert_eq!(parts.root_domain, "example");
    assert_eq!(parts.tld, "com");

    // A splitter over the untouched standard registry still treats the
    // suffix as unknown.
    let standard = standard_splitter();
    let parts = standard.split("service.internal");
    assert_eq!(parts.root_domain, "service.internal");
    assert_eq!(parts.tld, "");
}

#[test]
fn test_splitter_is_shareable_across_threads() {
    let splitter = Arc::new(standard_splitter());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let splitter = Arc::clone(&splitter);
            std::thread::spawn(move || {
                for (host, (_, root, _)) in crawl_corpus() {
                    assert_eq!(splitter.split(host).root_domain, root);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_url_decoration_end_to_end() {
    let parser = UrlParser::new(Arc::new(TldRegistry::standard()));

    let parsed = parser
        .parse("https://sub.example.com:8080/path/to/file.txt")
        .unwrap();
    assert_eq!(parsed.domain, "sub.example.com");
    assert_eq!(parsed.etld_plus_one, "example.com");
    assert_eq!(parsed.subdomain, "sub");
    assert_eq!(parsed.root_domain, "example");
    assert_eq!(parsed.tld, "com");
    assert_eq!(parsed.port, Some(8080));
    assert_eq!(parsed.extension, ".txt");

    let parsed = parser.parse("dashboards.grafana.example.co.uk").unwrap();
    assert_eq!(parsed.url.scheme(), "http");
    assert_eq!(parsed.subdomain, "dashboards.grafana");
    assert_eq!(parsed.etld_plus_one, "example.co.uk");
    assert_eq!(parsed.extension, "");
}

#[test]
fn test_url_decoration_propagates_parser_errors() {
    let parser = UrlParser::new(Arc::new(TldRegistry::standard()));

    assert!(parser.parse("http://exa mple.com").is_err());
    assert!(parser.parse("http://example.com:notaport/").is_err());
}
