//! Pattern grammar: reusable regular-expression fragments.
//!
//! Leaf character classes are plain string constants; composed fragments are
//! lazily assembled once and shared. Fragments contain no capture groups and
//! no anchors, so they can be embedded into larger expressions freely. Each
//! fragment is independently testable by anchoring it.

mod classes;
mod host;
mod ip;

pub use classes::{
    END_CHARS, END_PATH_SEGMENT_CHARS, END_SUB_DELIM_CHARS, END_UNRESERVED_CHARS, IPRIVATE_CHARS,
    MID_CHARS, MID_PATH_SEGMENT_CHARS, MID_SUB_DELIM_CHARS, PATH_CONT, UCS_CHARS,
    UCS_CHARS_MINUS_PUNC, UNRESERVED_CHARS, WELL_ALL, WELL_BRACE, WELL_BRACKET, WELL_PAREN,
};
pub use host::{domain_pattern, tld_pattern, IRI_LABEL, PUNYCODE_TLD, SUBDOMAIN_PART};
pub use ip::{IPV4_ADDR, IPV6_ADDR, IPV6_ADDR_NON_EMPTY, OCTET, PORT};

/// Build a non-capturing alternation of the given strings, each
/// meta-quoted, in iteration order.
pub fn any_of<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pattern = String::from("(?:");
    for (i, item) in items.into_iter().enumerate() {
        if i != 0 {
            pattern.push('|');
        }
        pattern.push_str(&regex::escape(item.as_ref()));
    }
    pattern.push(')');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_of_quotes_metacharacters() {
        let pattern = any_of(["a.b", "c+d"]);
        assert_eq!(pattern, r"(?:a\.b|c\+d)");
        let re = regex::Regex::new(&format!("^{}$", pattern)).unwrap();
        assert!(re.is_match("a.b"));
        assert!(!re.is_match("aXb"));
    }

    #[test]
    fn test_any_of_preserves_order() {
        assert_eq!(any_of(["x", "y", "z"]), "(?:x|y|z)");
    }
}
