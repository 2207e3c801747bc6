//! IPv4, IPv6, and port grammars.
//!
//! Regular, non-recursive: IPv6 elision is expanded into one alternative per
//! valid count of leading groups, so no counting beyond fixed repetition
//! bounds is ever needed.

use once_cell::sync::Lazy;

/// One IPv4 octet. The alternation admits 0-255 exactly and rejects
/// extra leading zeroes.
pub const OCTET: &str = "(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])";

/// Dotted-quad IPv4 literal.
pub static IPV4_ADDR: Lazy<String> =
    Lazy::new(|| format!(r"{OCTET}\.{OCTET}\.{OCTET}\.{OCTET}"));

/// One 16-bit hexadecimal group.
const H4: &str = "[0-9a-fA-F]{1,4}";

/// IPv6 literal with at least one group: one alternative per count of
/// leading colon-terminated groups that were not replaced by a `::`
/// elision, each optionally ending in an embedded IPv4 literal.
pub static IPV6_ADDR_NON_EMPTY: Lazy<String> = Lazy::new(|| {
    let h4 = H4;
    let ipv4 = &*IPV4_ADDR;
    let alternatives = [
        // 7 leading groups, then a final group or the tail of an elision.
        format!("(?:{h4}:){{7}}(?:{h4}|:)"),
        // 6 leading groups, then an embedded IPv4, an elided final group,
        // or a final elision.
        format!("(?:{h4}:){{6}}(?:{ipv4}|:{h4}|:)"),
        // 5 leading groups, then an elision with an optional IPv4 or up to
        // 2 trailing groups.
        format!("(?:{h4}:){{5}}(?::{ipv4}|(?::{h4}){{1,2}}|:)"),
        // 4 leading groups.
        format!("(?:{h4}:){{4}}(?:(?::{h4}){{0,1}}:{ipv4}|(?::{h4}){{1,3}}|:)"),
        // 3 leading groups.
        format!("(?:{h4}:){{3}}(?:(?::{h4}){{0,2}}:{ipv4}|(?::{h4}){{1,4}}|:)"),
        // 2 leading groups.
        format!("(?:{h4}:){{2}}(?:(?::{h4}){{0,3}}:{ipv4}|(?::{h4}){{1,5}}|:)"),
        // 1 leading group.
        format!("(?:{h4}:){{1}}(?:(?::{h4}){{0,4}}:{ipv4}|(?::{h4}){{1,6}}|:)"),
        // Leading elision. A lone `:` is intentionally not an alternative
        // here; the empty address `::` is a separate fragment.
        format!(":(?:(?::{h4}){{0,5}}:{ipv4}|(?::{h4}){{1,7}})"),
    ];
    format!("(?:{})", alternatives.join("|"))
});

/// Any IPv6 literal, including the empty address `::`.
pub static IPV6_ADDR: Lazy<String> =
    Lazy::new(|| format!("(?:{}|::)", &*IPV6_ADDR_NON_EMPTY));

/// Optional port suffix.
pub const PORT: &str = "(?::[0-9]+)?";
