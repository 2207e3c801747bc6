//! Character classes and the path-continuation grammar.
//!
//! Classes come in mid-of-match and end-of-match variants. The end variants
//! drop the punctuation that visually blends into surrounding prose (`.`,
//! `,`, `;`, `'`, `*`, `!`), so `https://example.com/a.` matched inside a
//! sentence keeps the path but sheds the final period.

use once_cell::sync::Lazy;

/// RFC 3986 unreserved characters, mid-segment variant.
pub const UNRESERVED_CHARS: &str = r"a-zA-Z0-9\-._~";

/// Unreserved characters permitted in final position; excludes `.`.
pub const END_UNRESERVED_CHARS: &str = r"a-zA-Z0-9\-_~";

/// Sub-delimiters permitted mid-segment.
pub const MID_SUB_DELIM_CHARS: &str = "!$&'*+,;=";

/// Sub-delimiters permitted in final position.
pub const END_SUB_DELIM_CHARS: &str = "$&+=";

/// RFC 3987 ucschar ranges.
pub const UCS_CHARS: &str = concat!(
    r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}",
    r"\x{10000}-\x{1FFFD}\x{20000}-\x{2FFFD}\x{30000}-\x{3FFFD}\x{40000}-\x{4FFFD}",
    r"\x{50000}-\x{5FFFD}\x{60000}-\x{6FFFD}\x{70000}-\x{7FFFD}\x{80000}-\x{8FFFD}",
    r"\x{90000}-\x{9FFFD}\x{A0000}-\x{AFFFD}\x{B0000}-\x{BFFFD}\x{C0000}-\x{CFFFD}",
    r"\x{D0000}-\x{DFFFD}\x{E1000}-\x{EFFFD}"
);

/// ucschar ranges with the punctuation-heavy blocks carved out (general and
/// supplemental punctuation, CJK symbols, fullwidth/halfwidth forms).
/// Best-effort: Unicode scripts have no universal word-boundary concept, so
/// final-position filtering is by block, not by property.
pub const UCS_CHARS_MINUS_PUNC: &str = concat!(
    r"\x{00A0}-\x{1FFF}\x{2070}-\x{2DFF}\x{2E80}-\x{2FFF}\x{3040}-\x{D7FF}",
    r"\x{F900}-\x{FDCF}\x{FDF0}-\x{FE2F}\x{FE70}-\x{FEFF}",
    r"\x{FF10}-\x{FF19}\x{FF21}-\x{FF3A}\x{FF41}-\x{FF5A}\x{FF66}-\x{FFEF}",
    r"\x{10000}-\x{1FFFD}\x{20000}-\x{2FFFD}\x{30000}-\x{3FFFD}\x{40000}-\x{4FFFD}",
    r"\x{50000}-\x{5FFFD}\x{60000}-\x{6FFFD}\x{70000}-\x{7FFFD}\x{80000}-\x{8FFFD}",
    r"\x{90000}-\x{9FFFD}\x{A0000}-\x{AFFFD}\x{B0000}-\x{BFFFD}\x{C0000}-\x{CFFFD}",
    r"\x{D0000}-\x{DFFFD}\x{E1000}-\x{EFFFD}"
);

/// RFC 3987 iprivate ranges.
pub const IPRIVATE_CHARS: &str = r"\x{E000}-\x{F8FF}\x{F0000}-\x{FFFFD}\x{100000}-\x{10FFFD}";

/// Path-segment characters, mid-of-match variant.
pub static MID_PATH_SEGMENT_CHARS: Lazy<String> =
    Lazy::new(|| format!("{UNRESERVED_CHARS}%{MID_SUB_DELIM_CHARS}:@{UCS_CHARS}"));

/// Path-segment characters permitted in final position. `%` is excluded so
/// a match never stops inside a percent-encoded octet.
pub static END_PATH_SEGMENT_CHARS: Lazy<String> =
    Lazy::new(|| format!("{END_UNRESERVED_CHARS}{END_SUB_DELIM_CHARS}{UCS_CHARS_MINUS_PUNC}"));

/// Everything a URL may contain mid-match.
pub static MID_CHARS: Lazy<String> = Lazy::new(|| {
    format!(
        r"/?#\\{mid}{private}",
        mid = &*MID_PATH_SEGMENT_CHARS,
        private = IPRIVATE_CHARS
    )
});

/// Everything a URL may end with.
pub static END_CHARS: Lazy<String> = Lazy::new(|| {
    format!(
        r"/#{end}{private}",
        end = &*END_PATH_SEGMENT_CHARS,
        private = IPRIVATE_CHARS
    )
});

/// A balanced `(...)` group, one nesting level deep.
pub static WELL_PAREN: Lazy<String> =
    Lazy::new(|| format!(r"\((?:[{mid}]|\([{mid}]*\))*\)", mid = &*MID_CHARS));

/// A balanced `[...]` group, one nesting level deep.
pub static WELL_BRACKET: Lazy<String> =
    Lazy::new(|| format!(r"\[(?:[{mid}]|\[[{mid}]*\])*\]", mid = &*MID_CHARS));

/// A balanced `{...}` group, one nesting level deep.
pub static WELL_BRACE: Lazy<String> =
    Lazy::new(|| format!(r"\{{(?:[{mid}]|\{{[{mid}]*\}})*\}}", mid = &*MID_CHARS));

/// Any balanced bracket group.
pub static WELL_ALL: Lazy<String> =
    Lazy::new(|| format!("{}|{}|{}", &*WELL_PAREN, &*WELL_BRACKET, &*WELL_BRACE));

/// Path continuation after a scheme or host: one or more runs of mid chars,
/// each run closed by a balanced group or a valid final character. A match
/// therefore never ends on a lone trailing delimiter or inside a
/// percent-encoding, and keeps a trailing bracket only when it is balanced.
pub static PATH_CONT: Lazy<String> = Lazy::new(|| {
    format!(
        "(?:[{mid}]*(?:{well}|[{end}]))+",
        mid = &*MID_CHARS,
        well = &*WELL_ALL,
        end = &*END_CHARS
    )
});
