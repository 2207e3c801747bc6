use serde::Serialize;

use crate::compile::CompiledMatcher;

/// A matched span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'t> {
    /// Byte offset of the start of the match.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// The matched text.
    pub text: &'t str,
}

impl<'t> Span<'t> {
    /// Length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty. Matchers never produce empty spans.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched text.
    pub fn as_str(&self) -> &'t str {
        self.text
    }
}

/// Lazy iterator over the non-overlapping matches of a compiled matcher in
/// a text, in left-to-right order.
///
/// At each scan position the earliest-starting match across all enabled
/// forms wins; among forms tied on the start position the longest match
/// wins (or the first-listed form, when the matcher was built with
/// prefer-longest off). The scan then advances past the reported match, so
/// spans never overlap. Exhausting the text is the normal termination; an
/// input with no matches yields nothing and is not an error.
pub struct Matches<'m, 't> {
    matcher: &'m CompiledMatcher,
    text: &'t str,
    pos: usize,
}

impl<'m, 't> Matches<'m, 't> {
    pub(crate) fn new(matcher: &'m CompiledMatcher, text: &'t str) -> Self {
        Self {
            matcher,
            text,
            pos: 0,
        }
    }
}

impl<'m, 't> Iterator for Matches<'m, 't> {
    type Item = Span<'t>;

    fn next(&mut self) -> Option<Span<'t>> {
        if self.pos > self.text.len() {
            return None;
        }

        let mut best: Option<(usize, usize)> = None;

        for form in self.matcher.forms() {
            let Some(m) = form.find_at(self.text, self.pos) else {
                continue;
            };
            best = Some(match best {
                None => (m.start(), m.end()),
                Some((start, end)) => {
                    if m.start() < start
                        || (m.start() == start && self.matcher.prefer_longest() && m.end() > end)
                    {
                        (m.start(), m.end())
                    } else {
                        (start, end)
                    }
                }
            });
        }

        let Some((start, end)) = best else {
            // Fuse: no form matches anywhere in the remainder.
            self.pos = self.text.len() + 1;
            return None;
        };

        // Forms cannot match the empty string, but never risk a stall.
        self.pos = if end > start {
            end
        } else {
            end + self.text[end..].chars().next().map_or(1, char::len_utf8)
        };

        Some(Span {
            start,
            end,
            text: &self.text[start..end],
        })
    }
}
