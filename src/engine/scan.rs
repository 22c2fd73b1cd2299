//! Literal substring scanning
//!
//! All matching here is plain byte-wise substring search. Nothing is ever
//! interpreted as a pattern, so selections containing `.`, `*`, `[` and the
//! like match exactly as typed.

use std::ops::Range;

use super::entity::{EntityKey, EntityMap, PLACEHOLDER_PREFIX};

/// A placeholder token found in a text, with its byte range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpan {
    pub range: Range<usize>,
    pub key: EntityKey,
}

/// Find all non-overlapping literal occurrences of `needle`, left to right
///
/// Returns byte ranges into `haystack`. An empty needle matches nothing.
pub fn occurrences(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }
    haystack
        .match_indices(needle)
        .map(|(start, m)| start..start + m.len())
        .collect()
}

/// Locate every token in `text` that names an entry of `entities`
///
/// Token-shaped text whose number is not in the map is ordinary text.
pub fn placeholder_spans(text: &str, entities: &EntityMap) -> Vec<PlaceholderSpan> {
    let mut spans = Vec::new();
    if entities.is_empty() {
        return spans;
    }

    let mut cursor = 0;
    while let Some(rel) = text[cursor..].find(PLACEHOLDER_PREFIX) {
        let start = cursor + rel;
        match EntityKey::parse_prefix(&text[start..]) {
            Some((key, len)) if entities.contains_key(key) => {
                spans.push(PlaceholderSpan {
                    range: start..start + len,
                    key,
                });
                cursor = start + len;
            }
            // '[' is one byte, so this stays on a char boundary
            _ => cursor = start + 1,
        }
    }
    spans
}

/// Replace every literal occurrence of `needle` with `replacement`,
/// leaving the given protected spans untouched
///
/// Matches never straddle a protected span. Returns the new text and the
/// number of occurrences replaced.
pub fn replace_outside(
    text: &str,
    needle: &str,
    replacement: &str,
    protected: &[PlaceholderSpan],
) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut count = 0;
    let mut last = 0;

    let mut replace_segment = |segment: &str, out: &mut String| {
        let mut seg_last = 0;
        for range in occurrences(segment, needle) {
            out.push_str(&segment[seg_last..range.start]);
            out.push_str(replacement);
            seg_last = range.end;
            count += 1;
        }
        out.push_str(&segment[seg_last..]);
    };

    for span in protected {
        replace_segment(&text[last..span.range.start], &mut out);
        out.push_str(&text[span.range.clone()]);
        last = span.range.end;
    }
    replace_segment(&text[last..], &mut out);

    (out, count)
}
