//! Marker scanning and renumbering

use citeline_domain::{Citation, CitationMap, NormalizedText};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

/// `[` + non-`]` run + `:` + ASCII digits + `]`; the source part is greedy so
/// the last colon splits source from page.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+):([0-9]+)\]").expect("citation marker pattern is valid")
});

/// Replace every citation marker in `text` with its sequence number
///
/// Absent or empty text yields an empty result. Numbers start at 1 and are
/// assigned the first time a `source_id:page` key is seen, scanning left to
/// right. The page is keyed as written, so `[a:01]` and `[a:1]` get separate
/// numbers, and a page too large for `u32` is still numbered. Text that does not match the marker grammar, including
/// already-numbered `[n]` references, is copied through untouched.
///
/// `citations` never decides which markers are numbered; markers without a
/// matching record still get a number so the resolver can degrade gracefully.
pub fn normalize(text: Option<&str>, citations: &[Citation]) -> NormalizedText {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return NormalizedText::default();
    };

    let mut citation_map = CitationMap::new();
    let clean_text = MARKER
        .replace_all(text, |caps: &Captures<'_>| {
            format!("[{}]", citation_map.record(&caps[1], &caps[2], &caps[0]))
        })
        .into_owned();

    let unbacked = citation_map
        .iter()
        .filter(|entry| !citations.iter().any(|c| entry.is_backed_by(c)))
        .count();
    if unbacked > 0 {
        debug!(
            unbacked,
            total = citation_map.len(),
            "Citation markers without a matching record"
        );
    }

    NormalizedText {
        clean_text,
        citation_map,
    }
}

/// Count the markers [`normalize`] would number in `text`, repeats included
pub fn count_markers(text: &str) -> usize {
    MARKER.find_iter(text).count()
}
