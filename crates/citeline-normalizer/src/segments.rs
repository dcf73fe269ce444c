//! Walking renumbered text as inline segments

use citeline_domain::{CitationMap, Segment};
use std::iter::FusedIterator;

/// Split renumbered text into plain-text and citation-reference segments
///
/// A `[n]` token becomes [`Segment::CitationRef`] only when `n` is assigned in
/// `citation_map`; any other bracketed number stays part of the surrounding
/// text. Consecutive text is emitted as one segment and empty text segments
/// are never produced. The iterator is lazy and can be cloned to walk the text
/// again.
pub fn render_inline<'a>(clean_text: &'a str, citation_map: &'a CitationMap) -> Segments<'a> {
    Segments {
        rest: clean_text,
        citation_map,
        pending: None,
    }
}

/// Lazy iterator returned by [`render_inline`]
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    citation_map: &'a CitationMap,
    pending: Option<u32>,
}

impl Segments<'_> {
    /// Find the next `[n]` whose number is in the map: `(start, end, n)`
    fn next_reference(&self) -> Option<(usize, usize, u32)> {
        for (start, _) in self.rest.match_indices('[') {
            let after = &self.rest[start + 1..];
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 || after.as_bytes().get(digits) != Some(&b']') {
                continue;
            }
            if let Ok(number) = after[..digits].parse::<u32>() {
                if self.citation_map.contains_number(number) {
                    return Some((start, start + digits + 2, number));
                }
            }
        }
        None
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if let Some(number) = self.pending.take() {
            return Some(Segment::CitationRef(number));
        }
        if self.rest.is_empty() {
            return None;
        }

        match self.next_reference() {
            Some((start, end, number)) => {
                let text = &self.rest[..start];
                self.rest = &self.rest[end..];
                if text.is_empty() {
                    Some(Segment::CitationRef(number))
                } else {
                    self.pending = Some(number);
                    Some(Segment::Text(text.to_string()))
                }
            }
            None => {
                let text = std::mem::take(&mut self.rest);
                Some(Segment::Text(text.to_string()))
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}
