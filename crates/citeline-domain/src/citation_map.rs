//! Citation map - numbered entries assigned while normalizing one text

use crate::{Citation, CitationKey};
use std::collections::HashMap;

/// One numbered citation found in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationMapEntry {
    /// Display number, starting at 1
    pub number: u32,
    /// Source identifier taken from the marker
    pub source_id: String,
    /// Page digits exactly as written in the marker
    pub page_text: String,
    /// Page as a number; `None` when the digits do not fit in `u32`
    pub page: Option<u32>,
    /// The raw marker text that was replaced (e.g. `[doc_abc:3]`)
    pub original_match: String,
}

impl CitationMapEntry {
    /// The `source_id:page` key of this entry, page as written
    pub fn key(&self) -> CitationKey {
        CitationKey::new(&self.source_id, &self.page_text)
    }

    /// Whether `citation` is the record this marker refers to
    ///
    /// Pages compare numerically, so `[a:01]` is backed by a page-1 record. A
    /// page too large for `u32` is never backed.
    pub fn is_backed_by(&self, citation: &Citation) -> bool {
        self.page
            .is_some_and(|page| citation.matches(&self.source_id, page))
    }
}

/// Mapping from [`CitationKey`] to [`CitationMapEntry`]
///
/// Entries are stored in number order, so entry `n` lives at index `n - 1`.
/// Numbers are therefore contiguous from 1 and follow first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationMap {
    entries: Vec<CitationMapEntry>,
    index: HashMap<CitationKey, usize>,
}

impl CitationMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number for `source_id:page_text`, assigning the next one on first sight
    ///
    /// `page_text` is the digit run from the marker. It is compared verbatim,
    /// and parsed only to fill [`CitationMapEntry::page`].
    pub fn record(&mut self, source_id: &str, page_text: &str, original_match: &str) -> u32 {
        let key = CitationKey::new(source_id, page_text);
        if let Some(&idx) = self.index.get(&key) {
            return self.entries[idx].number;
        }

        let number = self.entries.len() as u32 + 1;
        self.index.insert(key, self.entries.len());
        self.entries.push(CitationMapEntry {
            number,
            source_id: source_id.to_string(),
            page_text: page_text.to_string(),
            page: page_text.parse().ok(),
            original_match: original_match.to_string(),
        });
        number
    }

    /// Look up an entry by key
    pub fn get(&self, key: &CitationKey) -> Option<&CitationMapEntry> {
        self.index.get(key).map(|&idx| &self.entries[idx])
    }

    /// Look up an entry by its display number
    pub fn by_number(&self, number: u32) -> Option<&CitationMapEntry> {
        let idx = number.checked_sub(1)? as usize;
        self.entries.get(idx)
    }

    /// Whether `number` is assigned in this map
    pub fn contains_number(&self, number: u32) -> bool {
        self.by_number(number).is_some()
    }

    /// Iterate entries in number order
    pub fn iter(&self) -> std::slice::Iter<'_, CitationMapEntry> {
        self.entries.iter()
    }

    /// Number of distinct citations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no citation was found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CitationMap {
    type Item = &'a CitationMapEntry;
    type IntoIter = std::slice::Iter<'a, CitationMapEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Text with every citation marker replaced by `[number]`, plus the numbering table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    /// Renumbered text
    pub clean_text: String,
    /// Numbering table for `clean_text`
    pub citation_map: CitationMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_assigns_first_seen_numbers() {
        let mut map = CitationMap::new();
        assert_eq!(map.record("a", "1", "[a:1]"), 1);
        assert_eq!(map.record("b", "2", "[b:2]"), 2);
        assert_eq!(map.record("a", "1", "[a:1]"), 1);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_same_source_different_page_is_distinct() {
        let mut map = CitationMap::new();
        map.record("a", "1", "[a:1]");
        map.record("a", "2", "[a:2]");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&CitationKey::new("a", 2)).map(|e| e.number), Some(2));
    }

    #[test]
    fn test_by_number() {
        let mut map = CitationMap::new();
        map.record("doc_abc", "3", "[doc_abc:3]");

        let entry = map.by_number(1).unwrap();
        assert_eq!(entry.source_id, "doc_abc");
        assert_eq!(entry.page, Some(3));
        assert_eq!(entry.page_text, "3");
        assert_eq!(entry.original_match, "[doc_abc:3]");
        assert_eq!(entry.key(), CitationKey::new("doc_abc", 3));

        assert!(map.by_number(0).is_none());
        assert!(map.by_number(2).is_none());
        assert!(!map.contains_number(2));
    }

    #[test]
    fn test_iter_is_in_number_order() {
        let mut map = CitationMap::new();
        map.record("z", "9", "[z:9]");
        map.record("a", "1", "[a:1]");
        let numbers: Vec<u32> = map.iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        let sources: Vec<&str> = (&map).into_iter().map(|e| e.source_id.as_str()).collect();
        assert_eq!(sources, vec!["z", "a"]);
    }

    #[test]
    fn test_page_text_is_compared_verbatim() {
        let mut map = CitationMap::new();
        assert_eq!(map.record("a", "01", "[a:01]"), 1);
        assert_eq!(map.record("a", "1", "[a:1]"), 2);
        assert_eq!(map.by_number(1).unwrap().page, Some(1));
        assert_eq!(map.by_number(2).unwrap().original_match, "[a:1]");
        assert_eq!(map.get(&CitationKey::new("a", "01")).map(|e| e.number), Some(1));
    }

    #[test]
    fn test_is_backed_by() {
        let mut map = CitationMap::new();
        map.record("a", "01", "[a:01]");
        map.record("a", "99999999999", "[a:99999999999]");

        assert!(map.by_number(1).unwrap().is_backed_by(&Citation::new("a", 1)));
        assert!(!map.by_number(1).unwrap().is_backed_by(&Citation::new("b", 1)));
        assert!(!map.by_number(2).unwrap().is_backed_by(&Citation::new("a", u32::MAX)));
    }

    #[test]
    fn test_oversized_page_still_gets_a_number() {
        let mut map = CitationMap::new();
        assert_eq!(map.record("doc", "4294967296", "[doc:4294967296]"), 1);
        let entry = map.by_number(1).unwrap();
        assert_eq!(entry.page, None);
        assert_eq!(entry.key().as_str(), "doc:4294967296");
    }

    #[test]
    fn test_value_equality() {
        let mut left = CitationMap::new();
        let mut right = CitationMap::new();
        for map in [&mut left, &mut right] {
            map.record("a", "1", "[a:1]");
            map.record("b", "2", "[b:2]");
        }
        assert_eq!(left, right);
    }
}
