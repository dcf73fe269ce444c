//! Advisory confidence classification
//!
//! Scores how complete a citation record is. This never verifies the claim
//! itself; it only reflects which supporting fields upstream supplied.

use crate::Citation;
use std::fmt;

/// Points for a snippet longer than [`SNIPPET_MIN_CHARS`]
pub const SNIPPET_POINTS: u8 = 30;

/// Points for a page greater than zero
pub const PAGE_POINTS: u8 = 25;

/// Points for a source id longer than [`SOURCE_ID_MIN_CHARS`]
pub const SOURCE_ID_POINTS: u8 = 25;

/// Points for a document name longer than [`DOCUMENT_MIN_CHARS`]
pub const DOCUMENT_POINTS: u8 = 20;

/// Snippet length (in characters) that must be exceeded
pub const SNIPPET_MIN_CHARS: usize = 50;

/// Source id length (in characters) that must be exceeded
pub const SOURCE_ID_MIN_CHARS: usize = 10;

/// Document name length (in characters) that must be exceeded
pub const DOCUMENT_MIN_CHARS: usize = 20;

/// Lowest score classified as High
pub const HIGH_THRESHOLD: u8 = 80;

/// Lowest score classified as Medium
pub const MEDIUM_THRESHOLD: u8 = 60;

/// Coarse confidence bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceLevel {
    /// Score below 60
    Low,
    /// Score in 60..80
    Medium,
    /// Score of 80 or more
    High,
}

impl ConfidenceLevel {
    /// Classify a score
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            ConfidenceLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Level name
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence classification of a single citation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confidence {
    /// Bucketed level
    pub level: ConfidenceLevel,
    /// Additive score in `0..=100`
    pub score: u8,
}

fn longer_than(value: Option<&str>, min_chars: usize) -> bool {
    value.is_some_and(|v| v.chars().count() > min_chars)
}

/// Score a citation's completeness
///
/// Each check contributes independently, so the result does not depend on
/// check order. The maximum score is 100.
///
/// # Examples
///
/// ```
/// use citeline_domain::{classify_confidence, Citation, ConfidenceLevel};
///
/// let citation = Citation::new("uploaded_doc_123456", 3)
///     .with_snippet("x".repeat(60))
///     .with_document("Quarterly Report Draft V2");
/// let confidence = classify_confidence(&citation);
/// assert_eq!(confidence.score, 100);
/// assert_eq!(confidence.level, ConfidenceLevel::High);
/// ```
pub fn classify_confidence(citation: &Citation) -> Confidence {
    let mut score = 0;

    if longer_than(citation.snippet.as_deref(), SNIPPET_MIN_CHARS) {
        score += SNIPPET_POINTS;
    }
    if citation.page > 0 {
        score += PAGE_POINTS;
    }
    if longer_than(citation.source_id.as_deref(), SOURCE_ID_MIN_CHARS) {
        score += SOURCE_ID_POINTS;
    }
    if longer_than(citation.document.as_deref(), DOCUMENT_MIN_CHARS) {
        score += DOCUMENT_POINTS;
    }

    Confidence {
        level: ConfidenceLevel::from_score(score),
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_citation_is_high() {
        let citation = Citation::new("uploaded_doc_123456", 3)
            .with_snippet("x".repeat(60))
            .with_document("Quarterly Report Draft V2");
        let confidence = classify_confidence(&citation);
        assert_eq!(confidence.score, 100);
        assert_eq!(confidence.level, ConfidenceLevel::High);
    }

    #[test]
    fn test_sparse_citation_is_low() {
        let citation = Citation {
            snippet: Some("short".to_string()),
            page: 0,
            ..Citation::default()
        };
        let confidence = classify_confidence(&citation);
        assert_eq!(confidence.score, 0);
        assert_eq!(confidence.level, ConfidenceLevel::Low);
    }

    #[test]
    fn test_lengths_are_strict() {
        // Exactly at the limits earns nothing
        let citation = Citation {
            source_id: Some("a".repeat(10)),
            page: 0,
            snippet: Some("s".repeat(50)),
            document: Some("d".repeat(20)),
            timestamp: None,
        };
        assert_eq!(classify_confidence(&citation).score, 0);
    }

    #[test]
    fn test_lengths_count_characters() {
        // 51 two-byte characters
        let citation = Citation::default().with_snippet("é".repeat(51));
        assert_eq!(classify_confidence(&citation).score, SNIPPET_POINTS);

        let citation = Citation::default().with_snippet("é".repeat(30));
        assert_eq!(classify_confidence(&citation).score, 0);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(ConfidenceLevel::from_score(80), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(79), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(60), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(59), ConfidenceLevel::Low);
    }

    #[test]
    fn test_medium_band() {
        // page + source id + document = 70
        let citation = Citation::new("uploaded_doc_123456", 2)
            .with_document("Quarterly Report Draft V2");
        let confidence = classify_confidence(&citation);
        assert_eq!(confidence.score, 70);
        assert_eq!(confidence.level, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(ConfidenceLevel::High.to_string(), "High");
        assert_eq!(ConfidenceLevel::Low.to_string(), "Low");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: score never exceeds 100 and the level agrees with it
        #[test]
        fn test_score_bounds(
            source_id in proptest::option::of(".{0,20}"),
            page in 0u32..5,
            snippet in proptest::option::of(".{0,80}"),
            document in proptest::option::of(".{0,30}"),
        ) {
            let citation = Citation { source_id, page, snippet, document, timestamp: None };
            let confidence = classify_confidence(&citation);

            prop_assert!(confidence.score <= 100);
            prop_assert_eq!(confidence.level, ConfidenceLevel::from_score(confidence.score));
        }

        /// Property: adding a timestamp never changes the score
        #[test]
        fn test_timestamp_is_ignored(page in 0u32..5, ts in ".{0,25}") {
            let base = Citation::new("uploaded_doc_123456", page);
            let stamped = base.clone().with_timestamp(ts);
            prop_assert_eq!(classify_confidence(&base), classify_confidence(&stamped));
        }
    }
}
