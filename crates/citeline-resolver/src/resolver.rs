//! Resolver facade used by every citation call site

use crate::error::NotFound;
use crate::resolve::resolve_from_map;
use citeline_domain::traits::DocumentLookup;
use citeline_domain::{
    classify_confidence, format_source_id, Citation, CitationMap, Confidence, DocumentDetail,
    DocumentKind,
};
use std::fmt::Display;
use tracing::warn;

/// Outcome of a document detail fetch, as shown to the reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// Detail arrived
    Loaded(DocumentDetail),
    /// The lookup failed or there was nothing to look up
    Unavailable,
}

/// Everything a detail panel shows for one clicked citation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationView {
    /// The clicked number
    pub number: u32,
    /// The resolved (possibly degraded) citation
    pub citation: Citation,
    /// Advisory completeness score
    pub confidence: Confidence,
    /// Display name (upload prefixes shortened)
    pub display_name: String,
    /// Guessed document type
    pub kind: DocumentKind,
}

/// Combines map resolution, confidence scoring and document lookup
pub struct Resolver<L> {
    lookup: L,
}

impl<L> Resolver<L>
where
    L: DocumentLookup,
    L::Error: Display,
{
    /// Create a resolver over a document lookup
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve a clicked number into a full view, without any network access
    pub fn view(
        &self,
        number: u32,
        citation_map: &CitationMap,
        original_citations: &[Citation],
    ) -> Result<CitationView, NotFound> {
        let citation = resolve_from_map(number, citation_map, original_citations)?;
        let name = citation.display_name();

        Ok(CitationView {
            number,
            confidence: classify_confidence(&citation),
            display_name: format_source_id(name),
            kind: name.map(DocumentKind::from_name).unwrap_or(DocumentKind::Document),
            citation,
        })
    }

    /// Fetch document detail for a citation
    ///
    /// Lookup failures are logged and reported as [`DetailState::Unavailable`].
    pub async fn detail(&self, citation: &Citation) -> DetailState {
        let Some(source_id) = citation.source_id.as_deref() else {
            return DetailState::Unavailable;
        };

        match self.lookup.lookup(source_id).await {
            Ok(detail) => DetailState::Loaded(detail),
            Err(e) => {
                warn!(source_id, error = %e, "Document detail unavailable");
                DetailState::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citeline_domain::{ConfidenceLevel, CONTENT_NOT_AVAILABLE};
    use std::collections::HashMap;

    /// In-memory lookup keyed by source id
    #[derive(Default)]
    struct MockLookup {
        details: HashMap<String, DocumentDetail>,
    }

    impl MockLookup {
        fn with(mut self, source_id: &str, chunks: usize) -> Self {
            self.details.insert(
                source_id.to_string(),
                DocumentDetail {
                    source_id: source_id.to_string(),
                    documents: vec![Default::default(); chunks],
                },
            );
            self
        }
    }

    impl DocumentLookup for MockLookup {
        type Error = String;

        async fn lookup(&self, source_id: &str) -> Result<DocumentDetail, String> {
            self.details
                .get(source_id)
                .cloned()
                .ok_or_else(|| format!("no document {}", source_id))
        }
    }

    fn map_with(source_id: &str, page: u32) -> CitationMap {
        let mut map = CitationMap::new();
        map.record(source_id, &page.to_string(), &format!("[{}:{}]", source_id, page));
        map
    }

    #[test]
    fn test_view_scores_and_names() {
        let resolver = Resolver::new(MockLookup::default());
        let map = map_with("uploaded_q3.pdf_9f3a2b1c", 3);
        let originals = vec![Citation::new("uploaded_q3.pdf_9f3a2b1c", 3)
            .with_snippet("x".repeat(60))
            .with_document("uploaded_q3.pdf_9f3a2b1c")];

        let view = resolver.view(1, &map, &originals).unwrap();
        assert_eq!(view.number, 1);
        assert_eq!(view.display_name, "q3.pdf (9f3a2b1c)");
        assert_eq!(view.kind, DocumentKind::Pdf);
        assert_eq!(view.confidence.score, 100);
        assert_eq!(view.confidence.level, ConfidenceLevel::High);
    }

    #[test]
    fn test_view_of_unbacked_marker() {
        let resolver = Resolver::new(MockLookup::default());
        let view = resolver.view(1, &map_with("doc", 0), &[]).unwrap();
        assert_eq!(view.citation.snippet.as_deref(), Some(CONTENT_NOT_AVAILABLE));
        assert_eq!(view.confidence.level, ConfidenceLevel::Low);
        assert_eq!(view.kind, DocumentKind::Document);
    }

    #[test]
    fn test_view_not_found() {
        let resolver = Resolver::new(MockLookup::default());
        assert_eq!(
            resolver.view(9, &CitationMap::new(), &[]),
            Err(NotFound { number: 9 })
        );
    }

    #[tokio::test]
    async fn test_detail_loaded() {
        let resolver = Resolver::new(MockLookup::default().with("doc_a", 2));
        match resolver.detail(&Citation::new("doc_a", 1)).await {
            DetailState::Loaded(detail) => assert_eq!(detail.document_count(), 2),
            DetailState::Unavailable => panic!("Expected loaded detail"),
        }
    }

    #[tokio::test]
    async fn test_detail_unavailable() {
        let resolver = Resolver::new(MockLookup::default());
        assert_eq!(
            resolver.detail(&Citation::new("missing", 1)).await,
            DetailState::Unavailable
        );
        assert_eq!(resolver.detail(&Citation::default()).await, DetailState::Unavailable);
    }
}
