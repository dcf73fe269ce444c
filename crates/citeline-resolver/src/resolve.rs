//! Resolving a citation number back to its source record

use crate::error::NotFound;
use citeline_domain::{Citation, CitationMap, CONTENT_NOT_AVAILABLE};
use tracing::debug;

/// Find the source record behind citation `number`
///
/// Returns [`NotFound`] when `number` has no map entry. When the entry exists
/// but no original record matches its source id and page, a degraded citation
/// carrying "Content not available" is returned instead of an error. A
/// matching record missing its snippet or document name gets the same
/// fallbacks.
pub fn resolve_from_map(
    number: u32,
    citation_map: &CitationMap,
    original_citations: &[Citation],
) -> Result<Citation, NotFound> {
    let entry = citation_map.by_number(number).ok_or(NotFound { number })?;

    let Some(original) = original_citations
        .iter()
        .find(|c| entry.is_backed_by(c))
    else {
        debug!(number, key = %entry.key(), "No citation record for marker");
        // An oversized page cannot be represented; show it as absent
        return Ok(Citation::unresolved(&entry.source_id, entry.page.unwrap_or(0)));
    };

    let mut citation = original.clone();
    if citation.snippet.is_none() {
        citation.snippet = Some(CONTENT_NOT_AVAILABLE.to_string());
    }
    if citation.document.is_none() {
        citation.document = Some(entry.source_id.clone());
    }
    Ok(citation)
}
