//! Normalizing a whole generated report

use crate::normalize::{count_markers, normalize};
use citeline_domain::{Citation, NormalizedText, Report};
use tracing::info;

/// A report section with every content item normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSection {
    /// Section heading
    pub title: String,
    /// Normalized content items, in report order
    pub items: Vec<NormalizedItem>,
}

/// One normalized content item and the citation records that came with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedItem {
    /// Renumbered text and its numbering table
    pub normalized: NormalizedText,
    /// Original citation records, used later for resolution
    pub citations: Vec<Citation>,
}

/// Normalize every content item of a report
///
/// Each content item gets its own numbering, so the same source can carry
/// different numbers in different paragraphs.
pub fn normalize_report(report: &Report) -> Vec<NormalizedSection> {
    let sections: Vec<NormalizedSection> = report
        .sections
        .iter()
        .map(|section| NormalizedSection {
            title: section.title.clone(),
            items: section
                .content
                .iter()
                .map(|item| NormalizedItem {
                    normalized: normalize(Some(&item.text), &item.citations),
                    citations: item.citations.clone(),
                })
                .collect(),
        })
        .collect();

    let markers: usize = report
        .sections
        .iter()
        .flat_map(|s| &s.content)
        .map(|item| count_markers(&item.text))
        .sum();
    info!(
        sections = sections.len(),
        markers,
        records = report.citation_count(),
        "Normalized report"
    );

    sections
}
