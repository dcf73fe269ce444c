//! Report structure produced by the generation service

use crate::Citation;

/// Title used for sections that arrive without one
pub const DEFAULT_SECTION_TITLE: &str = "Untitled Section";

/// A generated report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Report sections in display order
    pub sections: Vec<Section>,
}

impl Report {
    /// Total number of citation records across all content items
    pub fn citation_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.content)
            .map(|item| item.citations.len())
            .sum()
    }
}

/// One report section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section heading
    pub title: String,
    /// Paragraph-level content
    pub content: Vec<ContentItem>,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            title: DEFAULT_SECTION_TITLE.to_string(),
            content: Vec::new(),
        }
    }
}

/// Generated text together with the citation records backing it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentItem {
    /// Raw generated text containing `[source_id:page]` markers
    pub text: String,
    /// Citation records supplied alongside the text
    pub citations: Vec<Citation>,
}
