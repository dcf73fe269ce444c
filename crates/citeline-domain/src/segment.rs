//! Inline segments of renumbered text

/// A piece of renumbered text as walked by a presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text
    Text(String),
    /// A clickable citation reference (`[n]` in the clean text)
    CitationRef(u32),
}

impl Segment {
    /// Render the segment back to its clean-text form
    pub fn to_clean_text(&self) -> String {
        match self {
            Segment::Text(text) => text.clone(),
            Segment::CitationRef(number) => format!("[{}]", number),
        }
    }
}
