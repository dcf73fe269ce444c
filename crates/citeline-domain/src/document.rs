//! Document detail returned by the lookup service, plus display helpers

use std::collections::BTreeMap;
use std::fmt;

/// One stored chunk belonging to a source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentChunk {
    /// Chunk identifier
    pub id: String,
    /// Chunk text
    pub text: String,
    /// Flattened metadata (values rendered as strings)
    pub metadata: BTreeMap<String, String>,
}

/// Everything the lookup service knows about one source id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentDetail {
    /// The source id the detail belongs to
    pub source_id: String,
    /// Stored chunks for the source
    pub documents: Vec<DocumentChunk>,
}

impl DocumentDetail {
    /// Number of stored chunks
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

/// Coarse document type, guessed from a file name or source id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// `.pdf`
    Pdf,
    /// `.docx`
    Word,
    /// `.pptx`
    PowerPoint,
    /// `.xlsx`
    Excel,
    /// `.txt`
    Text,
    /// `.png` / `.jpg`
    Image,
    /// Anything else
    Document,
}

impl DocumentKind {
    /// Guess the kind from a name containing a file extension
    pub fn from_name(name: &str) -> Self {
        if name.contains(".pdf") {
            DocumentKind::Pdf
        } else if name.contains(".docx") {
            DocumentKind::Word
        } else if name.contains(".pptx") {
            DocumentKind::PowerPoint
        } else if name.contains(".xlsx") {
            DocumentKind::Excel
        } else if name.contains(".txt") {
            DocumentKind::Text
        } else if name.contains(".png") || name.contains(".jpg") {
            DocumentKind::Image
        } else {
            DocumentKind::Document
        }
    }

    /// Human label
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF Document",
            DocumentKind::Word => "Word Document",
            DocumentKind::PowerPoint => "PowerPoint Presentation",
            DocumentKind::Excel => "Excel Spreadsheet",
            DocumentKind::Text => "Text Document",
            DocumentKind::Image => "Image Document",
            DocumentKind::Document => "Document",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shorten upload-style source ids for display
///
/// `uploaded_<name>_<suffix>[_...]` becomes `<name> (<suffix>)`; other ids are
/// returned as-is and an absent id shows as `Unknown`.
///
/// # Examples
///
/// ```
/// use citeline_domain::format_source_id;
///
/// assert_eq!(format_source_id(Some("uploaded_report.pdf_9f3a2b1c")), "report.pdf (9f3a2b1c)");
/// assert_eq!(format_source_id(Some("doc_42")), "doc_42");
/// assert_eq!(format_source_id(None), "Unknown");
/// ```
pub fn format_source_id(source_id: Option<&str>) -> String {
    let Some(source_id) = source_id.filter(|s| !s.is_empty()) else {
        return "Unknown".to_string();
    };

    if source_id.starts_with("uploaded_") {
        let parts: Vec<&str> = source_id.split('_').collect();
        if parts.len() >= 3 {
            return format!("{} ({})", parts[1], parts[2]);
        }
    }
    source_id.to_string()
}
