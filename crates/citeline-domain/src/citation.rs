//! Citation module - source records attached to generated report text

use std::fmt;

/// Snippet shown when a numbered marker has no backing citation record
pub const CONTENT_NOT_AVAILABLE: &str = "Content not available";

/// Composite identity of a citation: `source_id + ":" + page`
///
/// Two citations with the same key are the same reference and collapse to
/// one numbered marker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CitationKey(String);

impl CitationKey {
    /// Build a key from its parts
    ///
    /// The page is kept as written, so a marker page of `01` and one of `1`
    /// are different keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use citeline_domain::CitationKey;
    ///
    /// let key = CitationKey::new("doc_abc", 3);
    /// assert_eq!(key.as_str(), "doc_abc:3");
    /// assert_ne!(CitationKey::new("doc_abc", "03"), key);
    /// ```
    pub fn new(source_id: &str, page: impl fmt::Display) -> Self {
        Self(format!("{}:{}", source_id, page))
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CitationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A citation record produced by the report generation service
///
/// Optional fields are `None` when upstream omitted them or sent an empty
/// string. A `page` of `0` means the page was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Citation {
    /// Identifier of the originating document or object
    pub source_id: Option<String>,

    /// Page or location reference (`0` when absent)
    pub page: u32,

    /// Short excerpt backing the claim
    pub snippet: Option<String>,

    /// Human-readable document name
    pub document: Option<String>,

    /// ISO-8601 timestamp as sent by upstream
    pub timestamp: Option<String>,
}

impl Citation {
    /// Create a citation with a source and page and no other detail
    pub fn new(source_id: impl Into<String>, page: u32) -> Self {
        Self {
            source_id: Some(source_id.into()),
            page,
            ..Self::default()
        }
    }

    /// Create the degraded citation shown when no original record matches a marker
    ///
    /// The document name falls back to the source id and the snippet carries
    /// [`CONTENT_NOT_AVAILABLE`].
    pub fn unresolved(source_id: &str, page: u32) -> Self {
        Self {
            source_id: Some(source_id.to_string()),
            page,
            snippet: Some(CONTENT_NOT_AVAILABLE.to_string()),
            document: Some(source_id.to_string()),
            timestamp: None,
        }
    }

    /// Attach a snippet
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Attach a document name
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    /// Attach a timestamp
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// The `(source_id, page)` key; an absent source id keys as the empty string
    pub fn key(&self) -> CitationKey {
        CitationKey::new(self.source_id.as_deref().unwrap_or(""), self.page)
    }

    /// Whether this record is the one referenced by `source_id` and `page`
    pub fn matches(&self, source_id: &str, page: u32) -> bool {
        self.page == page && self.source_id.as_deref() == Some(source_id)
    }

    /// Name to show for the cited document: the document name, else the source id
    pub fn display_name(&self) -> Option<&str> {
        self.document.as_deref().or(self.source_id.as_deref())
    }
}
