//! Citeline Domain Layer
//!
//! This crate holds the data model shared by every citation call site.
//! It has ZERO external dependencies and defines the value objects and trait
//! seams that the normalizer, resolver and CLI crates build on.
//!
//! ## Key Concepts
//!
//! - **Citation**: A source record attached to generated text
//! - **Citation Key**: The `(source_id, page)` identity of a citation
//! - **Citation Map**: Numbered entries assigned in first-seen order
//! - **Segment**: A piece of renumbered text, either plain or a citation reference
//! - **Confidence**: An advisory High/Medium/Low completeness score
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Upstream data is validated once (in `citeline-resolver::wire`) and lands here
//!   as explicit optional fields
//! - Network access is expressed only through the [`traits::DocumentLookup`] seam

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod citation;
pub mod citation_map;
pub mod confidence;
pub mod document;
pub mod report;
pub mod segment;
pub mod traits;

// Re-exports for convenience
pub use citation::{Citation, CitationKey, CONTENT_NOT_AVAILABLE};
pub use citation_map::{CitationMap, CitationMapEntry, NormalizedText};
pub use confidence::{classify_confidence, Confidence, ConfidenceLevel};
pub use document::{format_source_id, DocumentChunk, DocumentDetail, DocumentKind};
pub use report::{ContentItem, Report, Section};
pub use segment::Segment;
