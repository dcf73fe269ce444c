//! Citeline Normalizer
//!
//! Turns generated text carrying `[source_id:page]` markers into numbered
//! text (`[1]`, `[2]`, ...) plus the table that maps each number back to its
//! source.
//!
//! # Overview
//!
//! ```text
//! raw text → normalize → (clean_text, citation_map) → render_inline → segments
//! ```
//!
//! Numbering is scoped to a single [`normalize`] call and assigned in
//! first-seen order, so the same input always yields the same output.
//! Malformed markers are left in the text as-is; nothing here can fail.
//!
//! # Example Usage
//!
//! ```
//! use citeline_domain::Segment;
//! use citeline_normalizer::{normalize, render_inline};
//!
//! let normalized = normalize(Some("[a:1] then [b:2] then [a:1] again"), &[]);
//! assert_eq!(normalized.clean_text, "[1] then [2] then [1] again");
//! assert_eq!(normalized.citation_map.len(), 2);
//!
//! let segments: Vec<Segment> =
//!     render_inline(&normalized.clean_text, &normalized.citation_map).collect();
//! assert_eq!(segments[0], Segment::CitationRef(1));
//! ```

#![warn(missing_docs)]

mod markdown;
mod normalize;
mod report;
mod segments;

pub use markdown::strip_markdown;
pub use normalize::{count_markers, normalize};
pub use report::{normalize_report, NormalizedItem, NormalizedSection};
pub use segments::{render_inline, Segments};
