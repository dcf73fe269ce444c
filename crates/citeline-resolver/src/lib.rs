//! Citeline Resolver
//!
//! Maps a clicked citation number back to its source record, scores the
//! record's completeness, and fetches document detail from the lookup service.
//!
//! # Architecture
//!
//! ```text
//! number + CitationMap + records → resolve_from_map → Citation → classify_confidence
//!                                                       ↓
//!                                   DocumentLookup (HTTP) → DocumentDetail | FetchError
//! ```
//!
//! Every failure is a returned value: [`NotFound`] for numbers with no entry,
//! [`FetchError`] for lookup problems. Nothing here panics on bad upstream data.
//!
//! # Example Usage
//!
//! ```no_run
//! use citeline_normalizer::normalize;
//! use citeline_resolver::{resolve_from_map, HttpDocumentLookup, ResolverConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let citations = vec![];
//! let normalized = normalize(Some("Revenue rose [doc_a:2]."), &citations);
//! let citation = resolve_from_map(1, &normalized.citation_map, &citations)?;
//!
//! let lookup = HttpDocumentLookup::new(&ResolverConfig::default())?;
//! match lookup.fetch_document_detail("doc_a").await {
//!     Ok(detail) => println!("{} chunk(s)", detail.document_count()),
//!     Err(e) => println!("unavailable: {}", e),
//! }
//! # let _ = citation;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod resolve;
mod resolver;
pub mod wire;

pub use citeline_domain::{classify_confidence, Confidence, ConfidenceLevel};
pub use config::ResolverConfig;
pub use error::{FetchError, NotFound};
pub use http::HttpDocumentLookup;
pub use resolve::resolve_from_map;
pub use resolver::{CitationView, DetailState, Resolver};
