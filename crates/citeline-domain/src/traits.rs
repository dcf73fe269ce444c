//! Trait definitions for external interactions
//!
//! These traits define the boundary between citation logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::DocumentDetail;
use std::future::Future;

/// Trait for fetching document detail for a source id
///
/// Implemented by the infrastructure layer (citeline-resolver). Failures are
/// returned, never panicked, so a caller can show an "unavailable" state.
pub trait DocumentLookup {
    /// Error type for lookup operations
    type Error;

    /// Fetch everything known about `source_id`
    fn lookup(
        &self,
        source_id: &str,
    ) -> impl Future<Output = Result<DocumentDetail, Self::Error>> + Send;
}
