//! HTTP client for the document and report services
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Configurable base URL and timeout
//! - Path segments are percent-encoded, so any source id is safe to request
//! - No retries; callers re-invoke on demand
//!
//! # Examples
//!
//! ```no_run
//! use citeline_resolver::{HttpDocumentLookup, ResolverConfig};
//!
//! let config = ResolverConfig::default().with_base_url("http://localhost:8000");
//! let lookup = HttpDocumentLookup::new(&config).expect("valid config");
//! ```

use crate::config::ResolverConfig;
use crate::error::FetchError;
use crate::wire;
use citeline_domain::traits::DocumentLookup;
use citeline_domain::{DocumentDetail, Report};
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

/// Client for `GET /documents/source/{source_id}` and `GET /reports/preview/{report_id}`
#[derive(Debug, Clone)]
pub struct HttpDocumentLookup {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpDocumentLookup {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Config`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: &ResolverConfig) -> Result<Self, FetchError> {
        config.validate().map_err(FetchError::Config)?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::Config(format!("Invalid base URL {}: {}", config.base_url, e)))?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch everything the document service knows about `source_id`
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `source_id` is empty
    /// - The service is unreachable or the request times out
    /// - The service answers with a non-success status
    /// - The response body is not a JSON object
    pub async fn fetch_document_detail(&self, source_id: &str) -> Result<DocumentDetail, FetchError> {
        if source_id.trim().is_empty() {
            return Err(FetchError::InvalidSourceId(source_id.to_string()));
        }

        let url = self.endpoint(&["documents", "source", source_id])?;
        debug!(%url, "Fetching document detail");

        let body = self.get_json(url).await?;
        let detail = wire::document_detail_from_value(body, source_id)?;
        debug!(source_id, documents = detail.document_count(), "Fetched document detail");
        Ok(detail)
    }

    /// Fetch the preview of a generated report
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_document_detail`], plus [`FetchError::Upstream`]
    /// when the service reports an error in its body.
    pub async fn fetch_report_preview(&self, report_id: &str) -> Result<Report, FetchError> {
        if report_id.trim().is_empty() {
            return Err(FetchError::Config("report id must not be empty".to_string()));
        }

        let url = self.endpoint(&["reports", "preview", report_id])?;
        debug!(%url, "Fetching report preview");

        let body = self.get_json(url).await?;
        wire::report_from_value(body)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Config(format!("Base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Lookup service returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl DocumentLookup for HttpDocumentLookup {
    type Error = FetchError;

    async fn lookup(&self, source_id: &str) -> Result<DocumentDetail, Self::Error> {
        self.fetch_document_detail(source_id).await
    }
}
