//! Error types for citation resolution

use thiserror::Error;

/// A citation number with no entry in the citation map
///
/// Callers render a neutral or disabled marker for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Citation [{number}] not found")]
pub struct NotFound {
    /// The number that was requested
    pub number: u32,
}

/// Failure talking to the document or report service
///
/// Callers show an "unavailable" state; the rest of the render is unaffected.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection error (network, DNS, refused)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request did not finish within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The service answered successfully but reported an error in its body
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The source id is empty
    #[error("Invalid source id: {0:?}")]
    InvalidSourceId(String),

    /// The client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) => FetchError::Status {
                    status: status.as_u16(),
                    body: String::new(),
                },
                None => FetchError::Connection(e.to_string()),
            }
        } else {
            FetchError::Connection(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(format!("JSON parsing error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(NotFound { number: 4 }.to_string(), "Citation [4] not found");
    }

    #[test]
    fn test_status_message() {
        let err = FetchError::Status {
            status: 500,
            body: "Failed to get documents".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: Failed to get documents");
    }

    #[test]
    fn test_json_error_is_decode() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
