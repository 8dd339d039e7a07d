//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ParseError`] - Malformed `data.txt`-style metadata files
//! - [`ConfigError`] - Embedded TOML configuration that fails to decode

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
///
/// At the tree level this is fatal to a page load; at the metadata level
/// the owning group is dropped and the load continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to build the request URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    /// Network request failed (CORS, DNS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response: {0}")]
    ResponseReadFailed(String),
    /// Response body was not the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
    /// Request was cancelled because its view went away
    #[error("Request aborted")]
    Aborted,
}

impl FetchError {
    /// Whether this error came from cancelling the request ourselves.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Errors raised while mapping metadata lines to record fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer non-blank lines than the listing requires
    #[error("insufficient lines: expected at least {expected}, found {found}")]
    TooFewLines { expected: usize, found: usize },
    /// Category line outside the allowed set
    #[error("invalid category \"{0}\"")]
    InvalidCategory(String),
}

/// Errors decoding the embedded site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {file}: {source}")]
    Toml {
        file: &'static str,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid content host: {0}")]
    InvalidHost(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::HttpError(403).to_string(), "HTTP error: 403");
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
        assert!(FetchError::Aborted.is_aborted());
        assert!(!FetchError::HttpError(500).is_aborted());
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseError::TooFewLines {
            expected: 4,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "insufficient lines: expected at least 4, found 2"
        );
        assert_eq!(
            ParseError::InvalidCategory("Sports".into()).to_string(),
            "invalid category \"Sports\""
        );
    }
}
