// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for httpkit
//!
//! Every failure in the request pipeline maps to exactly one variant, and
//! carries the request target where one is known. Nothing is retried: a
//! failed step is a failed call, and no partial [`Response`] is produced.
//!
//! [`Response`]: crate::Response

use thiserror::Error;

/// Result type alias for httpkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for httpkit
#[derive(Error, Debug)]
pub enum Error {
    /// The configured base URL is not an absolute request URI
    #[error("Invalid base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Request body could not be serialized
    #[error("Failed to encode request body (content-type '{content_type}'): {source}")]
    Encoding {
        content_type: String,
        #[source]
        source: serde_json::Error,
    },

    /// Method token or request target is structurally invalid
    #[error("Invalid request: {0}")]
    RequestConstruction(String),

    /// Connection, TLS or protocol fault while performing the exchange
    #[error("Transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The pooled transport could not be built
    #[error("Failed to initialize HTTP transport: {0}")]
    TransportInit(#[source] reqwest::Error),

    /// No response head arrived within the connect + response window
    #[error("No response from {url} within {duration_ms}ms")]
    Timeout { url: String, duration_ms: u64 },

    /// Response body could not be read to completion
    #[error("Failed to read response body from {url} (status {status}): {source}")]
    ResponseRead {
        url: String,
        status: u16,
        #[source]
        source: reqwest::Error,
    },

    /// Response body is not valid JSON for the requested shape
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response body is not valid UTF-8
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidText(#[from] std::str::Utf8Error),
}

impl Error {
    /// Create an invalid base URL error
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Error::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    /// Create a request construction error
    pub fn request_construction<S: Into<String>>(msg: S) -> Self {
        Error::RequestConstruction(msg.into())
    }

    /// Create a transport error for the given target
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Transport {
            url: url.into(),
            source,
        }
    }

    /// Create a response-header timeout error
    pub fn timeout(url: impl Into<String>, duration_ms: u64) -> Self {
        Error::Timeout {
            url: url.into(),
            duration_ms,
        }
    }

    /// Check if this is a transport-level fault (including timeouts)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::TransportInit(_) | Error::Timeout { .. }
        )
    }

    /// Check if this is a timeout, either ours or the transport's
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::ResponseRead { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::InvalidUrl { url, .. } => Some(url),
            Error::Transport { url, .. } => Some(url),
            Error::Timeout { url, .. } => Some(url),
            Error::ResponseRead { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_error() {
        let source = url::Url::parse("foobar.com").unwrap_err();
        let err = Error::invalid_url("foobar.com", source);

        assert_eq!(err.url(), Some("foobar.com"));
        assert!(!err.is_transport());
        assert!(err.to_string().starts_with("Invalid base URL 'foobar.com'"));
    }

    #[test]
    fn test_timeout_error() {
        let err = Error::timeout("https://example.com/api", 15000);

        assert!(err.is_timeout());
        assert!(err.is_transport());
        assert_eq!(err.url(), Some("https://example.com/api"));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_transport_init_error_has_no_url() {
        let source = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err = Error::TransportInit(source);

        assert!(err.is_transport());
        assert_eq!(err.url(), None);
        assert!(err.to_string().starts_with("Failed to initialize HTTP transport"));
    }

    #[test]
    fn test_decode_error() {
        let source = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        let err = Error::from(source);

        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.url(), None);
    }
}
