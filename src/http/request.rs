// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Outgoing request assembly

use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use super::body::encode_body;
use super::config::BuildConfig;
use super::header::merge_headers;
use crate::error::{Error, Result};

/// A fully resolved request, ready to hand to the transport
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Request method
    pub method: Method,
    /// Absolute request target
    pub url: Url,
    /// Merged headers
    pub headers: HeaderMap,
    /// Encoded body, if any
    pub body: Option<Bytes>,
}

impl PreparedRequest {
    /// Resolve method, target, headers and body against a configuration
    ///
    /// The target is `base_url` followed by `endpoint` with no slash
    /// normalization: `"https://a.com/" + "/x"` yields `"https://a.com//x"`.
    pub fn prepare<T>(
        config: &BuildConfig,
        method: &str,
        endpoint: &str,
        body: Option<&T>,
        headers: Option<&HeaderMap>,
    ) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let base_url = resolve_base_url(&config.base_url)?;
        let target = format!("{}{}", base_url, endpoint);

        let headers = merge_headers(&config.headers, headers, &config.user_agent);
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        let body = encode_body(content_type, body)?;

        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| Error::request_construction(format!("invalid method '{}'", method)))?;
        let url = Url::parse(&target).map_err(|e| {
            Error::request_construction(format!("invalid request target '{}': {}", target, e))
        })?;

        Ok(Self {
            method,
            url,
            headers,
            body,
        })
    }

    /// Get the URL as string
    pub fn url_str(&self) -> &str {
        self.url.as_str()
    }
}

/// Validate the base URL, returning it unchanged. An empty base URL is an
/// empty prefix.
fn resolve_base_url(base_url: &str) -> Result<&str> {
    if base_url.is_empty() {
        return Ok("");
    }
    Url::parse(base_url).map_err(|e| Error::invalid_url(base_url, e))?;
    Ok(base_url)
}
