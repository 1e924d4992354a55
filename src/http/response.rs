// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use std::borrow::Cow;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// A completed exchange: status, headers and the fully read body
#[derive(Debug, Clone)]
pub struct Response {
    body: Bytes,
    status: String,
    status_code: u16,
    headers: HeaderMap,
}

impl Response {
    /// Create a new response
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            body,
            status: status_line(status),
            status_code: status.as_u16(),
            headers,
        }
    }

    /// Raw body bytes, unmodified
    pub fn bytes_body(&self) -> &Bytes {
        &self.body
    }

    /// Body as UTF-8 text; invalid sequences become U+FFFD
    pub fn string_body(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Body as UTF-8 text, failing on invalid sequences
    pub fn text(&self) -> Result<&str> {
        Ok(std::str::from_utf8(&self.body)?)
    }

    /// Decode the body as JSON into `T`. Re-parses on every call.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Status line text, e.g. "200 OK"
    ///
    /// Built from the numeric code and its canonical reason phrase, not the
    /// phrase the server sent: "200 Everything Fine" on the wire reads as
    /// "200 OK". Codes without a canonical phrase render as the bare number.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Numeric status code
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
