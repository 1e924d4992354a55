// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client layer for httpkit
//!
//! A [`ClientBuilder`] collects configuration, [`ClientBuilder::build`]
//! freezes it into an [`HttpClient`], and every verb call runs the same
//! pipeline: resolve the target, merge headers, encode the body, send over
//! a lazily created pooled [`Transport`], and read the body into a
//! [`Response`].

mod body;
mod builder;
mod client;
mod config;
mod header;
mod request;
mod response;
mod transport;

pub use body::encode_body;
pub use builder::ClientBuilder;
pub use client::HttpClient;
pub use config::BuildConfig;
pub use header::merge_headers;
pub use request::PreparedRequest;
pub use response::Response;
pub use transport::Transport;

/// Default user agent string, used when neither the request, the build
/// headers nor the builder name one
pub const DEFAULT_USER_AGENT: &str = "httpkit";

/// Default value for the Connection header
pub const DEFAULT_KEEP_ALIVE: &str = "Keep-Alive";

/// JSON media type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Standard HTTP header field names
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const AUTHORIZATION: &str = "authorization";
    pub const CONTENT_LENGTH: &str = "content-length";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const USER_AGENT: &str = "user-agent";
    pub const CONNECTION: &str = "connection";
}
