// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # httpkit - Configurable HTTP Client
//!
//! A small facade over a pooled HTTP transport. Build a client once, then
//! issue GET/PUT/POST/PATCH/DELETE requests and get back a uniform
//! [`Response`].
//!
//! ## Features
//!
//! - Base URL prefixing for every endpoint
//! - Layered headers: request > build > default User-Agent
//! - Connection and response timeouts with sane defaults
//! - Lazily created, shared connection pool
//! - JSON request bodies and JSON response decoding
//!
//! ## Example
//!
//! ```rust,no_run
//! use httpkit::HttpClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Status {
//!     #[serde(rename = "Response")]
//!     response: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::builder()
//!         .base_url("https://api.example.com")
//!         .header("Accept", "application/json")
//!         .build();
//!
//!     let response = client.get("/status", None).await?;
//!     let status: Status = response.json()?;
//!     println!("{} -> {}", response.status(), status.response);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;

// Re-exports for convenience

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{BuildConfig, ClientBuilder, HttpClient, PreparedRequest, Response, Transport};
pub use http::{encode_body, merge_headers};
pub use http::{headers, CONTENT_TYPE_JSON, DEFAULT_KEEP_ALIVE, DEFAULT_USER_AGENT};
pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// httpkit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
