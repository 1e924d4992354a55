// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fluent client builder

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::client::HttpClient;
use super::config::BuildConfig;

/// Collects client configuration and freezes it with [`build`](Self::build)
///
/// Nothing is validated here. A malformed base URL surfaces as
/// [`Error::InvalidUrl`](crate::Error::InvalidUrl) on the first request.
///
/// ```rust,no_run
/// use std::time::Duration;
/// use httpkit::ClientBuilder;
///
/// let client = ClientBuilder::new()
///     .base_url("https://api.example.com")
///     .user_agent("inventory-sync/2.1")
///     .connection_timeout(Duration::from_secs(5))
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    config: BuildConfig,
}

impl ClientBuilder {
    /// Create a builder with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. It is concatenated with the endpoint of every
    /// request; without one, endpoints must be absolute URLs.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Replace the headers sent with every request
    pub fn request_headers(mut self, headers: HeaderMap) -> Self {
        self.config.headers = headers;
        self
    }

    /// Add a single header sent with every request. Names or values that
    /// are not valid HTTP are skipped.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.config.headers.insert(name, value);
        }
        self
    }

    /// Set the maximum time to wait for a connection to be established
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.config.connection_timeout = timeout;
        self
    }

    /// Set the maximum time to wait for the response headers
    pub fn response_timeout(mut self, timeout: Duration) -> Self {
        self.config.response_timeout = timeout;
        self
    }

    /// Set the User-Agent used when neither the build headers nor the
    /// request headers carry one
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the maximum number of idle connections kept per host
    pub fn max_idle_conns_per_host(mut self, max: usize) -> Self {
        self.config.max_idle_conns_per_host = max;
        self
    }

    /// Freeze the configuration into a client
    pub fn build(self) -> HttpClient {
        HttpClient::new(self.config)
    }
}
