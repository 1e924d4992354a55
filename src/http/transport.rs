// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Connection-pooling transport

use std::time::Duration;

use reqwest::Client;

use super::config::BuildConfig;

/// Pooled transport shared by every request of one [`HttpClient`](super::HttpClient)
///
/// Built once from the resolved configuration and never rebuilt.
#[derive(Debug)]
pub struct Transport {
    client: Client,
    timeout: Duration,
    connect_timeout: Duration,
    response_header_timeout: Duration,
    max_idle_per_host: usize,
}

impl Transport {
    /// Build a transport from a configuration snapshot
    pub fn new(config: &BuildConfig) -> reqwest::Result<Self> {
        let timeout = config.overall_timeout();
        let connect_timeout = config.resolved_connection_timeout();
        let response_header_timeout = config.resolved_response_timeout();
        let max_idle_per_host = config.resolved_max_idle_conns_per_host();

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .pool_max_idle_per_host(max_idle_per_host)
            .build()?;

        tracing::debug!(
            timeout_ms = timeout.as_millis() as u64,
            connect_timeout_ms = connect_timeout.as_millis() as u64,
            response_header_timeout_ms = response_header_timeout.as_millis() as u64,
            max_idle_per_host,
            "Initialized HTTP transport"
        );

        Ok(Self {
            client,
            timeout,
            connect_timeout,
            response_header_timeout,
            max_idle_per_host,
        })
    }

    /// Underlying pooled client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Overall bound on one exchange (connect timeout + response timeout)
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Dial timeout
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Resolved response timeout. The executor grants the response head
    /// the part of [`timeout`](Self::timeout) the dial did not use, so the
    /// head wait is never shorter than this.
    pub fn response_header_timeout(&self) -> Duration {
        self.response_header_timeout
    }

    /// Idle connections kept per host
    pub fn max_idle_per_host(&self) -> usize {
        self.max_idle_per_host
    }
}
