// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Frozen client configuration and its resolved accessors

use std::time::Duration;

use reqwest::header::HeaderMap;

/// Default connection (dial) timeout
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(15);

/// Default wait for response headers
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(15);

/// Default number of idle pooled connections kept per host
pub const DEFAULT_MAX_IDLE_CONNS_PER_HOST: usize = 2;

/// Configuration snapshot owned by an [`HttpClient`](super::HttpClient)
///
/// Unset fields are empty or zero; the `resolved_*` accessors apply the
/// defaults.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Prefix joined verbatim with every endpoint. Validated on first use.
    pub base_url: String,
    /// User agent used when no User-Agent header is supplied
    pub user_agent: String,
    /// Headers sent with every request
    pub headers: HeaderMap,
    /// Connection (dial) timeout
    pub connection_timeout: Duration,
    /// Response-header timeout
    pub response_timeout: Duration,
    /// Maximum idle connections per host
    pub max_idle_conns_per_host: usize,
}

impl BuildConfig {
    /// Configured connection timeout, or 15s when unset
    pub fn resolved_connection_timeout(&self) -> Duration {
        if self.connection_timeout > Duration::ZERO {
            self.connection_timeout
        } else {
            DEFAULT_CONNECTION_TIMEOUT
        }
    }

    /// Configured response timeout, or 15s when unset
    pub fn resolved_response_timeout(&self) -> Duration {
        if self.response_timeout > Duration::ZERO {
            self.response_timeout
        } else {
            DEFAULT_RESPONSE_TIMEOUT
        }
    }

    /// Configured idle pool size per host, or 2 when unset
    pub fn resolved_max_idle_conns_per_host(&self) -> usize {
        if self.max_idle_conns_per_host > 0 {
            self.max_idle_conns_per_host
        } else {
            DEFAULT_MAX_IDLE_CONNS_PER_HOST
        }
    }

    /// Upper bound on a whole exchange: connect plus response wait
    pub fn overall_timeout(&self) -> Duration {
        self.resolved_connection_timeout() + self.resolved_response_timeout()
    }
}
