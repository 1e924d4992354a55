// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::Serialize;
use tokio::sync::OnceCell;

use super::builder::ClientBuilder;
use super::config::BuildConfig;
use super::request::PreparedRequest;
use super::response::Response;
use super::transport::Transport;
use crate::error::{Error, Result};

/// HTTP client bound to a frozen [`BuildConfig`]
///
/// Cheap to clone. Clones share the configuration and the pooled
/// transport, which is created on first use and exactly once, however many
/// tasks race on that first use.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: Arc<BuildConfig>,
    transport: Arc<OnceCell<Transport>>,
}

impl HttpClient {
    pub(crate) fn new(config: BuildConfig) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(OnceCell::new()),
        }
    }

    /// Start configuring a new client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get client configuration
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Get the pooled transport, creating it on first call
    pub async fn transport(&self) -> Result<&Transport> {
        self.transport
            .get_or_try_init(|| async {
                Transport::new(&self.config).map_err(Error::TransportInit)
            })
            .await
    }

    /// Execute a GET request
    pub async fn get(&self, endpoint: &str, headers: Option<&HeaderMap>) -> Result<Response> {
        self.request::<()>(Method::GET.as_str(), endpoint, None, headers)
            .await
    }

    /// Execute a PUT request with a JSON-encoded body
    pub async fn put<T>(&self, endpoint: &str, body: &T, headers: Option<&HeaderMap>) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        self.request(Method::PUT.as_str(), endpoint, Some(body), headers)
            .await
    }

    /// Execute a POST request with a JSON-encoded body
    pub async fn post<T>(&self, endpoint: &str, body: &T, headers: Option<&HeaderMap>) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        self.request(Method::POST.as_str(), endpoint, Some(body), headers)
            .await
    }

    /// Execute a PATCH request with a JSON-encoded body
    pub async fn patch<T>(&self, endpoint: &str, body: &T, headers: Option<&HeaderMap>) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        self.request(Method::PATCH.as_str(), endpoint, Some(body), headers)
            .await
    }

    /// Execute a DELETE request
    pub async fn delete(&self, endpoint: &str, headers: Option<&HeaderMap>) -> Result<Response> {
        self.request::<()>(Method::DELETE.as_str(), endpoint, None, headers)
            .await
    }

    /// Execute a request with an arbitrary method
    pub async fn request<T>(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<&T>,
        headers: Option<&HeaderMap>,
    ) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let prepared = self.prepare(method, endpoint, body, headers)?;
        self.execute(prepared).await
    }

    /// Resolve a request against this client's configuration without
    /// sending it
    pub fn prepare<T>(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<&T>,
        headers: Option<&HeaderMap>,
    ) -> Result<PreparedRequest>
    where
        T: Serialize + ?Sized,
    {
        PreparedRequest::prepare(&self.config, method, endpoint, body, headers)
    }

    /// Send a prepared request and read the whole response body
    pub async fn execute(&self, request: PreparedRequest) -> Result<Response> {
        let target = request.url.to_string();
        let transport = self.transport().await?;
        let start = Instant::now();

        tracing::debug!(method = %request.method, url = %target, "Sending request");

        let mut builder = transport
            .client()
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        // send() covers dial, write and the wait for the response head. The
        // dial is bounded by connect_timeout inside the transport, so the
        // head wait gets whatever the connect left of the overall window.
        let head_timeout = transport.timeout();
        let response = match tokio::time::timeout(head_timeout, builder.send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                tracing::warn!(url = %target, error = %e, "Request failed");
                return Err(Error::transport(target, e));
            }
            Err(_) => {
                tracing::warn!(
                    url = %target,
                    timeout_ms = head_timeout.as_millis() as u64,
                    "Timed out waiting for response headers"
                );
                return Err(Error::timeout(target, head_timeout.as_millis() as u64));
            }
        };

        let status = response.status();
        let headers = response.headers().clone();

        // Consumes the response; the connection goes back to the pool or is
        // dropped whether or not the read succeeds.
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %target, status = status.as_u16(), error = %e, "Failed to read response body");
                return Err(Error::ResponseRead {
                    url: target,
                    status: status.as_u16(),
                    source: e,
                });
            }
        };

        tracing::debug!(
            url = %target,
            status = status.as_u16(),
            body_len = body.len(),
            time_ms = start.elapsed().as_millis() as u64,
            "Response"
        );

        Ok(Response::new(status, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_transport_created_once() {
        let client = HttpClient::builder()
            .connection_timeout(Duration::from_secs(2))
            .build();

        let first = client.transport().await.unwrap() as *const Transport;
        let second = client.transport().await.unwrap() as *const Transport;
        assert_eq!(first, second);

        let cloned = client.clone();
        let third = cloned.transport().await.unwrap() as *const Transport;
        assert_eq!(first, third);
    }

    #[tokio::test]
    async fn test_transport_uses_resolved_config() {
        let client = HttpClient::builder()
            .connection_timeout(Duration::from_secs(2))
            .response_timeout(Duration::from_secs(3))
            .build();
        let transport = client.transport().await.unwrap();

        assert_eq!(transport.timeout(), Duration::from_secs(5));
        assert_eq!(transport.connect_timeout(), Duration::from_secs(2));
        assert_eq!(transport.response_header_timeout(), Duration::from_secs(3));
        assert_eq!(transport.max_idle_per_host(), 2);
    }

    #[tokio::test]
    async fn test_invalid_base_url_fails_before_transport() {
        let client = HttpClient::builder().base_url("foobar.com").build();

        let err = client.get("/api", None).await.unwrap_err();

        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(client.transport.get().is_none());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::builder()
            .base_url(format!("http://{}", addr))
            .connection_timeout(Duration::from_secs(1))
            .build();

        let err = client.get("/", None).await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.url().unwrap().starts_with("http://127.0.0.1"));
    }

    #[tokio::test]
    async fn test_slow_connect_gets_full_connection_timeout() {
        // A listener with a full accept backlog leaves further connects hanging.
        let socket = tokio::net::TcpSocket::new_v4().unwrap();
        socket.bind("127.0.0.1:0".parse().unwrap()).unwrap();
        let listener = socket.listen(0).unwrap();
        let addr = listener.local_addr().unwrap();

        let mut backlog = Vec::new();
        for _ in 0..8 {
            let connect = tokio::net::TcpStream::connect(addr);
            if let Ok(Ok(stream)) = tokio::time::timeout(Duration::from_millis(100), connect).await {
                backlog.push(stream);
            }
        }

        let client = HttpClient::builder()
            .base_url(format!("http://{}", addr))
            .connection_timeout(Duration::from_secs(1))
            .response_timeout(Duration::from_millis(200))
            .build();

        let start = Instant::now();
        let err = client.get("/", None).await.unwrap_err();
        let elapsed = start.elapsed();

        assert!(err.is_transport());
        assert!(err.is_timeout());
        assert!(elapsed >= Duration::from_millis(900), "gave up after {:?}", elapsed);
        drop(backlog);
    }
}
