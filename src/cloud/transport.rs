//! HTTP transport behind the Cloud Controller operations.
//!
//! The trait exists so workflows can run against a recording double in
//! tests; production code goes through a shared pooled reqwest client. The
//! transport reports the raw status and body and leaves status
//! interpretation to each caller, because the error kind differs by
//! component (auth, lookup, lifecycle).

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::AddonError;

/// Shared HTTP client with connection pooling, so concurrent workflow
/// invocations reuse connections instead of exhausting sockets.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .pool_idle_timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Raw response handed to the typed layers.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The minimal HTTP surface the Cloud Controller operations need.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Bearer-authenticated GET.
    async fn get(&self, url: &str, token: &str) -> Result<TransportResponse, AddonError>;

    /// Bearer-authenticated POST with a JSON body.
    async fn post_json(
        &self,
        url: &str,
        token: &str,
        body: &Value,
    ) -> Result<TransportResponse, AddonError>;

    /// POST with a form-urlencoded body and an explicit Authorization value.
    /// Used for the token grant; the body carries credentials in cleartext
    /// and must never be logged.
    async fn post_form(
        &self,
        url: &str,
        authorization: &str,
        body: String,
    ) -> Result<TransportResponse, AddonError>;

    /// Bearer-authenticated DELETE.
    async fn delete(&self, url: &str, token: &str) -> Result<TransportResponse, AddonError>;
}

/// reqwest-backed transport used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl HttpTransport {
    /// New transport over the shared pooled client.
    pub fn new() -> Self {
        Self
    }

    async fn run(
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<TransportResponse, AddonError> {
        let response = request
            .send()
            .await
            .map_err(|e| AddonError::Transport(format!("request to {url} failed: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AddonError::Transport(format!("failed reading response from {url}: {e}")))?;
        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, url: &str, token: &str) -> Result<TransportResponse, AddonError> {
        tracing::debug!(%url, "GET");
        let request = HTTP_CLIENT
            .get(url)
            .header("authorization", format!("bearer {token}"));
        Self::run(request, url).await
    }

    async fn post_json(
        &self,
        url: &str,
        token: &str,
        body: &Value,
    ) -> Result<TransportResponse, AddonError> {
        tracing::debug!(%url, "POST");
        let request = HTTP_CLIENT
            .post(url)
            .header("authorization", format!("bearer {token}"))
            .json(body);
        Self::run(request, url).await
    }

    async fn post_form(
        &self,
        url: &str,
        authorization: &str,
        body: String,
    ) -> Result<TransportResponse, AddonError> {
        // Only the URL is logged: the form body carries credentials.
        tracing::debug!(%url, "POST (form)");
        let request = HTTP_CLIENT
            .post(url)
            .header("authorization", authorization)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body);
        Self::run(request, url).await
    }

    async fn delete(&self, url: &str, token: &str) -> Result<TransportResponse, AddonError> {
        tracing::debug!(%url, "DELETE");
        let request = HTTP_CLIENT
            .delete(url)
            .header("authorization", format!("bearer {token}"));
        Self::run(request, url).await
    }
}
