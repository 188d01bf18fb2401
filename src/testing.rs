//! Test doubles shared by the unit tests: a recording transport and a
//! baseline request.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::cloud::transport::{ApiTransport, TransportResponse};
use crate::error::AddonError;
use crate::types::{AddonManifest, AddonRequest};

/// One call seen by the mock, in order. `authorization` is the raw bearer
/// token for authenticated calls and the full header value for the token
/// grant.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub authorization: String,
    pub body: Option<String>,
}

/// Queue-based [`ApiTransport`] double: responses are consumed in call
/// order, every call is recorded, and running past the queue yields a
/// transport error instead of a panic.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response.
    pub fn enqueue(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(TransportResponse {
            status,
            body: body.to_string(),
        });
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(
        &self,
        method: &'static str,
        url: &str,
        authorization: &str,
        body: Option<String>,
    ) -> Result<TransportResponse, AddonError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url: url.to_string(),
            authorization: authorization.to_string(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AddonError::Transport(format!("no mock response queued for {method} {url}")))
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get(&self, url: &str, token: &str) -> Result<TransportResponse, AddonError> {
        self.record("GET", url, token, None)
    }

    async fn post_json(
        &self,
        url: &str,
        token: &str,
        body: &Value,
    ) -> Result<TransportResponse, AddonError> {
        self.record("POST", url, token, Some(body.to_string()))
    }

    async fn post_form(
        &self,
        url: &str,
        authorization: &str,
        body: String,
    ) -> Result<TransportResponse, AddonError> {
        self.record("POST", url, authorization, Some(body))
    }

    async fn delete(&self, url: &str, token: &str) -> Result<TransportResponse, AddonError> {
        self.record("DELETE", url, token, None)
    }
}

/// A request with the full required parameter set, manifest carrying the
/// endpoint defaults and the developer entering the rest.
pub fn request() -> AddonRequest {
    let manifest = AddonManifest {
        name: "db-service-addon".to_string(),
        properties: HashMap::from([
            ("api_url".to_string(), "https://api.example.com".to_string()),
            ("api_version".to_string(), "v2".to_string()),
        ]),
    };

    AddonRequest {
        manifest,
        developer_parameters: HashMap::from([
            ("username".to_string(), "dev@example.com".to_string()),
            ("password".to_string(), "p@ss word".to_string()),
            ("service_label".to_string(), "db-service".to_string()),
            ("space".to_string(), "dev-space".to_string()),
            ("instance_name".to_string(), "orders-db".to_string()),
        ]),
    }
}
