//! Typed response shapes for the Cloud Controller endpoints this crate
//! touches. Required fields are non-optional so a missing field fails at
//! deserialization with a named error instead of surfacing later as an
//! empty path segment.

use serde::Deserialize;
use serde_json::Value;

use crate::error::AddonError;

/// `POST /oauth/token` — only the access token matters here. Kept optional
/// so its absence maps to a precise authentication error rather than a
/// generic parse failure.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Bearer token, when the grant succeeded.
    pub access_token: Option<String>,
}

/// `GET /{version}/services?q=label:…`
#[derive(Debug, Deserialize)]
pub struct ServiceListResponse {
    /// Total matches reported by the platform.
    #[serde(default)]
    pub total_results: u64,
    /// Matching catalog entries, in platform order.
    #[serde(default)]
    pub resources: Vec<ServiceResource>,
}

/// One catalog entry.
#[derive(Debug, Deserialize)]
pub struct ServiceResource {
    /// Entity payload of the entry.
    pub entity: ServiceEntity,
}

/// Entity payload of a catalog entry.
#[derive(Debug, Deserialize)]
pub struct ServiceEntity {
    /// Platform-relative URL of the entry's service plans.
    pub service_plans_url: String,
}

/// Plan, space, and instance queries all reduce to a list of GUID-bearing
/// resources.
#[derive(Debug, Deserialize)]
pub struct GuidListResponse {
    /// Matching resources, in platform order.
    #[serde(default)]
    pub resources: Vec<GuidResource>,
}

/// One GUID-bearing resource.
#[derive(Debug, Deserialize)]
pub struct GuidResource {
    /// Resource metadata.
    pub metadata: ResourceMetadata,
}

/// Metadata block common to Cloud Controller resources.
#[derive(Debug, Deserialize)]
pub struct ResourceMetadata {
    /// Platform GUID of the resource.
    pub guid: String,
}

/// `POST /{version}/service_instances`
#[derive(Debug, Deserialize)]
pub struct CreateInstanceResponse {
    /// Metadata of the created instance.
    pub metadata: ResourceMetadata,
}

/// `POST /{version}/service_keys`
#[derive(Debug, Deserialize)]
pub struct ServiceKeyResponse {
    /// Entity payload of the created key.
    pub entity: ServiceKeyEntity,
}

/// Entity payload of a service key.
#[derive(Debug, Deserialize)]
pub struct ServiceKeyEntity {
    /// Bindable credentials object, read once to build the connection data.
    pub credentials: Value,
}

/// Deserialize `body` as `T`, mapping any failure through `on_error` so each
/// caller keeps its own error kind.
pub fn parse<T: serde::de::DeserializeOwned>(
    body: &str,
    on_error: fn(String) -> AddonError,
) -> Result<T, AddonError> {
    serde_json::from_str(body).map_err(|e| on_error(format!("malformed response: {e}")))
}
