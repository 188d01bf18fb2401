//! Resolution of typed configuration from the host-supplied manifest and
//! developer parameters.

use std::collections::HashMap;

use crate::constants::{
    DEFAULT_TOKEN_URL, PARAM_API_URL, PARAM_API_VERSION, PARAM_AUTH_URL, PARAM_INSTANCE_NAME,
    PARAM_PASSWORD, PARAM_SERVICE_LABEL, PARAM_SPACE, PARAM_USERNAME,
};
use crate::error::AddonError;
use crate::types::AddonRequest;

/// Per-operation configuration, resolved fresh for every workflow invocation
/// and immutable afterwards. Every field is non-empty by construction: a
/// missing or blank parameter fails resolution before any network call, so
/// an absent value can never leak into a request URL as an empty segment.
#[derive(Debug, Clone)]
pub struct DeveloperOptions {
    /// Cloud Controller base URL.
    pub api_url: String,
    /// API version path segment (`v2`).
    pub api_version: String,
    /// Platform username for the token grant.
    pub username: String,
    /// Platform password for the token grant.
    pub password: String,
    /// Catalog label of the target service.
    pub service_label: String,
    /// Space the instance lives under.
    pub space: String,
    /// Desired (or existing) service instance name.
    pub instance_name: String,
    /// Token endpoint; defaults to the platform UAA login server.
    pub auth_url: String,
}

impl DeveloperOptions {
    /// Resolve options from a request, developer parameters taking
    /// precedence over manifest properties key-for-key.
    pub fn resolve(request: &AddonRequest) -> Result<Self, AddonError> {
        let params = &request.developer_parameters;
        let props = &request.manifest.properties;

        Ok(Self {
            api_url: required(params, props, PARAM_API_URL)?,
            api_version: required(params, props, PARAM_API_VERSION)?,
            username: required(params, props, PARAM_USERNAME)?,
            password: required(params, props, PARAM_PASSWORD)?,
            service_label: required(params, props, PARAM_SERVICE_LABEL)?,
            space: required(params, props, PARAM_SPACE)?,
            instance_name: required(params, props, PARAM_INSTANCE_NAME)?,
            auth_url: optional(params, props, PARAM_AUTH_URL)
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
        })
    }
}

fn required(
    params: &HashMap<String, String>,
    props: &HashMap<String, String>,
    key: &str,
) -> Result<String, AddonError> {
    match params.get(key).or_else(|| props.get(key)) {
        None => Err(AddonError::Configuration(format!(
            "missing required parameter `{key}`"
        ))),
        Some(value) => {
            let value = value.trim();
            if value.is_empty() {
                Err(AddonError::Configuration(format!(
                    "parameter `{key}` must not be empty"
                )))
            } else {
                Ok(value.to_string())
            }
        }
    }
}

fn optional(
    params: &HashMap<String, String>,
    props: &HashMap<String, String>,
    key: &str,
) -> Option<String> {
    params
        .get(key)
        .or_else(|| props.get(key))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
