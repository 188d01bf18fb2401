//! The contract between the marketplace host and this crate: what a request
//! carries in, and what every operation hands back out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Operator-supplied add-on manifest. Its properties act as defaults for the
/// developer parameters; a developer-entered value wins key-for-key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddonManifest {
    /// Display name of the add-on as registered with the host.
    pub name: String,
    /// Default configuration values (endpoint, API version, and so on).
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

/// A provision, deprovision, or test request as handed over by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonRequest {
    /// The add-on manifest registered with the host.
    pub manifest: AddonManifest,
    /// Parameters the developer entered when requesting the add-on.
    #[serde(default)]
    pub developer_parameters: HashMap<String, String>,
}

/// Terminal outcome of a deprovision or test operation.
///
/// Built only through [`OperationResult::success`] and
/// [`OperationResult::failure`], so a failure always carries a message and a
/// success never carries an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult {
    /// Whether the operation completed.
    pub is_success: bool,
    /// Human-readable outcome shown to the developer.
    pub end_user_message: String,
}

impl OperationResult {
    /// Successful outcome with a user-facing message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            end_user_message: message.into(),
        }
    }

    /// Failed outcome with a user-facing message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            end_user_message: message.into(),
        }
    }
}

/// Terminal outcome of a provision operation. On success the connection
/// data is the flattened credential string; on failure it stays empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionResult {
    /// Whether the instance was provisioned and bound.
    pub is_success: bool,
    /// Human-readable outcome shown to the developer.
    pub end_user_message: String,
    /// Opaque connection descriptor handed back to the host.
    pub connection_data: String,
}

impl ProvisionResult {
    /// Successful outcome carrying the connection descriptor.
    pub fn success(connection_data: impl Into<String>) -> Self {
        Self {
            is_success: true,
            end_user_message: String::new(),
            connection_data: connection_data.into(),
        }
    }

    /// Failed outcome with a user-facing message and no connection data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            end_user_message: message.into(),
            connection_data: String::new(),
        }
    }
}
