//! Service instance lifecycle: create, bind a service key, delete.

use serde_json::{Value, json};

use super::auth::AuthToken;
use super::responses::{self, CreateInstanceResponse, ServiceKeyResponse};
use super::transport::ApiTransport;
use super::{ApiBase, require_reference};
use crate::error::AddonError;

/// Creates, binds, and deletes service instances.
pub struct InstanceLifecycle<'a> {
    transport: &'a dyn ApiTransport,
    base: ApiBase<'a>,
}

impl<'a> InstanceLifecycle<'a> {
    /// Lifecycle manager bound to one transport and endpoint.
    pub fn new(transport: &'a dyn ApiTransport, base: ApiBase<'a>) -> Self {
        Self { transport, base }
    }

    /// Create a service instance and return its GUID.
    ///
    /// Not idempotent: uniqueness of `name` is the platform's call, never
    /// enforced here. Calling twice may create two instances or fail.
    pub async fn create_instance(
        &self,
        token: &AuthToken,
        name: &str,
        plan_guid: &str,
        space_guid: &str,
    ) -> Result<String, AddonError> {
        let url = self.base.service_instances();
        let body = json!({
            "name": name,
            "space_guid": space_guid,
            "service_plan_guid": plan_guid,
        });

        let response = self.transport.post_json(&url, token.as_str(), &body).await?;
        if !response.is_success() {
            return Err(AddonError::Provisioning(format!(
                "service instance creation returned status {}",
                response.status
            )));
        }

        let created: CreateInstanceResponse =
            responses::parse(&response.body, AddonError::Provisioning)?;
        let guid = require_reference(
            created.metadata.guid,
            "service instance GUID",
            AddonError::Provisioning,
        )?;
        tracing::info!(%guid, "service instance created");
        Ok(guid)
    }

    /// Bind a service key against the instance and return the credentials
    /// object nested in the response entity.
    pub async fn create_service_key(
        &self,
        token: &AuthToken,
        name: &str,
        instance_guid: &str,
    ) -> Result<Value, AddonError> {
        let url = self.base.service_keys();
        let body = json!({
            "name": name,
            "service_instance_guid": instance_guid,
        });

        let response = self.transport.post_json(&url, token.as_str(), &body).await?;
        if !response.is_success() {
            return Err(AddonError::Provisioning(format!(
                "service key creation returned status {}",
                response.status
            )));
        }

        let key: ServiceKeyResponse = responses::parse(&response.body, AddonError::Provisioning)?;
        tracing::info!("service key created");
        Ok(key.entity.credentials)
    }

    /// Fire-and-forget delete: recursive plus async, so a 2xx only means
    /// the platform accepted the request, not that the instance is already
    /// gone. Returns the raw HTTP status.
    pub async fn delete_instance(
        &self,
        token: &AuthToken,
        instance_guid: &str,
    ) -> Result<u16, AddonError> {
        let url = self.base.service_instance_delete(instance_guid);

        let response = self.transport.delete(&url, token.as_str()).await?;
        if !response.is_success() {
            return Err(AddonError::Provisioning(format!(
                "service instance deletion returned status {}",
                response.status
            )));
        }

        tracing::info!(status = response.status, "service instance delete accepted");
        Ok(response.status)
    }
}
