//! The three public workflows: provision, deprovision, test.
//!
//! Each is a fixed linear chain of calls with no branching except on error.
//! The first failing step aborts the rest and is converted here into a
//! failed result, so no error ever escapes to the host. No rollback is
//! attempted on partial failure: if instance creation succeeds and key
//! creation fails, the instance is left behind for the platform operator.

use std::sync::Arc;

use crate::cloud::ApiBase;
use crate::cloud::auth::authenticate;
use crate::cloud::lifecycle::InstanceLifecycle;
use crate::cloud::locator::ResourceLocator;
use crate::cloud::transport::{ApiTransport, HttpTransport};
use crate::config::DeveloperOptions;
use crate::credentials::format_connection_data;
use crate::error::AddonError;
use crate::types::{AddonRequest, OperationResult, ProvisionResult};

/// Entry point the marketplace host drives.
///
/// Holds no per-request state: every operation resolves its own options,
/// token, and GUIDs from scratch, so concurrent invocations for different
/// requests cannot interfere.
pub struct CloudAddon {
    transport: Arc<dyn ApiTransport>,
}

impl CloudAddon {
    /// Add-on backed by the shared pooled HTTP transport.
    pub fn new() -> Self {
        Self {
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Add-on backed by a caller-supplied transport (tests, alternate
    /// stacks).
    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Provision a service instance, bind a service key, and return the
    /// flattened connection data.
    pub async fn provision(&self, request: &AddonRequest) -> ProvisionResult {
        match self.run_provision(request).await {
            Ok(connection_data) => {
                tracing::info!("provisioned successfully");
                ProvisionResult::success(connection_data)
            }
            Err(err) => {
                tracing::error!(error = %err, "provision failed");
                ProvisionResult::failure(format!("Provision error: {err}"))
            }
        }
    }

    /// Delete an existing service instance by name. Fire-and-forget: the
    /// platform may complete the deletion after this returns.
    pub async fn deprovision(&self, request: &AddonRequest) -> OperationResult {
        match self.run_deprovision(request).await {
            Ok(status) => {
                tracing::info!(status, "deprovisioned successfully");
                OperationResult::success("Service instance deletion accepted")
            }
            Err(err) => {
                tracing::error!(error = %err, "deprovision failed");
                OperationResult::failure(format!("Deprovision error: {err}"))
            }
        }
    }

    /// Validate connectivity and catalog reachability without touching any
    /// instance.
    pub async fn test(&self, request: &AddonRequest) -> OperationResult {
        match self.run_test(request).await {
            Ok(()) => OperationResult::success("Add-on tested successfully"),
            Err(err) => {
                tracing::error!(error = %err, "test failed");
                OperationResult::failure(format!("Test error: {err}"))
            }
        }
    }

    async fn run_provision(&self, request: &AddonRequest) -> Result<String, AddonError> {
        let options = DeveloperOptions::resolve(request)?;
        let token = authenticate(
            self.transport.as_ref(),
            &options.auth_url,
            &options.username,
            &options.password,
        )
        .await?;

        let base = ApiBase::from_options(&options);
        let locator = ResourceLocator::new(self.transport.as_ref(), base);
        let plans_url = locator
            .find_service_plans_url(&token, &options.service_label)
            .await?;
        let plan_guid = locator.find_service_plan_guid(&token, &plans_url).await?;
        let space_guid = locator.find_space_guid(&token, &options.space).await?;

        let lifecycle = InstanceLifecycle::new(self.transport.as_ref(), base);
        let instance_guid = lifecycle
            .create_instance(&token, &options.instance_name, &plan_guid, &space_guid)
            .await?;
        let credentials = lifecycle
            .create_service_key(&token, &options.instance_name, &instance_guid)
            .await?;

        Ok(format_connection_data(&credentials))
    }

    async fn run_deprovision(&self, request: &AddonRequest) -> Result<u16, AddonError> {
        let options = DeveloperOptions::resolve(request)?;
        let token = authenticate(
            self.transport.as_ref(),
            &options.auth_url,
            &options.username,
            &options.password,
        )
        .await?;

        let base = ApiBase::from_options(&options);
        let locator = ResourceLocator::new(self.transport.as_ref(), base);
        let instance_guid = locator
            .find_service_instance_guid(&token, &options.instance_name)
            .await?;

        let lifecycle = InstanceLifecycle::new(self.transport.as_ref(), base);
        lifecycle.delete_instance(&token, &instance_guid).await
    }

    async fn run_test(&self, request: &AddonRequest) -> Result<(), AddonError> {
        let options = DeveloperOptions::resolve(request)?;
        let token = authenticate(
            self.transport.as_ref(),
            &options.auth_url,
            &options.username,
            &options.password,
        )
        .await?;

        let base = ApiBase::from_options(&options);
        let locator = ResourceLocator::new(self.transport.as_ref(), base);
        locator
            .find_service_plans_url(&token, &options.service_label)
            .await?;
        Ok(())
    }
}

impl Default for CloudAddon {
    fn default() -> Self {
        Self::new()
    }
}
