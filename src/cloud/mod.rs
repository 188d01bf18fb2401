//! Cloud Controller plumbing: the transport seam, typed response shapes,
//! and the authenticated operations built on top of them.

pub mod auth;
pub mod lifecycle;
pub mod locator;
pub mod responses;
pub mod transport;

use crate::config::DeveloperOptions;
use crate::error::AddonError;

/// URL construction for one Cloud Controller endpoint and API version.
///
/// Values are threaded per invocation instead of living in process-wide
/// state, so concurrent workflows against different endpoints cannot
/// interfere.
#[derive(Debug, Clone, Copy)]
pub struct ApiBase<'a> {
    api_url: &'a str,
    api_version: &'a str,
}

impl<'a> ApiBase<'a> {
    /// Base for the given endpoint and version.
    pub fn new(api_url: &'a str, api_version: &'a str) -> Self {
        Self { api_url, api_version }
    }

    /// Base taken from resolved developer options.
    pub fn from_options(options: &'a DeveloperOptions) -> Self {
        Self::new(&options.api_url, &options.api_version)
    }

    /// Catalog query filtered by service label.
    pub fn services_by_label(&self, label: &str) -> String {
        format!("{}/{}/services?q=label:{}", self.api_url, self.api_version, label)
    }

    /// Turn an absolute path returned by the platform (such as a
    /// `service_plans_url`) into a full URL.
    pub fn resolve_path(&self, absolute_path: &str) -> String {
        format!("{}{}", self.api_url, absolute_path)
    }

    /// Space query filtered by name.
    pub fn spaces_by_name(&self, name: &str) -> String {
        format!("{}/{}/spaces?q=name:{}", self.api_url, self.api_version, name)
    }

    /// Service instance query filtered by name.
    pub fn service_instances_by_name(&self, name: &str) -> String {
        format!(
            "{}/{}/service_instances?q=name:{}",
            self.api_url, self.api_version, name
        )
    }

    /// Collection URL for creating service instances.
    pub fn service_instances(&self) -> String {
        format!("{}/{}/service_instances", self.api_url, self.api_version)
    }

    /// Collection URL for creating service keys.
    pub fn service_keys(&self) -> String {
        format!("{}/{}/service_keys", self.api_url, self.api_version)
    }

    /// Delete URL for one instance: recursive so dependent bindings go with
    /// it, async so the platform may return before deletion completes.
    pub fn service_instance_delete(&self, guid: &str) -> String {
        format!(
            "{}/{}/service_instances/{}?recursive=true&async=true",
            self.api_url, self.api_version, guid
        )
    }
}

/// Reject references that deserialized to an empty string before they can
/// become a path segment in a follow-up call.
pub(crate) fn require_reference(
    value: String,
    what: &str,
    on_error: fn(String) -> AddonError,
) -> Result<String, AddonError> {
    if value.is_empty() {
        Err(on_error(format!("platform returned an empty {what}")))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ApiBase<'static> {
        ApiBase::new("https://api.example.com", "v2")
    }

    #[test]
    fn builds_query_urls() {
        assert_eq!(
            base().services_by_label("db-service"),
            "https://api.example.com/v2/services?q=label:db-service"
        );
        assert_eq!(
            base().spaces_by_name("dev-space"),
            "https://api.example.com/v2/spaces?q=name:dev-space"
        );
        assert_eq!(
            base().service_instances_by_name("orders-db"),
            "https://api.example.com/v2/service_instances?q=name:orders-db"
        );
    }

    #[test]
    fn resolves_platform_relative_paths() {
        assert_eq!(
            base().resolve_path("/v2/service_plans?q=x"),
            "https://api.example.com/v2/service_plans?q=x"
        );
    }

    #[test]
    fn delete_url_is_recursive_and_async() {
        assert_eq!(
            base().service_instance_delete("inst-1"),
            "https://api.example.com/v2/service_instances/inst-1?recursive=true&async=true"
        );
    }

    #[test]
    fn empty_reference_is_rejected() {
        let err = require_reference(String::new(), "space guid", AddonError::Transport).unwrap_err();
        assert!(matches!(err, AddonError::Transport(_)));
        assert!(require_reference("g".to_string(), "guid", AddonError::Transport).is_ok());
    }
}
