//! Name-to-reference lookups against the Cloud Controller.
//!
//! All four operations are read-only filtered collection queries and share
//! one ambiguity policy with a deliberate wrinkle: catalog, plan, and
//! instance lookups take the FIRST match, while the space lookup takes the
//! LAST. The asymmetry mirrors the target platform's pagination ordering
//! and is load-bearing; callers depend on these exact tie-breaks.

use super::auth::AuthToken;
use super::responses::{self, GuidListResponse, ServiceListResponse};
use super::transport::{ApiTransport, TransportResponse};
use super::{ApiBase, require_reference};
use crate::error::AddonError;

/// Resolves human-readable names to platform GUIDs and URLs.
pub struct ResourceLocator<'a> {
    transport: &'a dyn ApiTransport,
    base: ApiBase<'a>,
}

impl<'a> ResourceLocator<'a> {
    /// Locator bound to one transport and endpoint.
    pub fn new(transport: &'a dyn ApiTransport, base: ApiBase<'a>) -> Self {
        Self { transport, base }
    }

    /// Look up the catalog entry for `label` and return its service-plans
    /// URL (first match wins; duplicate labels are undefined behavior by
    /// design).
    pub async fn find_service_plans_url(
        &self,
        token: &AuthToken,
        label: &str,
    ) -> Result<String, AddonError> {
        let url = self.base.services_by_label(label);
        let response = self.fetch(&url, token).await?;
        let list: ServiceListResponse = responses::parse(&response.body, AddonError::Transport)?;

        let Some(first) = list.resources.into_iter().next() else {
            return Err(AddonError::NotFound(format!(
                "Service not found: no catalog entry with label `{label}`"
            )));
        };
        require_reference(first.entity.service_plans_url, "service plans URL", AddonError::Transport)
    }

    /// Dereference a plans URL and return the first plan's GUID.
    pub async fn find_service_plan_guid(
        &self,
        token: &AuthToken,
        plans_url: &str,
    ) -> Result<String, AddonError> {
        let url = self.base.resolve_path(plans_url);
        let response = self.fetch(&url, token).await?;
        let list: GuidListResponse = responses::parse(&response.body, AddonError::Transport)?;

        let Some(first) = list.resources.into_iter().next() else {
            return Err(AddonError::NotFound(format!(
                "Service plan not found: `{plans_url}` lists no plans"
            )));
        };
        require_reference(first.metadata.guid, "service plan GUID", AddonError::Transport)
    }

    /// Return the GUID of the LAST space matching `name` (see module docs).
    pub async fn find_space_guid(
        &self,
        token: &AuthToken,
        name: &str,
    ) -> Result<String, AddonError> {
        let url = self.base.spaces_by_name(name);
        let response = self.fetch(&url, token).await?;
        let mut list: GuidListResponse = responses::parse(&response.body, AddonError::Transport)?;

        let Some(last) = list.resources.pop() else {
            return Err(AddonError::NotFound(format!(
                "Space not found: no space named `{name}`"
            )));
        };
        require_reference(last.metadata.guid, "space GUID", AddonError::Transport)
    }

    /// Return the GUID of the first service instance matching `name`.
    /// Deprovision path only.
    pub async fn find_service_instance_guid(
        &self,
        token: &AuthToken,
        name: &str,
    ) -> Result<String, AddonError> {
        let url = self.base.service_instances_by_name(name);
        let response = self.fetch(&url, token).await?;
        let list: GuidListResponse = responses::parse(&response.body, AddonError::Transport)?;

        let Some(first) = list.resources.into_iter().next() else {
            return Err(AddonError::NotFound(format!(
                "Service instance not found: no instance named `{name}`"
            )));
        };
        require_reference(first.metadata.guid, "service instance GUID", AddonError::Transport)
    }

    async fn fetch(
        &self,
        url: &str,
        token: &AuthToken,
    ) -> Result<TransportResponse, AddonError> {
        let response = self.transport.get(url, token.as_str()).await?;
        if !response.is_success() {
            return Err(AddonError::Transport(format!(
                "GET {url} returned status {}",
                response.status
            )));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;

    fn token() -> AuthToken {
        AuthToken::new("T")
    }

    fn base() -> ApiBase<'static> {
        ApiBase::new("https://api.example.com", "v2")
    }

    #[tokio::test]
    async fn plans_url_takes_the_first_catalog_match() {
        let transport = MockTransport::new();
        transport.enqueue(
            200,
            r#"{"total_results":2,"resources":[
                {"entity":{"service_plans_url":"/v2/service_plans?q=a"}},
                {"entity":{"service_plans_url":"/v2/service_plans?q=b"}}
            ]}"#,
        );

        let locator = ResourceLocator::new(&transport, base());
        let url = locator
            .find_service_plans_url(&token(), "db-service")
            .await
            .unwrap();
        assert_eq!(url, "/v2/service_plans?q=a");

        let calls = transport.calls();
        assert_eq!(calls[0].url, "https://api.example.com/v2/services?q=label:db-service");
        assert_eq!(calls[0].authorization, "T");
    }

    #[tokio::test]
    async fn empty_catalog_is_service_not_found() {
        let transport = MockTransport::new();
        transport.enqueue(200, r#"{"total_results":0,"resources":[]}"#);

        let locator = ResourceLocator::new(&transport, base());
        let err = locator
            .find_service_plans_url(&token(), "db-service")
            .await
            .unwrap_err();
        assert!(matches!(err, AddonError::NotFound(_)));
        assert!(err.to_string().contains("Service not found"));
    }

    #[tokio::test]
    async fn plan_guid_takes_the_first_plan() {
        let transport = MockTransport::new();
        transport.enqueue(
            200,
            r#"{"resources":[
                {"metadata":{"guid":"plan-1"}},
                {"metadata":{"guid":"plan-2"}}
            ]}"#,
        );

        let locator = ResourceLocator::new(&transport, base());
        let guid = locator
            .find_service_plan_guid(&token(), "/v2/service_plans?q=x")
            .await
            .unwrap();
        assert_eq!(guid, "plan-1");
        assert_eq!(
            transport.calls()[0].url,
            "https://api.example.com/v2/service_plans?q=x"
        );
    }

    // Regression guard: two distinct spaces, and the LAST one must win. An
    // accidental first-match implementation fails here.
    #[tokio::test]
    async fn space_lookup_takes_the_last_match() {
        let transport = MockTransport::new();
        transport.enqueue(
            200,
            r#"{"resources":[
                {"metadata":{"guid":"space-a"}},
                {"metadata":{"guid":"space-b"}}
            ]}"#,
        );

        let locator = ResourceLocator::new(&transport, base());
        let guid = locator.find_space_guid(&token(), "dev-space").await.unwrap();
        assert_eq!(guid, "space-b");
    }

    #[tokio::test]
    async fn missing_space_is_not_found() {
        let transport = MockTransport::new();
        transport.enqueue(200, r#"{"resources":[]}"#);

        let locator = ResourceLocator::new(&transport, base());
        let err = locator.find_space_guid(&token(), "ghost").await.unwrap_err();
        assert!(matches!(err, AddonError::NotFound(_)));
    }

    #[tokio::test]
    async fn instance_lookup_takes_the_first_match() {
        let transport = MockTransport::new();
        transport.enqueue(
            200,
            r#"{"resources":[
                {"metadata":{"guid":"inst-1"}},
                {"metadata":{"guid":"inst-2"}}
            ]}"#,
        );

        let locator = ResourceLocator::new(&transport, base());
        let guid = locator
            .find_service_instance_guid(&token(), "orders-db")
            .await
            .unwrap();
        assert_eq!(guid, "inst-1");
    }

    #[tokio::test]
    async fn non_2xx_lookup_is_a_transport_error() {
        let transport = MockTransport::new();
        transport.enqueue(502, "bad gateway");

        let locator = ResourceLocator::new(&transport, base());
        let err = locator.find_space_guid(&token(), "dev-space").await.unwrap_err();
        assert!(matches!(err, AddonError::Transport(_)));
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn empty_guid_in_response_is_rejected() {
        let transport = MockTransport::new();
        transport.enqueue(200, r#"{"resources":[{"metadata":{"guid":""}}]}"#);

        let locator = ResourceLocator::new(&transport, base());
        let err = locator.find_space_guid(&token(), "dev-space").await.unwrap_err();
        assert!(matches!(err, AddonError::Transport(_)));
    }
}
