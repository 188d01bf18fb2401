//! Parameter keys and platform constants shared across the crate.

// Developer-parameter / manifest-property keys. Developer input overrides
// the manifest value for the same key.
/// Cloud Controller base URL, e.g. `https://api.example.com`.
pub const PARAM_API_URL: &str = "api_url";
/// Cloud Controller API version path segment, e.g. `v2`.
pub const PARAM_API_VERSION: &str = "api_version";
/// Platform username for the token grant.
pub const PARAM_USERNAME: &str = "username";
/// Platform password for the token grant.
pub const PARAM_PASSWORD: &str = "password";
/// Catalog label of the service to provision against.
pub const PARAM_SERVICE_LABEL: &str = "service_label";
/// Space the instance is created under.
pub const PARAM_SPACE: &str = "space";
/// Name of the service instance to create or delete.
pub const PARAM_INSTANCE_NAME: &str = "instance_name";
/// Optional override for the token endpoint; defaults to [`DEFAULT_TOKEN_URL`].
pub const PARAM_AUTH_URL: &str = "auth_url";

/// Token endpoint used when no `auth_url` parameter is supplied: the UAA
/// login server of the default target platform.
pub const DEFAULT_TOKEN_URL: &str = "https://login.ng.bluemix.net/UAALoginServerWAR/oauth/token";

/// Authorization header sent with the password grant: base64 of `cf:`, the
/// well-known public CLI OAuth client. It identifies the client application,
/// not the end user, and is not a secret.
pub const PUBLIC_CLIENT_AUTHORIZATION: &str = "Basic Y2Y6";
