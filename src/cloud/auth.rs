//! OAuth password grant against the platform login server.

use super::responses::{self, TokenResponse};
use super::transport::ApiTransport;
use crate::constants::PUBLIC_CLIENT_AUTHORIZATION;
use crate::error::AddonError;

/// Opaque bearer token scoped to a single workflow invocation. Never
/// persisted, never cached; each workflow authenticates from scratch.
#[derive(Debug)]
pub struct AuthToken(String);

impl AuthToken {
    pub(crate) fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token for use in an Authorization header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Exchange a username/password for a bearer token.
///
/// Both credentials may contain reserved URL characters and are
/// percent-encoded before transmission. The grant is sent with the
/// well-known public client Authorization header. The form body carries the
/// password in cleartext and must never reach a log at any level.
pub async fn authenticate(
    transport: &dyn ApiTransport,
    auth_url: &str,
    username: &str,
    password: &str,
) -> Result<AuthToken, AddonError> {
    let body = format!(
        "grant_type=password&username={}&password={}",
        urlencoding::encode(username),
        urlencoding::encode(password)
    );

    let response = transport
        .post_form(auth_url, PUBLIC_CLIENT_AUTHORIZATION, body)
        .await?;

    if !response.is_success() {
        return Err(AddonError::Authentication(format!(
            "token endpoint returned status {}",
            response.status
        )));
    }

    let parsed: TokenResponse = responses::parse(&response.body, AddonError::Authentication)?;
    match parsed.access_token {
        Some(token) if !token.is_empty() => {
            tracing::debug!("bearer token obtained");
            Ok(AuthToken::new(token))
        }
        _ => Err(AddonError::Authentication(
            "token response carried no access_token".to_string(),
        )),
    }
}
