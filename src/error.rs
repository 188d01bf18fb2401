use thiserror::Error;

/// Failure kinds surfaced by the add-on core.
///
/// Every fallible step maps into exactly one of these so tests and hosts can
/// assert on the kind rather than on message text. Nothing here crosses the
/// workflow boundary as an error: the orchestrator converts each failure
/// into a populated result before returning to the host.
#[derive(Error, Debug)]
pub enum AddonError {
    /// A required developer parameter is missing or empty.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The token grant failed or returned an unusable response.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// A name lookup came back with an empty result set.
    #[error("{0}")]
    NotFound(String),

    /// Network failure, non-2xx lookup status, or a malformed read response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Instance creation, key creation, or deletion failed.
    #[error("provisioning failed: {0}")]
    Provisioning(String),
}
