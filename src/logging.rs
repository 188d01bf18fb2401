//! Opt-in tracing setup for hosts that do not install their own subscriber.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; installation failures (a subscriber already
/// set by the host) are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
