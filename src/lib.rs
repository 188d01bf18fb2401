//! Provision, test, and deprovision managed service instances on a
//! Cloud Foundry-style platform, on behalf of a marketplace/add-on host.
//!
//! The host hands over a manifest plus developer-entered parameters; this
//! crate turns those into an ordered chain of authenticated Cloud Controller
//! calls and returns either a connection descriptor (provision) or a plain
//! success/failure result (deprovision, test). Each operation is a fresh,
//! linear call chain: no retries, no token caching, no state kept between
//! invocations.
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use cf_addon::{AddonManifest, AddonRequest, CloudAddon};
//!
//! # async fn demo() {
//! let manifest = AddonManifest {
//!     name: "postgres-addon".to_string(),
//!     properties: HashMap::from([
//!         ("api_url".to_string(), "https://api.example.com".to_string()),
//!         ("api_version".to_string(), "v2".to_string()),
//!     ]),
//! };
//! let request = AddonRequest {
//!     manifest,
//!     developer_parameters: HashMap::from([
//!         ("username".to_string(), "dev@example.com".to_string()),
//!         ("password".to_string(), "secret".to_string()),
//!         ("service_label".to_string(), "db-service".to_string()),
//!         ("space".to_string(), "dev-space".to_string()),
//!         ("instance_name".to_string(), "orders-db".to_string()),
//!     ]),
//! };
//!
//! let addon = CloudAddon::new();
//! let result = addon.provision(&request).await;
//! if result.is_success {
//!     println!("connection data: {}", result.connection_data);
//! }
//! # }
//! ```

pub mod cloud;
mod config;
pub mod constants;
mod credentials;
mod error;
pub mod logging;
mod types;
mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use cloud::auth::AuthToken;
pub use cloud::transport::{ApiTransport, HttpTransport, TransportResponse};
pub use config::DeveloperOptions;
pub use credentials::format_connection_data;
pub use error::AddonError;
pub use types::{AddonManifest, AddonRequest, OperationResult, ProvisionResult};
pub use workflow::CloudAddon;
