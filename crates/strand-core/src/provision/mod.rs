//! Host-facing pre-provision interface.
//!
//! The provisioning host owns handler discovery, configuration loading, and
//! the byte transfer itself; a handler's job is only to turn identifiers it
//! claims into concrete download URLs. [`PreProvision`] is that contract,
//! and [`HandlerRegistry`] is a plain routing table hosts can register
//! handlers in.

mod registry;

pub use registry::HandlerRegistry;

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

/// A URI-scheme handler that resolves identifiers into download URLs.
#[async_trait]
pub trait PreProvision: Send + Sync {
    /// Scheme tokens this handler claims.
    fn schemes_handled(&self) -> HashSet<String>;

    /// Apply host configuration.
    ///
    /// Expected to be called before requests are served; a later call
    /// replaces the earlier configuration wholesale.
    fn set_configuration(&mut self, options: &HashMap<String, String>);

    /// Resolve an identifier into download URLs, most preferred first.
    ///
    /// An identifier the handler cannot resolve yields an empty list;
    /// errors are reserved for faults worth reporting to the host.
    async fn prepare_download(&self, identifier: &str) -> anyhow::Result<Vec<String>>;
}
