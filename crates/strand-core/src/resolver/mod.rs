//! The DOS resolver facade.
//!
//! Orchestrates identifier splitting, metadata retrieval, and URL ranking
//! behind the host-facing [`PreProvision`] interface. Each call is a linear
//! pipeline with early exits; apart from the configured preference there is
//! no state shared between calls.

mod ranking;

pub use ranking::rank_urls;

use std::collections::{HashMap, HashSet};

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use crate::config::SchemePreference;
use crate::metadata::MetadataFetcher;
use crate::provision::PreProvision;
use crate::uri::DosUri;

/// URI scheme this resolver claims.
pub const DOS_SCHEME: &str = "dos";

/// Resolves DOS identifiers into preference-ordered download URLs.
#[derive(Debug)]
pub struct DosResolver {
    fetcher: MetadataFetcher,
    preference: SchemePreference,
}

impl DosResolver {
    /// Create a resolver around an explicitly constructed fetcher.
    pub fn new(fetcher: MetadataFetcher) -> Self {
        Self {
            fetcher,
            preference: SchemePreference::default(),
        }
    }

    /// Create a resolver with the default bounded-timeout HTTP client.
    pub fn with_default_fetcher() -> anyhow::Result<Self> {
        Ok(Self::new(MetadataFetcher::new()?))
    }

    /// The currently configured scheme preference.
    pub fn preference(&self) -> &SchemePreference {
        &self.preference
    }
}

#[async_trait]
impl PreProvision for DosResolver {
    fn schemes_handled(&self) -> HashSet<String> {
        HashSet::from([DOS_SCHEME.to_string()])
    }

    fn set_configuration(&mut self, options: &HashMap<String, String>) {
        self.preference = SchemePreference::from_options(options);
    }

    async fn prepare_download(&self, identifier: &str) -> anyhow::Result<Vec<String>> {
        let Some(uri) = DosUri::split(identifier) else {
            debug!(identifier, "not a resolvable identifier");
            return Ok(Vec::new());
        };
        if !self.schemes_handled().contains(&uri.scheme) {
            debug!(identifier, scheme = %uri.scheme, "identifier is not handled by this resolver");
            return Ok(Vec::new());
        }

        let Some(document) = self.fetcher.fetch(&uri).await else {
            return Ok(Vec::new());
        };

        let urls = document
            .urls()
            .with_context(|| format!("resolving {}", identifier))?;

        Ok(rank_urls(urls, &self.preference))
    }
}
