//! Handler routing table.

use std::collections::HashMap;

use tracing::debug;

use crate::uri::scheme_of;

use super::PreProvision;

/// Registry of scheme handlers.
///
/// Routes an identifier to the first registered handler claiming its
/// scheme. Registration order is the tie-breaker when two handlers claim
/// the same scheme.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn PreProvision>>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler.
    pub fn register(&mut self, handler: Box<dyn PreProvision>) {
        self.handlers.push(handler);
    }

    /// Get all registered handlers.
    pub fn all(&self) -> &[Box<dyn PreProvision>] {
        &self.handlers
    }

    /// Get the handler claiming a scheme, if any.
    pub fn handler_for(&self, scheme: &str) -> Option<&dyn PreProvision> {
        self.handlers
            .iter()
            .find(|handler| handler.schemes_handled().contains(scheme))
            .map(|handler| handler.as_ref())
    }

    /// Apply host configuration to every registered handler.
    pub fn configure_all(&mut self, options: &HashMap<String, String>) {
        for handler in &mut self.handlers {
            handler.set_configuration(options);
        }
    }

    /// Route an identifier to its scheme handler.
    ///
    /// Identifiers without a scheme, or whose scheme no handler claims,
    /// resolve to an empty list.
    pub async fn prepare_download(&self, identifier: &str) -> anyhow::Result<Vec<String>> {
        let Some(scheme) = scheme_of(identifier) else {
            debug!(identifier, "identifier carries no scheme");
            return Ok(Vec::new());
        };

        match self.handler_for(scheme) {
            Some(handler) => handler.prepare_download(identifier).await,
            None => {
                debug!(identifier, scheme, "no handler registered for scheme");
                Ok(Vec::new())
            }
        }
    }
}
