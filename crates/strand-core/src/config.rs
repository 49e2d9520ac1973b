//! Typed view of the host-supplied configuration options.
//!
//! The provisioning host hands every handler the same flat string map; the
//! one option this crate recognizes is the scheme priority list.

use std::collections::HashMap;

/// Option key carrying the comma-separated scheme priority list.
pub const SCHEME_PREFERENCE: &str = "scheme-preference";

/// Ordered scheme preference derived from host configuration.
///
/// The first entry is the most preferred scheme. An empty preference leaves
/// candidate URLs in their original document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemePreference {
    schemes: Vec<String>,
}

impl SchemePreference {
    /// Parse a comma-separated preference string, trimming whitespace around
    /// entries and dropping empty tokens.
    pub fn parse(raw: &str) -> Self {
        let schemes = raw
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self { schemes }
    }

    /// Extract the preference from the full option map.
    ///
    /// A missing option yields the empty preference, meaning all schemes are
    /// treated equally.
    pub fn from_options(options: &HashMap<String, String>) -> Self {
        options
            .get(SCHEME_PREFERENCE)
            .map(|raw| Self::parse(raw))
            .unwrap_or_default()
    }

    /// Whether any preference was configured.
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Schemes in priority order, most preferred first.
    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }
}
