//! Parsed data-object metadata documents.

use serde_json::Value;
use tracing::warn;

use crate::error::ResolveError;

/// A parsed metadata document for a single data object.
///
/// The document is held as an opaque JSON tree; the only shape the resolver
/// ever consumes is `data_object.urls[].url`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataObjectDocument {
    host: String,
    value: Value,
}

impl DataObjectDocument {
    /// Wrap a parsed document, remembering the host that served it.
    pub fn new(host: impl Into<String>, value: Value) -> Self {
        Self {
            host: host.into(),
            value,
        }
    }

    /// Host the document was fetched from.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Candidate download URLs in document order.
    ///
    /// A well-formed response always carries `data_object.urls`, so its
    /// absence surfaces as [`ResolveError::MissingUrls`] rather than an
    /// empty list. An empty array is valid and yields no URLs. Entries
    /// without a string `url` field are skipped.
    pub fn urls(&self) -> Result<Vec<String>, ResolveError> {
        let entries = self
            .value
            .get("data_object")
            .and_then(|object| object.get("urls"))
            .and_then(Value::as_array)
            .ok_or_else(|| ResolveError::MissingUrls {
                host: self.host.clone(),
            })?;

        let mut urls = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry.get("url").and_then(Value::as_str) {
                Some(url) => urls.push(url.to_string()),
                None => warn!(host = %self.host, %entry, "skipping urls entry without a string url field"),
            }
        }
        Ok(urls)
    }
}
