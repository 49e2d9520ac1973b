//! Metadata retrieval for resolved DOS identifiers.
//!
//! This module talks to the remote data-object service:
//! - Fetching the metadata document over HTTP with an HTTPS fallback
//! - Holding the parsed document and extracting its candidate URLs

mod document;
mod fetcher;

pub use document::DataObjectDocument;
pub use fetcher::{DOS_API_PATH, MetadataFetcher};
