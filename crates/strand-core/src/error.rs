//! Error types for the resolution pipeline.
//!
//! Almost every fault in the pipeline degrades to an empty result; the
//! variants here are the exceptions that abort a resolution and are worth
//! reporting to the host.

use thiserror::Error;

/// Faults surfaced by [`prepare_download`](crate::provision::PreProvision::prepare_download)
/// instead of an empty result.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A metadata service answered 200 with a document that lacks the
    /// required `data_object.urls` field. This points at an incompatible or
    /// broken remote service rather than an absent object.
    #[error("metadata document from {host} is missing data_object.urls")]
    MissingUrls {
        /// Host that produced the document
        host: String,
    },
}
