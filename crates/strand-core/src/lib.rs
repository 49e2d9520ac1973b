//! Strand Core Library
//!
//! Resolves GA4GH Data Object Service (DOS) identifiers into
//! preference-ordered, protocol-qualified download URLs on behalf of a
//! file-provisioning host.

pub mod config;
pub mod error;
pub mod metadata;
pub mod provision;
pub mod resolver;
pub mod uri;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{SCHEME_PREFERENCE, SchemePreference};

    // Errors
    pub use crate::error::ResolveError;

    // Metadata
    pub use crate::metadata::{DOS_API_PATH, DataObjectDocument, MetadataFetcher};

    // Host interface
    pub use crate::provision::{HandlerRegistry, PreProvision};

    // Resolver
    pub use crate::resolver::{DOS_SCHEME, DosResolver, rank_urls};

    // Identifiers
    pub use crate::uri::{DosUri, scheme_of};
}
