//! DOS identifier parsing.
//!
//! This module decomposes raw identifier strings into their scheme, host,
//! and opaque object path. It handles both identifier formats in the wild:
//! - `dos://<host>/<object-id>[?query][#fragment]`
//! - `dos://dg.<registry>/<object-id>` - rerouted through the central
//!   redirector host

mod spec;

pub use spec::{DosUri, scheme_of};
