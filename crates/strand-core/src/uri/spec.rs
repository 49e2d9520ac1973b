//! DOS URI specification types.

use serde::{Deserialize, Serialize};

/// Well-known redirector for `dg.<registry>` prefixed identifiers.
const DG_REDIRECT_HOST: &str = "dataguids.org";

/// Canonical decomposition of a DOS identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DosUri {
    /// URI scheme (e.g., "dos")
    pub scheme: String,
    /// Authority, including the port when one is present
    pub host: String,
    /// Opaque object path; query and fragment text is kept verbatim
    pub path: String,
}

impl DosUri {
    /// Split an identifier string into its scheme, host, and path.
    ///
    /// Returns `None` for anything that does not parse as a URI with an
    /// authority and an object path; a parse failure is never propagated.
    pub fn split(identifier: &str) -> Option<Self> {
        let parsed = url::Url::parse(identifier).ok()?;
        let host = parsed.host_str().filter(|host| !host.is_empty())?;
        let authority = match parsed.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        let mut raw_path = parsed.path().to_string();
        if let Some(query) = parsed.query() {
            raw_path.push('?');
            raw_path.push_str(query);
        }
        if let Some(fragment) = parsed.fragment() {
            raw_path.push('#');
            raw_path.push_str(fragment);
        }

        // dg.<registry> identifiers all dereference through one central
        // redirector, whichever registry they name; the original authority
        // becomes the leading path segment.
        if authority.starts_with("dg.") {
            return Some(Self {
                scheme: parsed.scheme().to_string(),
                host: DG_REDIRECT_HOST.to_string(),
                path: format!("{}{}", authority, raw_path),
            });
        }

        let path = raw_path.strip_prefix('/').unwrap_or(&raw_path);
        if path.is_empty() {
            return None;
        }

        Some(Self {
            scheme: parsed.scheme().to_string(),
            host: authority,
            path: path.to_string(),
        })
    }
}

/// Scheme token of a URI or URL: the text before `://`.
pub fn scheme_of(target: &str) -> Option<&str> {
    let (scheme, _) = target.split_once("://")?;
    if scheme.is_empty() { None } else { Some(scheme) }
}
