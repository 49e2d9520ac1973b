//! HTTP retrieval of data-object metadata.

use std::time::Duration;

use anyhow::Context;
use tracing::{debug, warn};

use crate::uri::DosUri;

use super::document::DataObjectDocument;

/// Fixed API path of the GA4GH data-object metadata endpoint.
pub const DOS_API_PATH: &str = "/ga4gh/dos/v1/dataobjects/";

/// Whole-request bound; the transport default is unbounded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches metadata documents for resolved DOS identifiers.
///
/// Metadata services are tried over plain HTTP first with a single fallback
/// to HTTPS; there is no retry beyond that. Every network fault is absorbed
/// here and reported as an absent document.
#[derive(Debug, Clone)]
pub struct MetadataFetcher {
    client: reqwest::Client,
}

impl MetadataFetcher {
    /// Create a fetcher with the default bounded-timeout client.
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent("strand/0.1.0")
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Create a fetcher around an externally configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch and parse the metadata document for a resolved identifier.
    ///
    /// Returns `None` when both protocol attempts fail or the winning
    /// response body is not a JSON document.
    pub async fn fetch(&self, uri: &DosUri) -> Option<DataObjectDocument> {
        let response = match self.attempt("http", uri).await {
            Ok(response) => response,
            Err(err) => {
                debug!(host = %uri.host, error = %err, "http attempt failed, retrying over https");
                match self.attempt("https", uri).await {
                    Ok(response) => response,
                    Err(err) => {
                        warn!(host = %uri.host, error = %err, "metadata fetch failed on both protocols");
                        return None;
                    }
                }
            }
        };

        match response.json::<serde_json::Value>().await {
            Ok(value) => Some(DataObjectDocument::new(&uri.host, value)),
            Err(err) => {
                warn!(host = %uri.host, error = %err, "metadata response was not a JSON document");
                None
            }
        }
    }

    /// One GET attempt over the given protocol; anything but a 200 is an
    /// error.
    async fn attempt(&self, protocol: &str, uri: &DosUri) -> anyhow::Result<reqwest::Response> {
        let target = endpoint_url(protocol, uri);

        let response = self
            .client
            .get(&target)
            .send()
            .await
            .with_context(|| format!("Failed to open connection to {}", target))?;

        if response.status() != reqwest::StatusCode::OK {
            anyhow::bail!("GET {} returned {}", target, response.status());
        }

        Ok(response)
    }
}

/// Construct the metadata endpoint URL for a resolved identifier.
fn endpoint_url(protocol: &str, uri: &DosUri) -> String {
    format!("{}://{}{}{}", protocol, uri.host, DOS_API_PATH, uri.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_host_api_path_and_object_path() {
        let uri = DosUri {
            scheme: "dos".to_string(),
            host: "dos-dss.example.org".to_string(),
            path: "abc123?version=1".to_string(),
        };

        assert_eq!(
            endpoint_url("http", &uri),
            "http://dos-dss.example.org/ga4gh/dos/v1/dataobjects/abc123?version=1"
        );
    }

    #[test]
    fn endpoint_url_keeps_the_port() {
        let uri = DosUri {
            scheme: "dos".to_string(),
            host: "127.0.0.1:8080".to_string(),
            path: "911bda59".to_string(),
        };

        assert_eq!(
            endpoint_url("https", &uri),
            "https://127.0.0.1:8080/ga4gh/dos/v1/dataobjects/911bda59"
        );
    }

    #[test]
    fn endpoint_url_keeps_redirected_paths_intact() {
        let uri = DosUri {
            scheme: "dos".to_string(),
            host: "dataguids.org".to_string(),
            path: "dg.4503/630d31c3-381e-488d-b639-ce5d047a0142".to_string(),
        };

        assert_eq!(
            endpoint_url("http", &uri),
            "http://dataguids.org/ga4gh/dos/v1/dataobjects/dg.4503/630d31c3-381e-488d-b639-ce5d047a0142"
        );
    }
}
