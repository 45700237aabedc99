//! HTTP client for the GCE instance metadata server
//!
//! The metadata server is a link-local key/value service exposing instance
//! identity and network facts as plain-text bodies. It refuses any request
//! that does not carry the `Metadata-Flavor: Google` header, which guards
//! against accidental external access.

use thiserror::Error;

/// Well-known address of the GCE metadata server.
const DEFAULT_BASE_URL: &str = "http://metadata.google.internal/computeMetadata/v1";

/// Header the metadata server requires from internal callers.
const FLAVOR_HEADER: &str = "Metadata-Flavor";
const FLAVOR_VALUE: &str = "Google";

/// Metadata lookup errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request construction, transport, or body-read failure
    #[error("Metadata request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for single-attribute lookups against the metadata server
#[derive(Clone)]
pub struct MetadataClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetadataClient {
    /// Create a client against the well-known metadata address
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate base URL
    ///
    /// Used by tests to stand in a local double for the metadata server.
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        // No timeout beyond the transport defaults; the server is link-local.
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// Fetch one attribute value by its metadata path (e.g. `/instance/name`).
    ///
    /// Returns the response body verbatim, with no trimming or decoding. The
    /// status line is not inspected: any response with a readable body is a
    /// successful fetch, so a 404 body reads the same as a value. Only request
    /// construction, transport, and body-read failures are errors.
    pub async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(%url, "querying metadata server");

        let response = self
            .http
            .get(&url)
            .header(FLAVOR_HEADER, FLAVOR_VALUE)
            .send()
            .await?;

        let body = response.text().await?;
        Ok(body)
    }
}
