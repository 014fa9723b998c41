//! Function-signature lookup against a 4byte-compatible directory
//!
//! Used to show human-readable names for batch calls when only call data is
//! stored.

use alloy::primitives::Selector;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::Result;

/// Public 4byte directory
pub const DEFAULT_SIGNATURE_DIRECTORY: &str = "https://www.4byte.directory";

#[derive(Debug, Deserialize)]
struct SignatureResponse {
    results: Vec<SignatureEntry>,
}

#[derive(Debug, Deserialize)]
struct SignatureEntry {
    text_signature: String,
}

/// HTTP client for a signature directory
#[derive(Debug, Clone)]
pub struct SignatureDirectory {
    client: reqwest::Client,
    base_url: Url,
}

impl SignatureDirectory {
    /// Creates a client for [`DEFAULT_SIGNATURE_DIRECTORY`]
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_SIGNATURE_DIRECTORY)
    }

    /// Creates a client for a directory served at `base_url`, which may carry a path prefix
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let mut base_url: Url = base_url.parse()?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the lookup URL for `selector`, oldest registrations first
    pub fn lookup_url(&self, selector: Selector) -> Result<Url> {
        let mut url = self.base_url.join("api/v1/signatures/")?;
        url.query_pairs_mut()
            .append_pair("hex_signature", &selector.to_string())
            .append_pair("ordering", "created_at");
        Ok(url)
    }

    /// Returns every text signature registered for `selector`
    ///
    /// Several signatures can collide on one selector; the oldest comes first.
    pub async fn text_signatures(&self, selector: Selector) -> Result<Vec<String>> {
        let url = self.lookup_url(selector)?;
        debug!(%selector, %url, "looking up function signature");

        let response: SignatureResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(parse_results(response))
    }
}

fn parse_results(response: SignatureResponse) -> Vec<String> {
    response
        .results
        .into_iter()
        .map(|entry| entry.text_signature)
        .collect()
}

/// Returns the function selector of `calldata`, if it has one
pub fn selector_of(calldata: &[u8]) -> Option<Selector> {
    calldata.get(..4).map(Selector::from_slice)
}
