//! npms.io suggestion client.
//!
//! `GET {endpoint}?q=<query>` returns a JSON array of
//! `{ package: { name, version, description?, links: { npm } }, ... }`.

use async_trait::async_trait;
use log::{debug, warn};

use super::client::{FetchError, SuggestionClient};
use super::types::{Suggestion, parse_suggestions};

pub const DEFAULT_ENDPOINT: &str = "https://api.npms.io/v2/search/suggestions";

pub struct NpmsClient {
    endpoint: String,
    client: reqwest::Client,
}

impl NpmsClient {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SuggestionClient for NpmsClient {
    fn name(&self) -> &str {
        "npms"
    }

    async fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>, FetchError> {
        // reqwest percent-encodes the value, so "&*()" arrives as one parameter
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("npms response status: {}", status);

        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
            warn!("npms request error: {} {}", status.as_u16(), reason);
            return Err(FetchError::Request {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_suggestions(&body).map_err(|e| {
            debug!("Unparseable npms body ({} bytes): {}", body.len(), e);
            FetchError::Parse(e.to_string())
        })
    }
}
