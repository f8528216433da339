use reqwest::Client;

use super::{ApiError, ApiResult};
use wikiseek_types::{PageMap, SearchParams, SearchResponse};

/// API client for the encyclopedia search endpoint
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a new API client against the given query endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The query endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one search request and return the keyed page map.
    ///
    /// A structurally-successful response that carries an embedded
    /// `error.info` indicator is treated as a failure. A response with
    /// neither pages nor an error (zero hits) yields an empty map.
    pub async fn search(&self, params: &SearchParams) -> ApiResult<PageMap> {
        let response = self.client.get(&self.endpoint).query(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            // Clean up HTML error messages (e.g., from proxy error pages)
            let clean_error = if error_text.contains("<html>") || error_text.contains("<!DOCTYPE") {
                format!("Server returned {} error.", status.as_u16())
            } else {
                format!("Server returned {}: {}", status.as_u16(), error_text)
            };

            return Err(ApiError::Api(clean_error));
        }

        let body: SearchResponse = response.json().await?;

        if let Some(error) = body.error {
            return Err(ApiError::Api(error.info));
        }

        Ok(body.query.map(|q| q.pages).unwrap_or_default())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ENDPOINT)
    }
}
