use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::{debug, warn};

use crate::api::error::ApiError;
use crate::api::types::{ErrorBody, SummarizeRequest, SummarizeResponse, SummaryItem};
use crate::config::ServiceConfig;

/// Client for the summarization service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SummarizeClient {
    client: Client,
    base_url: String,
}

impl SummarizeClient {
    pub fn new(service: &ServiceConfig) -> Result<Self, reqwest::Error> {
        // Always ask for JSON so error bodies decode predictably even when
        // the service is fronted by something that serves HTML error pages.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(service.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(service.timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: service.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue one summarization request. No retries; a failed call is
    /// reported once and the user decides whether to resubmit.
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<Vec<SummaryItem>, ApiError> {
        let endpoint = format!("{}/api/summarize", self.base_url);
        debug!(url = %request.url, %endpoint, "submitting summarization request");

        let response = self
            .client
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { source })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|body| body.error)
                .unwrap_or_else(|_| ApiError::generic_server_message(status.as_u16()));
            warn!(status = status.as_u16(), %message, "summarization request failed");
            return Err(ApiError::Server { message });
        }

        let parsed: SummarizeResponse =
            serde_json::from_slice(&bytes).map_err(|source| ApiError::Malformed { source })?;
        let items = parsed.into_items(&request.url);
        debug!(count = items.len(), "summarization request succeeded");
        Ok(items)
    }
}
