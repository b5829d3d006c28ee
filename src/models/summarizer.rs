//! Abstractive summarization over the sidecar `/summarize` endpoint.

use super::{ModelClientError, build_http_client, endpoint, post_json};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Interface implemented by summarization providers.
#[async_trait]
pub trait SummarizationClient: Send + Sync {
    /// Produce a single deterministic summary of `text` within the length budget.
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String, ModelClientError>;
}

/// HTTP adapter for the sidecar summarization endpoint.
pub struct HttpSummarizationClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSummarizationClient {
    /// Create a client for the given sidecar base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            http: build_http_client(),
            base_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SummarizeBody {
    summary: String,
}

#[async_trait]
impl SummarizationClient for HttpSummarizationClient {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String, ModelClientError> {
        let payload = json!({
            "text": text,
            "max_length": max_length,
            "min_length": min_length,
            // Sampling would make summaries non-reproducible across identical requests.
            "sample": false,
        });
        let body: SummarizeBody = post_json(
            &self.http,
            &endpoint(&self.base_url, "summarize"),
            &payload,
        )
        .await?;
        Ok(body.summary.trim().to_string())
    }
}
