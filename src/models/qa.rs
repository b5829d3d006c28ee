//! Question answering over the sidecar `/answer` endpoint.

use super::{ModelClientError, build_http_client, endpoint, post_json};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Interface implemented by question-answering providers.
#[async_trait]
pub trait QaClient: Send + Sync {
    /// Answer `question` against the full document `context`.
    async fn answer(&self, question: &str, context: &str) -> Result<String, ModelClientError>;
}

/// HTTP adapter for the sidecar question-answering endpoint.
pub struct HttpQaClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpQaClient {
    /// Create a client for the given sidecar base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            http: build_http_client(),
            base_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnswerBody {
    answer: String,
}

#[async_trait]
impl QaClient for HttpQaClient {
    async fn answer(&self, question: &str, context: &str) -> Result<String, ModelClientError> {
        let payload = json!({ "question": question, "context": context });
        let body: AnswerBody =
            post_json(&self.http, &endpoint(&self.base_url, "answer"), &payload).await?;
        Ok(body.answer)
    }
}
