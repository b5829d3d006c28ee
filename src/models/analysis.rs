//! Entity extraction and sentiment polarity over the sidecar `/entities` and `/sentiment`
//! endpoints.

use super::{ModelClientError, build_http_client, endpoint, post_json};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// One recognized entity span.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EntitySpan {
    /// Surface text of the entity.
    pub text: String,
    /// Entity type tag assigned by the model (e.g. `ORG`, `PERSON`).
    pub label: String,
}

/// Interface implemented by language-analysis providers.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Extract entity spans from `text`.
    async fn extract_entities(&self, text: &str) -> Result<Vec<EntitySpan>, ModelClientError>;

    /// Compute the sentiment polarity of `text` in [-1, 1].
    async fn sentiment_polarity(&self, text: &str) -> Result<f32, ModelClientError>;
}

/// HTTP adapter for the sidecar analysis endpoints.
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisClient {
    /// Create a client for the given sidecar base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            http: build_http_client(),
            base_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EntitiesBody {
    entities: Vec<EntitySpan>,
}

#[derive(Debug, Deserialize)]
struct SentimentBody {
    polarity: f32,
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn extract_entities(&self, text: &str) -> Result<Vec<EntitySpan>, ModelClientError> {
        let payload = json!({ "text": text });
        let body: EntitiesBody =
            post_json(&self.http, &endpoint(&self.base_url, "entities"), &payload).await?;
        Ok(body.entities)
    }

    async fn sentiment_polarity(&self, text: &str) -> Result<f32, ModelClientError> {
        let payload = json!({ "text": text });
        let body: SentimentBody =
            post_json(&self.http, &endpoint(&self.base_url, "sentiment"), &payload).await?;
        Ok(body.polarity)
    }
}
