//! Translation over the sidecar `/translate` endpoint.

use super::{ModelClientError, build_http_client, endpoint, post_json};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Interface implemented by translation providers.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Translate `text` into the given ISO 639-1 target language.
    async fn translate(&self, text: &str, target: &str) -> Result<String, ModelClientError>;
}

/// HTTP adapter for the sidecar translation endpoint.
pub struct HttpTranslationClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTranslationClient {
    /// Create a client for the given sidecar base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            http: build_http_client(),
            base_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TranslateBody {
    translation: String,
}

#[async_trait]
impl TranslationClient for HttpTranslationClient {
    async fn translate(&self, text: &str, target: &str) -> Result<String, ModelClientError> {
        let payload = json!({ "text": text, "target": target });
        let body: TranslateBody =
            post_json(&self.http, &endpoint(&self.base_url, "translate"), &payload).await?;
        Ok(body.translation)
    }
}
