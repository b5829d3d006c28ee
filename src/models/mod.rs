//! HTTP adapters for the model sidecar.
//!
//! All model inference (summarization, entity extraction, sentiment, translation, question
//! answering) lives in a separate sidecar process reached over HTTP. Each capability is a
//! trait with a reqwest-backed adapter so pipeline components can substitute test doubles
//! per capability. Calls are single-attempt; retry and timeout policy belongs to callers.

/// Entity extraction and sentiment polarity client.
pub mod analysis;
/// Question-answering client.
pub mod qa;
/// Abstractive summarization client.
pub mod summarizer;
/// Translation client.
pub mod translator;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by model sidecar clients.
#[derive(Debug, Error)]
pub enum ModelClientError {
    /// Sidecar was unreachable or the endpoint does not exist.
    #[error("Model capability unavailable: {0}")]
    Unavailable(String),
    /// Sidecar returned an error response.
    #[error("Model request failed: {0}")]
    RequestFailed(String),
    /// Sidecar response could not be parsed.
    #[error("Malformed model response: {0}")]
    InvalidResponse(String),
}

pub(crate) fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent("docdigest/models")
        .build()
        .expect("Failed to construct reqwest::Client for the model sidecar")
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// POST a JSON payload to a sidecar endpoint and decode the JSON response body.
pub(crate) async fn post_json<T: serde::de::DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    payload: &serde_json::Value,
) -> Result<T, ModelClientError> {
    let response = http.post(url).json(payload).send().await.map_err(|error| {
        ModelClientError::Unavailable(format!("failed to reach model sidecar at {url}: {error}"))
    })?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(ModelClientError::Unavailable(format!(
            "model sidecar endpoint {url} returned 404"
        )));
    }

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ModelClientError::RequestFailed(format!(
            "model sidecar returned {status}: {body}"
        )));
    }

    response.json::<T>().await.map_err(|error| {
        ModelClientError::InvalidResponse(format!("failed to decode sidecar response: {error}"))
    })
}
