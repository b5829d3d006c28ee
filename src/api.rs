//! HTTP surface for docdigest.
//!
//! This module exposes a compact Axum router with a handful of endpoints:
//!
//! - `POST /summarize` – Upload a document (multipart `file` field) and receive the
//!   multi-format digest: highlighted summary, bullet list, FAQ framing, keywords, legal
//!   citations, and a readability proxy. An optional `language` query parameter requests a
//!   translated summary.
//! - `POST /ask` – Upload a document plus a `question` query parameter and receive the
//!   answer computed over the full extracted text.
//! - `GET /metrics` – Observe pipeline counters.
//! - `GET /commands` – Machine-readable command catalog for quick discovery by tools/hosts.
//!
//! Uploads are buffered in full before extraction so that the PDF fallback can read the
//! bytes a second time.

use crate::extract::Document;
use crate::pipeline::{PipelineApi, PipelineError};
use axum::{
    Json, Router,
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Build the HTTP router exposing the summarization API surface.
pub fn create_router<S>(service: Arc<S>) -> Router
where
    S: PipelineApi + 'static,
{
    Router::new()
        .route("/summarize", post(summarize_document::<S>))
        .route("/ask", post(ask_question::<S>))
        .route("/metrics", get(get_metrics::<S>))
        .route("/commands", get(get_commands))
        .with_state(service)
}

/// Query parameters for the `POST /summarize` endpoint.
#[derive(Deserialize)]
struct SummarizeParams {
    /// Target language for the returned summary (ISO 639-1); `en` skips translation.
    #[serde(default = "default_language")]
    language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Query parameters for the `POST /ask` endpoint.
#[derive(Deserialize)]
struct AskParams {
    /// Free-text question evaluated against the document text.
    #[serde(default)]
    question: String,
}

/// Success response for the `POST /summarize` endpoint.
#[derive(Serialize)]
struct SummarizeResponse {
    /// Keyword-highlighted (and possibly translated) aggregate summary.
    summary: String,
    /// Aggregate bulleted summary.
    bullets: String,
    /// Aggregate FAQ-framed summary.
    faq: String,
    /// Deduplicated entity keywords.
    keywords: Vec<String>,
    /// Distinct legal citations.
    citations: Vec<String>,
    /// Sentiment-polarity readability proxy.
    readability_score: f32,
}

/// Success response for the `POST /ask` endpoint.
#[derive(Serialize)]
struct AskResponse {
    question: String,
    answer: String,
}

/// Summarize an uploaded document.
async fn summarize_document<S>(
    State(service): State<Arc<S>>,
    Query(params): Query<SummarizeParams>,
    multipart: Multipart,
) -> Result<Json<SummarizeResponse>, AppError>
where
    S: PipelineApi,
{
    let document = read_document(multipart).await?;
    let report = service
        .summarize_document(document, &params.language)
        .await?;
    tracing::info!(
        language = %params.language,
        keywords = report.keywords.len(),
        citations = report.citations.len(),
        "Summarize request completed"
    );
    Ok(Json(SummarizeResponse {
        summary: report.summary,
        bullets: report.bullets,
        faq: report.faq,
        keywords: report.keywords,
        citations: report.citations,
        readability_score: report.readability_score,
    }))
}

/// Answer a question against an uploaded document.
async fn ask_question<S>(
    State(service): State<Arc<S>>,
    Query(params): Query<AskParams>,
    multipart: Multipart,
) -> Result<Json<AskResponse>, AppError>
where
    S: PipelineApi,
{
    let document = read_document(multipart).await?;
    let outcome = service.answer_question(document, &params.question).await?;
    tracing::info!("Ask request completed");
    Ok(Json(AskResponse {
        question: outcome.question,
        answer: outcome.answer,
    }))
}

/// Pull the uploaded document out of the multipart body.
///
/// The upload is buffered into memory in full; the extraction pipeline needs rewindable
/// access to the bytes, which a streaming body cannot give.
async fn read_document(mut multipart: Multipart) -> Result<Document, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| AppError::BadRequest(format!("invalid multipart body: {error}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|error| AppError::BadRequest(format!("failed to read upload: {error}")))?;
        return Ok(Document::new(&file_name, bytes.to_vec()));
    }
    Err(AppError::BadRequest(
        "missing multipart field 'file'".to_string(),
    ))
}

/// Return a concise metrics snapshot with pipeline counters.
async fn get_metrics<S>(State(service): State<Arc<S>>) -> Result<Json<MetricsResponse>, AppError>
where
    S: PipelineApi,
{
    let snapshot = service.metrics_snapshot();
    Ok(Json(MetricsResponse {
        documents_summarized: snapshot.documents_summarized,
        chunks_summarized: snapshot.chunks_summarized,
        questions_answered: snapshot.questions_answered,
    }))
}

/// Response body for `GET /metrics`.
#[derive(Serialize)]
struct MetricsResponse {
    documents_summarized: u64,
    chunks_summarized: u64,
    questions_answered: u64,
}

/// Descriptor for a single command in the discovery catalog.
#[derive(Serialize)]
struct CommandDescriptor {
    name: &'static str,
    method: &'static str,
    path: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_example: Option<serde_json::Value>,
}

/// Response body for `GET /commands`.
#[derive(Serialize)]
struct CommandsResponse {
    commands: Vec<CommandDescriptor>,
}

/// Enumerate supported HTTP commands for discovery/UX in hosts and tools.
async fn get_commands() -> Json<CommandsResponse> {
    Json(CommandsResponse {
        commands: vec![
            CommandDescriptor {
                name: "summarize",
                method: "POST",
                path: "/summarize",
                description: "Upload a document (multipart field 'file') and receive { \"summary\", \"bullets\", \"faq\", \"keywords\", \"citations\", \"readability_score\" }. Optional 'language' query parameter translates the summary.",
                request_example: Some(json!({
                    "query": { "language": "hi" },
                    "multipart": { "file": "contract.pdf" }
                })),
            },
            CommandDescriptor {
                name: "ask",
                method: "POST",
                path: "/ask",
                description: "Upload a document plus a 'question' query parameter and receive { \"question\", \"answer\" } computed over the full extracted text.",
                request_example: Some(json!({
                    "query": { "question": "Who are the parties?" },
                    "multipart": { "file": "contract.pdf" }
                })),
            },
            CommandDescriptor {
                name: "metrics",
                method: "GET",
                path: "/metrics",
                description: "Return pipeline counters useful for observability dashboards.",
                request_example: None,
            },
        ],
    })
}

enum AppError {
    BadRequest(String),
    Pipeline(PipelineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Pipeline(error) => (status_for(&error), error.to_string()),
        };
        (status, message).into_response()
    }
}

fn status_for(error: &PipelineError) -> StatusCode {
    match error {
        // Undecodable uploads are the caller's to fix; collaborator faults are not.
        PipelineError::Extract(_) => StatusCode::BAD_REQUEST,
        PipelineError::Collaborator(_) => StatusCode::BAD_GATEWAY,
    }
}

impl From<PipelineError> for AppError {
    fn from(inner: PipelineError) -> Self {
        Self::Pipeline(inner)
    }
}
