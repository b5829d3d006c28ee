//! Pipeline error types and document-level outputs.

use crate::extract::ExtractError;
use crate::models::ModelClientError;
use thiserror::Error;

/// Errors emitted by the summarization and question-answering pipeline.
///
/// There is no partial-success mode: a failure in any chunk or collaborator call fails the
/// whole request rather than silently dropping content.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Uploaded bytes could not be decoded under the resolved format.
    #[error("Failed to extract document text: {0}")]
    Extract(#[from] ExtractError),
    /// A model collaborator call failed; retry policy belongs to the caller.
    #[error("Model collaborator failed: {0}")]
    Collaborator(#[from] ModelClientError),
}

/// Fully annotated document-level summary returned to the caller.
#[derive(Debug, Clone)]
pub struct DocumentReport {
    /// Keyword-highlighted aggregate summary, translated when a non-English
    /// output language was requested.
    pub summary: String,
    /// Aggregate bulleted summary.
    pub bullets: String,
    /// Aggregate FAQ-framed summary.
    pub faq: String,
    /// Deduplicated entity keywords drawn from the aggregate summary.
    pub keywords: Vec<String>,
    /// Distinct legal citations found in the aggregate summary.
    pub citations: Vec<String>,
    /// Sentiment polarity of the aggregate summary in [-1, 1], reported as a
    /// rough complexity proxy rather than a true readability metric.
    pub readability_score: f32,
}

/// Outcome of a question-answering request.
#[derive(Debug, Clone)]
pub struct QaOutcome {
    /// The question as evaluated.
    pub question: String,
    /// The collaborator's answer over the full document text.
    pub answer: String,
}
