//! Summarization pipeline: chunking, per-chunk summarization, and ordered aggregation.

/// Document-level aggregation of chunk summaries.
pub mod aggregate;
/// Word-aligned chunking of extracted text.
pub mod chunking;
mod service;
/// Per-chunk summarization and format fan-out.
pub mod summarize;
/// Pipeline error types and document-level outputs.
pub mod types;

pub use service::{PipelineApi, PipelineService};
pub use types::{DocumentReport, PipelineError, QaOutcome};
