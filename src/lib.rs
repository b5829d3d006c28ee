#![deny(missing_docs)]

//! Core library for the docdigest summarization server.

/// Keyword, citation, and readability annotation helpers.
pub mod annotate;
/// HTTP routing and REST handlers.
pub mod api;
/// Environment-driven configuration management.
pub mod config;
/// Document text extraction (native PDF, OCR, DOCX, plain text).
pub mod extract;
/// Structured logging and tracing setup.
pub mod logging;
/// Pipeline metrics helpers.
pub mod metrics;
/// Model sidecar client abstractions and adapters.
pub mod models;
/// Summarization pipeline: chunking, per-chunk summaries, aggregation.
pub mod pipeline;
