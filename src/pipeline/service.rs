//! Pipeline service coordinating extraction, summarization, and annotation.

use crate::{
    annotate::{extract_citations, highlight_keywords, keywords_from_entities},
    config::get_config,
    extract::{self, Document},
    metrics::{MetricsSnapshot, PipelineMetrics},
    models::{
        analysis::{AnalysisClient, HttpAnalysisClient},
        qa::{HttpQaClient, QaClient},
        summarizer::{HttpSummarizationClient, SummarizationClient},
        translator::{HttpTranslationClient, TranslationClient},
    },
    pipeline::{
        aggregate::merge,
        chunking::split_into_chunks,
        summarize::summarize_chunk,
        types::{DocumentReport, PipelineError, QaOutcome},
    },
};
use async_trait::async_trait;
use futures_util::future::try_join_all;
use std::sync::Arc;

/// Output language that skips the translation step.
const NATIVE_LANGUAGE: &str = "en";

/// Coordinates the full request pipeline: extraction, chunked summarization, ordered
/// aggregation, and annotation.
///
/// The service owns long-lived handles to the model sidecar clients and the metrics
/// registry. Construct it once near process start and share it through an `Arc`; each
/// request owns its own buffers end-to-end, so no locking is involved.
pub struct PipelineService {
    summarizer: Box<dyn SummarizationClient>,
    analysis: Box<dyn AnalysisClient>,
    translator: Box<dyn TranslationClient>,
    qa: Box<dyn QaClient>,
    metrics: Arc<PipelineMetrics>,
}

/// Abstraction over the pipeline used by the HTTP surface.
#[async_trait]
pub trait PipelineApi: Send + Sync {
    /// Summarize a document, annotate the aggregate, and optionally translate it.
    async fn summarize_document(
        &self,
        document: Document,
        language: &str,
    ) -> Result<DocumentReport, PipelineError>;

    /// Answer a free-text question against the document's full text.
    async fn answer_question(
        &self,
        document: Document,
        question: &str,
    ) -> Result<QaOutcome, PipelineError>;

    /// Retrieve the current metrics snapshot for diagnostics.
    fn metrics_snapshot(&self) -> MetricsSnapshot;
}

impl PipelineService {
    /// Build a pipeline service wired to the configured model sidecar.
    pub fn new() -> Self {
        let base_url = get_config().model_server_url.clone();
        tracing::info!(model_server = %base_url, "Initializing model sidecar clients");
        Self::with_clients(
            Box::new(HttpSummarizationClient::new(base_url.clone())),
            Box::new(HttpAnalysisClient::new(base_url.clone())),
            Box::new(HttpTranslationClient::new(base_url.clone())),
            Box::new(HttpQaClient::new(base_url)),
        )
    }

    /// Build a pipeline service from explicit capability clients.
    ///
    /// Lets tests substitute a deterministic double per capability without any process-wide
    /// state.
    pub fn with_clients(
        summarizer: Box<dyn SummarizationClient>,
        analysis: Box<dyn AnalysisClient>,
        translator: Box<dyn TranslationClient>,
        qa: Box<dyn QaClient>,
    ) -> Self {
        Self {
            summarizer,
            analysis,
            translator,
            qa,
            metrics: Arc::new(PipelineMetrics::new()),
        }
    }

    /// Extract, chunk, summarize, aggregate, and annotate one document.
    pub async fn summarize_document(
        &self,
        document: Document,
        language: &str,
    ) -> Result<DocumentReport, PipelineError> {
        let config = get_config();
        tracing::info!(format = ?document.format(), "Processing document");

        let text = extract::extract_text(document).await?;
        let chunks = split_into_chunks(&text, config.max_chunk_chars);
        tracing::debug!(
            chunks = chunks.len(),
            max_chunk_chars = config.max_chunk_chars,
            "Chunked document"
        );

        // Chunks carry no data dependency on each other, so their summaries run
        // concurrently. try_join_all yields results in input order, which keeps the merge
        // below aligned with the original chunk order regardless of completion order.
        let summaries = try_join_all(chunks.iter().map(|chunk| {
            summarize_chunk(
                self.summarizer.as_ref(),
                chunk,
                config.summary_max_length,
                config.summary_min_length,
            )
        }))
        .await?;
        let aggregate = merge(&summaries);

        let entities = self.analysis.extract_entities(&aggregate.plain).await?;
        let keywords = keywords_from_entities(&entities);
        let citations = extract_citations(&aggregate.plain);
        let readability_score = self.analysis.sentiment_polarity(&aggregate.plain).await?;
        let highlighted = highlight_keywords(&aggregate.plain, &keywords);

        let summary = if language == NATIVE_LANGUAGE {
            highlighted
        } else {
            self.translator.translate(&highlighted, language).await?
        };

        self.metrics.record_summary(chunks.len() as u64);
        tracing::info!(
            chunks = chunks.len(),
            keywords = keywords.len(),
            citations = citations.len(),
            language,
            "Document summarized"
        );

        Ok(DocumentReport {
            summary,
            bullets: aggregate.bullets,
            faq: aggregate.faq,
            keywords,
            citations,
            readability_score,
        })
    }

    /// Extract the full document text and answer a question against it.
    pub async fn answer_question(
        &self,
        document: Document,
        question: &str,
    ) -> Result<QaOutcome, PipelineError> {
        tracing::info!(format = ?document.format(), "Answering question");
        let text = extract::extract_text(document).await?;
        let answer = self.qa.answer(question, &text).await?;
        self.metrics.record_question();
        tracing::info!("Question answered");
        Ok(QaOutcome {
            question: question.to_string(),
            answer,
        })
    }

    /// Return the current pipeline metrics snapshot.
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[async_trait]
impl PipelineApi for PipelineService {
    async fn summarize_document(
        &self,
        document: Document,
        language: &str,
    ) -> Result<DocumentReport, PipelineError> {
        PipelineService::summarize_document(self, document, language).await
    }

    async fn answer_question(
        &self,
        document: Document,
        question: &str,
    ) -> Result<QaOutcome, PipelineError> {
        PipelineService::answer_question(self, document, question).await
    }

    fn metrics_snapshot(&self) -> MetricsSnapshot {
        PipelineService::metrics_snapshot(self)
    }
}
