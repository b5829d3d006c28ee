//! Per-chunk summarization and format fan-out.

use crate::models::{ModelClientError, summarizer::SummarizationClient};

/// Three parallel renderings of one chunk's summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSummary {
    /// Raw summary text returned by the model.
    pub plain: String,
    /// The summary reformatted as a bulleted list.
    pub bullets: String,
    /// The summary wrapped in a fixed FAQ template.
    pub faq: String,
}

/// Summarize one chunk and fan the result out into the three output formats.
pub async fn summarize_chunk(
    client: &dyn SummarizationClient,
    chunk: &str,
    max_length: usize,
    min_length: usize,
) -> Result<ChunkSummary, ModelClientError> {
    let plain = client.summarize(chunk, max_length, min_length).await?;
    Ok(ChunkSummary {
        bullets: to_bullets(&plain),
        faq: to_faq(&plain),
        plain,
    })
}

/// Reformat a summary as a bulleted list by treating every ". " as a sentence break.
///
/// The naive replacement also fires on abbreviations and decimal numbers followed by a
/// space; downstream consumers rely on the exact output, so the quirk stays.
pub fn to_bullets(summary: &str) -> String {
    format!("• {}", summary.replace(". ", ".\n• "))
}

/// Wrap a summary in the fixed FAQ template.
pub fn to_faq(summary: &str) -> String {
    format!("Q: What is this document about?\nA: {summary}")
}
